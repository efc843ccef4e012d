//! Classification of mapping response bodies.
//!
//! On HTTP 200 the API answers with a JSON array holding one envelope per
//! submitted job. An envelope is either `{"data": [...]}` or
//! `{"error": "..."}`, sometimes with extra fields such as `warning`.
//! The two shapes are decoded in order: data first, then error.

use serde::Deserialize;
use tracing::debug;

use crate::errors::FigiError;
use crate::models::FigiRecord;

/// Message the API uses when nothing matches the identifier.
pub const NO_IDENTIFIER_FOUND: &str = "No identifier found.";

#[derive(Debug, Deserialize)]
struct DataEnvelope {
    data: Vec<FigiRecord>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<String>,
}

/// The decoded envelope for the single submitted job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingEnvelope {
    /// The job matched zero or more instruments.
    Success { records: Vec<FigiRecord> },
    /// The job failed; the message may be empty.
    Failure { message: String },
}

impl MappingEnvelope {
    /// Decode a response body.
    ///
    /// Returns [`FigiError::ApiError`] when the body is an empty array or
    /// matches neither shape.
    pub fn decode(body: &[u8]) -> Result<Self, FigiError> {
        if let Ok(envelopes) = serde_json::from_slice::<Vec<DataEnvelope>>(body) {
            return envelopes
                .into_iter()
                .next()
                .map(|envelope| MappingEnvelope::Success {
                    records: envelope.data,
                })
                .ok_or(FigiError::ApiError);
        }

        let envelopes = serde_json::from_slice::<Vec<ErrorEnvelope>>(body).map_err(|e| {
            debug!("OpenFIGI: response matches neither envelope shape: {}", e);
            FigiError::ApiError
        })?;

        envelopes
            .into_iter()
            .next()
            .map(|envelope| MappingEnvelope::Failure {
                message: envelope.error.unwrap_or_default(),
            })
            .ok_or(FigiError::ApiError)
    }

    /// Turn the envelope into the lookup outcome.
    pub fn into_result(self) -> Result<Vec<FigiRecord>, FigiError> {
        match self {
            MappingEnvelope::Success { records } => Ok(records),
            MappingEnvelope::Failure { message } => Err(error_for_message(message)),
        }
    }
}

/// Classify a response body into records or an error.
pub fn classify(body: &[u8]) -> Result<Vec<FigiRecord>, FigiError> {
    MappingEnvelope::decode(body)?.into_result()
}

/// Upstream messages with a dedicated error kind.
fn known_api_error(message: &str) -> Option<FigiError> {
    match message {
        NO_IDENTIFIER_FOUND => Some(FigiError::NoIdentifierFound),
        "" => Some(FigiError::ApiError),
        _ => None,
    }
}

fn error_for_message(message: String) -> FigiError {
    known_api_error(&message).unwrap_or(FigiError::Api(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_envelope() {
        let body = br#"[{"data":[
            {"figi":"BBG000BCR153","ticker":"GTT","name":"GTT COMMUNICATIONS INC","exchCode":"US"},
            {"figi":"BBG000BCR1X8","ticker":"GTT","name":"GTT COMMUNICATIONS INC","exchCode":"UN"}
        ]}]"#;

        let records = classify(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ticker, "GTT");
        assert_eq!(records[1].exchange_code, "UN");
    }

    #[test]
    fn test_empty_data_is_success() {
        let records = classify(br#"[{"data":[]}]"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_data_with_extra_fields() {
        let body = br#"[{"data":[{"figi":"BBG000BLNNH6"}],"warning":"Some warning"}]"#;
        let envelope = MappingEnvelope::decode(body).unwrap();
        match envelope {
            MappingEnvelope::Success { records } => assert_eq!(records[0].figi, "BBG000BLNNH6"),
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_no_identifier_found() {
        let result = classify(br#"[{"error":"No identifier found."}]"#);
        assert!(matches!(result, Err(FigiError::NoIdentifierFound)));
    }

    #[test]
    fn test_no_identifier_found_ignores_other_fields() {
        let body = br#"[{"warning":"ignored","error":"No identifier found.","code":7}]"#;
        assert!(matches!(classify(body), Err(FigiError::NoIdentifierFound)));
    }

    #[test]
    fn test_message_match_is_exact() {
        let result = classify(br#"[{"error":"No identifier found"}]"#);
        assert!(matches!(result, Err(FigiError::Api(message)) if message == "No identifier found"));
    }

    #[test]
    fn test_other_message_is_wrapped() {
        let result = classify(br#"[{"error":"Invalid idType."}]"#);
        assert!(matches!(result, Err(FigiError::Api(message)) if message == "Invalid idType."));
    }

    #[test]
    fn test_empty_message_is_api_error() {
        assert!(matches!(classify(br#"[{"error":""}]"#), Err(FigiError::ApiError)));
        assert!(matches!(classify(br#"[{}]"#), Err(FigiError::ApiError)));
    }

    #[test]
    fn test_empty_array_is_api_error() {
        assert!(matches!(classify(b"[]"), Err(FigiError::ApiError)));
    }

    #[test]
    fn test_unparseable_body_is_api_error() {
        let bodies: [&[u8]; 4] = [
            b"not json",
            br#"{"data":[]}"#,
            br#"[{"error":42}]"#,
            br#"[{"data":"oops"}]"#,
        ];
        for body in bodies {
            assert!(matches!(classify(body), Err(FigiError::ApiError)));
        }
    }

    #[test]
    fn test_null_data_falls_back_to_error_shape() {
        let result = classify(br#"[{"data":null,"error":"No identifier found."}]"#);
        assert!(matches!(result, Err(FigiError::NoIdentifierFound)));
    }
}
