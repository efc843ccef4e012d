//! Transport trait definitions.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::errors::FigiError;

/// One POST to the mapping endpoint.
#[derive(Clone, Copy, Debug)]
pub struct MappingCall<'a> {
    /// The serialized one-element batch.
    pub body: &'a [u8],
    /// Sent as `X-OPENFIGI-APIKEY` when present.
    pub api_key: Option<&'a str>,
    /// Bound on the whole exchange, connect to last body byte.
    pub timeout: Duration,
}

/// Raw answer from the mapping endpoint.
#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Return the body of a 200 response, or [`FigiError::WrongStatus`]
    /// for any other status without looking at the body.
    pub fn into_ok_body(self) -> Result<Vec<u8>, FigiError> {
        if self.status != StatusCode::OK {
            return Err(FigiError::WrongStatus(self.status));
        }
        Ok(self.body)
    }
}

/// Carries a mapping call to the API.
///
/// Implementations make exactly one attempt per call. Network failures are
/// returned as [`FigiError::Transport`]; status handling is left to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_mapping(&self, call: MappingCall<'_>) -> Result<TransportResponse, FigiError>;
}
