//! Error types for the OpenFIGI client.
//!
//! This module provides:
//! - [`FigiError`]: The error returned by every lookup
//! - [`CacheError`]: Failures raised by a [`CacheStore`](crate::cache::CacheStore)

use reqwest::StatusCode;
use thiserror::Error;

/// Boxed error used to carry transport failures verbatim.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while mapping an identifier.
///
/// Every variant is terminal: the client never retries, so the first
/// failure in the lookup pipeline is what the caller receives.
#[derive(Error, Debug)]
pub enum FigiError {
    /// The requested identifier type is not one of the codes the API accepts.
    /// Raised at request construction, before any I/O.
    #[error("Not a valid identifier type: {0}")]
    InvalidIdentifier(String),

    /// A network or I/O failure while talking to the API, or a failure
    /// reading a cached entry back from the store.
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    /// The API answered with something other than HTTP 200.
    /// The body is not inspected.
    #[error("Wrong status received from api: {0}")]
    WrongStatus(StatusCode),

    /// The response body matched neither the data nor the error envelope,
    /// or the error envelope carried no message.
    #[error("Unknown api error occurred")]
    ApiError,

    /// The API has no instrument for the requested identifier.
    #[error("No identifier found")]
    NoIdentifierFound,

    /// Any other error message reported by the API.
    #[error("OpenFIGI error: {0}")]
    Api(String),

    /// The cache store could not be opened, or fetched records could not be
    /// written to it.
    #[error("Cache error: {0}")]
    Cache(#[source] CacheError),

    /// The mapping job could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FigiError {
    fn from(err: reqwest::Error) -> Self {
        FigiError::Transport(Box::new(err))
    }
}

impl FigiError {
    /// Whether the failure came from the network layer and hit the request timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport(source) => source
                .downcast_ref::<reqwest::Error>()
                .is_some_and(reqwest::Error::is_timeout),
            _ => false,
        }
    }
}

/// Errors raised by cache stores.
#[derive(Error, Debug)]
pub enum CacheError {
    /// No pooled connection could be checked out.
    #[error("Cache connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// The store rejected or failed a command.
    #[error("Cache command failed: {0}")]
    Command(#[from] redis::RedisError),

    /// A cached payload could not be encoded or decoded.
    #[error("Cache payload is malformed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failure reported by a store that is not backed by Redis.
    #[error("Cache store error: {0}")]
    Store(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = FigiError::InvalidIdentifier("BOGUS".to_string());
        assert_eq!(format!("{}", error), "Not a valid identifier type: BOGUS");

        let error = FigiError::WrongStatus(StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            format!("{}", error),
            "Wrong status received from api: 429 Too Many Requests"
        );

        let error = FigiError::Api("Invalid idType.".to_string());
        assert_eq!(format!("{}", error), "OpenFIGI error: Invalid idType.");

        let error = FigiError::Cache(CacheError::Store("disk full".to_string()));
        assert_eq!(
            format!("{}", error),
            "Cache error: Cache store error: disk full"
        );
    }

    #[test]
    fn test_transport_keeps_source() {
        let error = FigiError::Transport(Box::new(CacheError::Store("gone".to_string())));
        let source = std::error::Error::source(&error).expect("source");
        assert_eq!(source.to_string(), "Cache store error: gone");
        assert!(!error.is_timeout());
    }

    #[test]
    fn test_non_transport_is_not_timeout() {
        assert!(!FigiError::NoIdentifierFound.is_timeout());
        assert!(!FigiError::ApiError.is_timeout());
    }
}
