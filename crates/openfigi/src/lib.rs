//! OpenFIGI Mapping Client
//!
//! Maps third-party identifiers (ISIN, CUSIP, tickers, ...) to FIGI
//! instrument records through the OpenFIGI mapping API.
//!
//! # Overview
//!
//! Each lookup sends exactly one mapping job and makes at most one HTTP
//! call. Results can be cached in an external key-value store (Redis),
//! keyed by the exact request body.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  MappingRequest  |  (validated id type + options)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |  OpenFigiClient  | <-> |   MappingCache   |  (cache-aside, optional store)
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+
//! |    Transport     |  (HTTP POST, single shot)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  MappingEnvelope |  (data or error shape)
//! +------------------+
//! ```
//!
//! # Example
//!
//! ```no_run
//! use openfigi::{MappingRequest, OpenFigiClient};
//!
//! # async fn run() -> Result<(), openfigi::FigiError> {
//! let client = OpenFigiClient::new();
//! let request = MappingRequest::new("ID_ISIN", "US3623931009")?.with_exchange("US");
//! for record in client.execute(request).await? {
//!     println!("{} {}", record.ticker, record.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod response;
pub mod transport;

pub use cache::{CacheStore, CacheWritePolicy, MappingCache, RedisStore};
pub use client::OpenFigiClient;
pub use config::ClientConfig;
pub use errors::{CacheError, FigiError};
pub use models::{is_valid_identifier, FigiRecord, IdType, MappingJob, MappingRequest};
pub use response::MappingEnvelope;
pub use transport::{HttpTransport, MappingCall, Transport, TransportResponse};
