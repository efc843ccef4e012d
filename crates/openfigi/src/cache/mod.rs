//! Cache-aside layer for mapping results.
//!
//! Provides:
//! - [`CacheStore`]: the byte-string GET/SET contract of an external store
//! - [`RedisStore`]: a pooled Redis implementation
//! - [`MappingCache`]: encodes records and talks to an optional store
//!
//! Entries are keyed by the exact request body sent to the API, so two
//! requests share an entry only when they serialize byte-for-byte the same.

mod redis_store;

pub use redis_store::RedisStore;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::errors::{CacheError, FigiError};
use crate::models::FigiRecord;

/// A byte-string key-value store.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetch the value for `key`, or `None` when absent.
    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, CacheError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &[u8], value: Vec<u8>) -> Result<(), CacheError>;
}

/// What to do when the cache write after a successful fetch fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheWritePolicy {
    /// Fail the lookup with [`FigiError::Cache`] and drop the fetched records.
    #[default]
    Strict,
    /// Log the failure and return the fetched records.
    BestEffort,
}

impl CacheWritePolicy {
    /// Parse `strict` or `best-effort` (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "best-effort" | "best_effort" => Some(Self::BestEffort),
            _ => None,
        }
    }
}

/// Cache-aside access to mapping results.
///
/// Without a store every operation is a no-op: reads miss, writes succeed.
#[derive(Clone, Default)]
pub struct MappingCache {
    store: Option<Arc<dyn CacheStore>>,
}

impl MappingCache {
    /// A cache that never stores anything.
    pub fn disabled() -> Self {
        Self { store: None }
    }

    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store: Some(store) }
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// Look up the records cached for a request body.
    ///
    /// Store failures and undecodable entries are reported as
    /// [`FigiError::Transport`].
    pub async fn get(&self, key: &[u8]) -> Result<Option<Vec<FigiRecord>>, FigiError> {
        let Some(store) = &self.store else {
            return Ok(None);
        };

        let bytes = match store.get(key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!("OpenFIGI cache miss");
                return Ok(None);
            }
            Err(e) => {
                warn!("OpenFIGI cache read failed: {}", e);
                return Err(FigiError::Transport(Box::new(e)));
            }
        };

        let records: Vec<FigiRecord> = serde_json::from_slice(&bytes).map_err(|e| {
            warn!("OpenFIGI cache entry could not be decoded: {}", e);
            FigiError::Transport(Box::new(CacheError::Serialization(e)))
        })?;
        debug!("OpenFIGI cache hit ({} records)", records.len());
        Ok(Some(records))
    }

    /// Store the records fetched for a request body.
    pub async fn set(&self, key: &[u8], records: &[FigiRecord]) -> Result<(), CacheError> {
        let Some(store) = &self.store else {
            return Ok(());
        };

        let value = serde_json::to_vec(records)?;
        store.set(key, value).await
    }
}
