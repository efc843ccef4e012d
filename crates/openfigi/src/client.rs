//! The lookup pipeline.
//!
//! ```text
//! MappingRequest -> body -> cache GET --hit--> records
//!                              |
//!                             miss
//!                              v
//!                     transport POST -> status check -> classify -> cache SET -> records
//! ```

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::{CacheStore, CacheWritePolicy, MappingCache, RedisStore};
use crate::config::ClientConfig;
use crate::errors::FigiError;
use crate::models::{FigiRecord, MappingRequest};
use crate::response;
use crate::transport::{HttpTransport, MappingCall, Transport};

/// Client for the OpenFIGI mapping endpoint.
///
/// Caching is off unless a store is attached with
/// [`with_cache_store`](Self::with_cache_store) or configured through
/// [`ClientConfig::redis_addr`].
#[derive(Clone)]
pub struct OpenFigiClient {
    transport: Arc<dyn Transport>,
    cache: MappingCache,
    cache_write_policy: CacheWritePolicy,
    default_api_key: Option<String>,
}

impl OpenFigiClient {
    /// A client for the public endpoint with caching disabled.
    pub fn new() -> Self {
        Self {
            transport: Arc::new(HttpTransport::new()),
            cache: MappingCache::disabled(),
            cache_write_policy: CacheWritePolicy::default(),
            default_api_key: None,
        }
    }

    /// Build a client from configuration, opening the Redis store if one
    /// is configured.
    pub fn from_config(config: &ClientConfig) -> Result<Self, FigiError> {
        let mut client = Self::new()
            .with_transport(Arc::new(HttpTransport::with_endpoint(&config.api_url)))
            .with_cache_write_policy(config.cache_write_policy);

        if let Some(api_key) = &config.api_key {
            client = client.with_default_api_key(api_key.clone());
        }

        if let Some(addr) = &config.redis_addr {
            let store = RedisStore::connect(addr).map_err(FigiError::Cache)?;
            debug!("OpenFIGI cache enabled");
            client = client.with_cache_store(Arc::new(store));
        }

        Ok(client)
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Enable caching through `store`.
    pub fn with_cache_store(mut self, store: Arc<dyn CacheStore>) -> Self {
        self.cache = MappingCache::new(store);
        self
    }

    pub fn with_cache_write_policy(mut self, policy: CacheWritePolicy) -> Self {
        self.cache_write_policy = policy;
        self
    }

    /// API key used for requests that don't carry their own.
    pub fn with_default_api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        self.default_api_key = (!api_key.is_empty()).then_some(api_key);
        self
    }

    pub fn is_cache_enabled(&self) -> bool {
        self.cache.is_enabled()
    }

    /// Map one identifier to its instrument records.
    ///
    /// Makes at most one HTTP call and never retries. Cached results are
    /// returned without calling the API.
    pub async fn execute(&self, request: MappingRequest) -> Result<Vec<FigiRecord>, FigiError> {
        let body = request.to_batch_body()?;

        if let Some(records) = self.cache.get(&body).await? {
            return Ok(records);
        }

        let call = MappingCall {
            body: &body,
            api_key: request.api_key().or(self.default_api_key.as_deref()),
            timeout: request.timeout(),
        };
        let reply = self.transport.post_mapping(call).await?;
        let payload = reply.into_ok_body()?;
        let records = response::classify(&payload)?;

        debug!(
            "OpenFIGI: {} {} matched {} records",
            request.job().id_type(),
            request.job().id_value(),
            records.len()
        );

        if let Err(e) = self.cache.set(&body, &records).await {
            match self.cache_write_policy {
                CacheWritePolicy::Strict => return Err(FigiError::Cache(e)),
                CacheWritePolicy::BestEffort => {
                    warn!("OpenFIGI cache write failed, returning uncached result: {}", e)
                }
            }
        }

        Ok(records)
    }
}

impl Default for OpenFigiClient {
    fn default() -> Self {
        Self::new()
    }
}
