//! Client configuration.

use tracing::warn;

use crate::cache::CacheWritePolicy;
use crate::transport::API_URL;

/// Settings for building an [`OpenFigiClient`](crate::OpenFigiClient).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Mapping endpoint URL.
    pub api_url: String,
    /// API key for requests that don't set one.
    pub api_key: Option<String>,
    /// Redis address (`host:port` or `redis://` URL). Caching is off when unset.
    pub redis_addr: Option<String>,
    pub cache_write_policy: CacheWritePolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            api_key: None,
            redis_addr: None,
            cache_write_policy: CacheWritePolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Read the configuration from the process environment.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `OPENFIGI_API_URL` | public mapping endpoint |
    /// | `OPENFIGI_API_KEY` | none |
    /// | `OPENFIGI_REDIS_ADDR` | none (no caching) |
    /// | `OPENFIGI_CACHE_WRITE` | `strict` |
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable lookup.
    /// Empty values count as unset; an unknown cache policy falls back to strict.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            api_url: var("OPENFIGI_API_URL").unwrap_or_else(|| API_URL.to_string()),
            api_key: var("OPENFIGI_API_KEY"),
            redis_addr: var("OPENFIGI_REDIS_ADDR"),
            cache_write_policy: var("OPENFIGI_CACHE_WRITE")
                .map(|v| cache_write_policy(&v))
                .unwrap_or_default(),
        }
    }
}

fn cache_write_policy(value: &str) -> CacheWritePolicy {
    CacheWritePolicy::parse(value).unwrap_or_else(|| {
        warn!("Unknown OPENFIGI_CACHE_WRITE value '{}', using strict", value);
        CacheWritePolicy::Strict
    })
}
