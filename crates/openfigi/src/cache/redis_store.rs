//! Redis-backed cache store.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use r2d2::Pool;
use redis::Commands;

use super::CacheStore;
use crate::errors::CacheError;

const MAX_CONNECTIONS: u32 = 5;
const IDLE_TIMEOUT: Duration = Duration::from_secs(240);
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Cache store on a Redis server, using plain `GET`/`SET` without expiry.
///
/// Connections come from a small r2d2 pool. They are dialed on first use,
/// so creating the store never touches the network.
#[derive(Clone)]
pub struct RedisStore {
    pool: Arc<Pool<redis::Client>>,
}

impl RedisStore {
    /// Create a store for `addr`, either a `redis://` URL or `host:port`.
    pub fn connect(addr: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(redis_url(addr))?;
        let pool = Pool::builder()
            .max_size(MAX_CONNECTIONS)
            .min_idle(Some(0))
            .idle_timeout(Some(IDLE_TIMEOUT))
            .connection_timeout(CONNECTION_TIMEOUT)
            .build_unchecked(client);

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Run a command on a pooled connection off the async runtime.
    /// The connection goes back to the pool when `op` returns.
    async fn with_connection<T, F>(&self, op: F) -> Result<T, CacheError>
    where
        T: Send + 'static,
        F: FnOnce(&mut redis::Connection) -> Result<T, CacheError> + Send + 'static,
    {
        let pool = Arc::clone(&self.pool);
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            op(&mut conn)
        })
        .await
        .map_err(|e| CacheError::Store(format!("cache task failed: {}", e)))?
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, CacheError> {
        let key = key.to_vec();
        self.with_connection(move |conn| Ok(conn.get::<_, Option<Vec<u8>>>(key)?))
            .await
    }

    async fn set(&self, key: &[u8], value: Vec<u8>) -> Result<(), CacheError> {
        let key = key.to_vec();
        self.with_connection(move |conn| Ok(conn.set::<_, _, ()>(key, value)?))
            .await
    }
}

fn redis_url(addr: &str) -> String {
    if addr.contains("://") {
        addr.to_string()
    } else {
        format!("redis://{}/", addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redis_url() {
        assert_eq!(redis_url("192.168.0.3:6379"), "redis://192.168.0.3:6379/");
        assert_eq!(redis_url("redis://cache:6380/2"), "redis://cache:6380/2");
        assert_eq!(redis_url("rediss://cache:6380/"), "rediss://cache:6380/");
    }

    #[test]
    fn test_connect_is_lazy() {
        // Nothing listens on this port; building the store must still succeed.
        let store = RedisStore::connect("127.0.0.1:1").unwrap();
        assert_eq!(store.pool.max_size(), MAX_CONNECTIONS);
        assert_eq!(store.pool.state().connections, 0);
    }

    #[test]
    fn test_connect_rejects_bad_url() {
        assert!(matches!(
            RedisStore::connect("http://not-redis"),
            Err(CacheError::Command(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_server_reports_pool_error() {
        let store = RedisStore::connect("127.0.0.1:1").unwrap();
        let result = store.get(b"key").await;
        assert!(matches!(result, Err(CacheError::Pool(_))));
    }
}
