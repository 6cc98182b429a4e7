//! Redis-backed product cache.
//!
//! Implements the [`ProductCache`] port over a `bb8-redis` pool. Payloads are
//! opaque bytes written with `SET .. EX`; expiry is left to Redis, and no
//! explicit invalidation is performed.

use std::time::Duration;

use async_trait::async_trait;
use bb8_redis::RedisConnectionManager;
use bb8_redis::bb8::{Pool, PooledConnection};
use bb8_redis::redis::AsyncCommands;
use tracing::debug;

use crate::domain::ports::{ProductCache, ProductCacheError, ProductCacheKey};

/// Product cache backed by a pooled Redis connection.
#[derive(Clone)]
pub struct RedisProductCache {
    pool: Pool<RedisConnectionManager>,
}

impl RedisProductCache {
    /// Wrap an existing pool.
    pub fn new(pool: Pool<RedisConnectionManager>) -> Self {
        Self { pool }
    }

    /// Build a pool for `redis_url` and wrap it.
    ///
    /// # Examples
    /// ```rust,no_run
    /// use catalogue_backend::outbound::cache::RedisProductCache;
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let cache = RedisProductCache::connect("redis://127.0.0.1:6379", 8).await?;
    /// # let _ = cache;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(redis_url: &str, max_size: u32) -> Result<Self, ProductCacheError> {
        let manager = RedisConnectionManager::new(redis_url)
            .map_err(|err| ProductCacheError::backend(err.to_string()))?;
        let pool = Pool::builder()
            .max_size(max_size)
            .build(manager)
            .await
            .map_err(|err| ProductCacheError::backend(err.to_string()))?;
        Ok(Self::new(pool))
    }

    async fn connection(
        &self,
    ) -> Result<PooledConnection<'_, RedisConnectionManager>, ProductCacheError> {
        self.pool
            .get()
            .await
            .map_err(|err| ProductCacheError::backend(err.to_string()))
    }
}

/// Redis rejects `EX 0`, so sub-second TTLs round up to one second.
fn expiry_seconds(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}

#[async_trait]
impl ProductCache for RedisProductCache {
    async fn get(&self, key: &ProductCacheKey) -> Result<Option<Vec<u8>>, ProductCacheError> {
        let mut pooled = self.connection().await?;
        let conn = &mut *pooled;
        let payload: Option<Vec<u8>> = conn
            .get(key.as_str())
            .await
            .map_err(|err| ProductCacheError::backend(err.to_string()))?;
        debug!(cache_key = %key, found = payload.is_some(), "redis GET");
        Ok(payload)
    }

    async fn set(
        &self,
        key: &ProductCacheKey,
        payload: &[u8],
        ttl: Duration,
    ) -> Result<(), ProductCacheError> {
        let mut pooled = self.connection().await?;
        let conn = &mut *pooled;
        let seconds = expiry_seconds(ttl);
        conn.set_ex::<_, _, ()>(key.as_str(), payload, seconds)
            .await
            .map_err(|err| ProductCacheError::backend(err.to_string()))?;
        debug!(cache_key = %key, bytes = payload.len(), ttl_secs = seconds, "redis SET EX");
        Ok(())
    }
}
