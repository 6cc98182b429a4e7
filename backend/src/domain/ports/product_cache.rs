//! Port interface for caching priced product pages.
use std::time::Duration;

use async_trait::async_trait;

use super::{ProductCacheKey, define_port_error};

define_port_error! {
    /// Errors surfaced by the caching adapter.
    pub enum ProductCacheError {
        /// Cache backend is unavailable or timing out.
        Backend { message: String } => "product cache backend failure: {message}",
    }
}

/// Byte-oriented key/value cache with per-entry expiry.
///
/// Callers own serialisation; a payload that fails to decode is treated as a
/// miss rather than an error of this port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCache: Send + Sync {
    /// Read the payload stored under `key`, if any.
    async fn get(&self, key: &ProductCacheKey) -> Result<Option<Vec<u8>>, ProductCacheError>;

    /// Store `payload` under `key`, expiring after `ttl`.
    async fn set(
        &self,
        key: &ProductCacheKey,
        payload: &[u8],
        ttl: Duration,
    ) -> Result<(), ProductCacheError>;
}
