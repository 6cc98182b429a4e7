//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use catalogue_backend::domain::{DEFAULT_CACHE_TTL, PricingPolicy};
use catalogue_backend::outbound::cache::RedisProductCache;
use catalogue_backend::outbound::persistence::DbPool;

const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(60);

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) cache: Option<RedisProductCache>,
    pub(crate) pricing: Arc<PricingPolicy>,
    pub(crate) cache_ttl: Duration,
    pub(crate) shutdown_timeout: Duration,
}

impl ServerConfig {
    /// Construct a configuration that serves fixtures without a cache.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            cache: None,
            pricing: Arc::new(PricingPolicy::default()),
            cache_ttl: DEFAULT_CACHE_TTL,
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
        }
    }

    /// Attach a database connection pool for the product store.
    ///
    /// Without a pool the server lists products from an empty fixture store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Attach the Redis product cache.
    #[must_use]
    pub fn with_cache(mut self, cache: RedisProductCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Override the expiry of cached product pages.
    #[must_use]
    pub const fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Override the grace period given to in-flight requests on shutdown.
    #[must_use]
    pub const fn with_shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.shutdown_timeout = timeout;
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(dead_code, reason = "Exercised by unit tests only")
    )]
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
