//! Server configuration loaded via OrthoConfig.
//!
//! Values layer command-line flags over `CATALOGUE_*` environment variables
//! over an optional configuration file. Optional infrastructure URLs select
//! between real adapters and in-process fallbacks at startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Runtime settings for the catalogue server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATALOGUE")]
pub struct ServerSettings {
    /// Interface address to bind.
    pub host: Option<IpAddr>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// PostgreSQL connection string; absent runs against an empty store.
    pub database_url: Option<String>,
    /// Redis connection string; absent disables caching.
    pub redis_url: Option<String>,
    /// Expiry applied to cached product pages, in seconds.
    #[ortho_config(default = 600)]
    pub cache_ttl_secs: u64,
    /// Maximum connections held by the database pool.
    #[ortho_config(default = 10)]
    pub db_pool_size: u32,
    /// Wait for a free database connection before a request fails, in seconds.
    #[ortho_config(default = 30)]
    pub db_checkout_timeout_secs: u64,
    /// Apply embedded migrations before serving; absent means `false`.
    pub run_migrations: Option<bool>,
    /// Grace period for in-flight requests on shutdown, in seconds.
    #[ortho_config(default = 60)]
    pub shutdown_timeout_secs: u64,
}

impl ServerSettings {
    /// Address the HTTP listener binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        let host = self.host.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        SocketAddr::new(host, self.port)
    }

    /// Cache entry expiry as a [`Duration`].
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Database connection checkout wait as a [`Duration`].
    pub const fn db_checkout_timeout(&self) -> Duration {
        Duration::from_secs(self.db_checkout_timeout_secs)
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        non_blank(self.database_url.as_deref())
    }

    /// Redis URL, ignoring blank values.
    pub fn redis_url(&self) -> Option<&str> {
        non_blank(self.redis_url.as_deref())
    }

    /// Whether embedded migrations run before the pool is built.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(false)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|url| !url.is_empty())
}
