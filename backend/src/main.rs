//! Backend entry-point: loads settings, connects infrastructure, and serves
//! the product catalogue.

mod server;

use std::time::Duration;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[cfg(feature = "example-data")]
use catalogue_backend::example_data::{ExampleDataSettings, seed_example_data_on_startup};
use catalogue_backend::inbound::http::health::HealthState;
use catalogue_backend::outbound::cache::RedisProductCache;
use catalogue_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use catalogue_backend::settings::ServerSettings;
use ortho_config::OrthoConfig;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let db_pool = build_db_pool(&settings).await?;

    #[cfg(feature = "example-data")]
    seed_example_data(db_pool.as_ref()).await?;

    let mut config = ServerConfig::new(settings.bind_addr())
        .with_cache_ttl(settings.cache_ttl())
        .with_shutdown_timeout(Duration::from_secs(settings.shutdown_timeout_secs));
    if let Some(pool) = db_pool {
        config = config.with_db_pool(pool);
    }
    if let Some(cache) = connect_cache(&settings).await {
        config = config.with_cache(cache);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(bind_addr = %settings.bind_addr(), "starting catalogue server");
    create_server(health_state, config)?.await
}

/// Build the database pool, applying migrations first when enabled.
///
/// Returns `None` when no database URL is configured; the server then lists
/// products from an empty fixture store.
async fn build_db_pool(settings: &ServerSettings) -> std::io::Result<Option<DbPool>> {
    let Some(database_url) = settings.database_url() else {
        warn!("no database URL configured; serving from an empty fixture store");
        return Ok(None);
    };

    if settings.run_migrations() {
        let applied = run_pending_migrations(database_url)
            .await
            .map_err(|e| std::io::Error::other(format!("database migration failed: {e}")))?;
        info!(applied, "database migrations applied");
    }

    let config = PoolConfig::new(database_url)
        .with_max_size(settings.db_pool_size)
        .with_checkout_timeout(settings.db_checkout_timeout());
    let pool = DbPool::new(config)
        .await
        .map_err(|e| std::io::Error::other(format!("database pool init failed: {e}")))?;
    Ok(Some(pool))
}

/// Connect the Redis cache; failures degrade to running without a cache.
async fn connect_cache(settings: &ServerSettings) -> Option<RedisProductCache> {
    let Some(redis_url) = settings.redis_url() else {
        info!("no redis URL configured; product cache disabled");
        return None;
    };
    match RedisProductCache::connect(redis_url, settings.db_pool_size).await {
        Ok(cache) => Some(cache),
        Err(e) => {
            warn!(error = %e, "redis unavailable; product cache disabled");
            None
        }
    }
}

#[cfg(feature = "example-data")]
async fn seed_example_data(db_pool: Option<&DbPool>) -> std::io::Result<()> {
    let settings = ExampleDataSettings::load_without_cli(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load example data settings: {e}")))?;
    seed_example_data_on_startup(&settings, db_pool)
        .await
        .map_err(|e| std::io::Error::other(format!("example data seeding failed: {e}")))?;
    Ok(())
}
