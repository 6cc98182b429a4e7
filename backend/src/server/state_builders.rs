//! Builders for the HTTP state and the product catalogue service.

use std::sync::Arc;

use actix_web::web;

use catalogue_backend::domain::ProductCatalogueService;
use catalogue_backend::domain::ports::{FixtureProductRowSource, ProductRowSource};
use catalogue_backend::inbound::http::state::HttpState;
use catalogue_backend::outbound::persistence::DieselProductRowSource;

use super::ServerConfig;

/// Select the row source: the Diesel adapter when a pool is configured,
/// otherwise the empty fixture store.
fn build_row_source(config: &ServerConfig) -> Arc<dyn ProductRowSource> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselProductRowSource::new(pool.clone())),
        None => Arc::new(FixtureProductRowSource),
    }
}

/// Compose the cache-aside catalogue service from the configured adapters.
pub(super) fn build_catalogue_service(config: &ServerConfig) -> ProductCatalogueService {
    let service = ProductCatalogueService::new(build_row_source(config), config.pricing.clone())
        .with_ttl(config.cache_ttl);
    match &config.cache {
        Some(cache) => service.with_cache(Arc::new(cache.clone())),
        None => service,
    }
}

/// Build the shared HTTP state handed to every worker.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(Arc::new(build_catalogue_service(config))))
}
