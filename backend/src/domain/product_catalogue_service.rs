//! Cache-aside product catalogue service.
//!
//! Implements [`ProductCatalogueQuery`] by consulting the product cache first
//! and falling back to the row source on any miss. Cache trouble is logged and
//! never fails a request; store failures always do.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{
    ProductCache, ProductCacheKey, ProductCatalogueQuery, ProductRowSource, ProductRowSourceError,
};
use crate::domain::{Error, PricingPolicy, Product, ProductListingRequest, ProductQuery};

/// Expiry applied to cached product pages unless configured otherwise.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(600);

/// Product listing service composing the query builder, the pricing policy
/// and an optional cache.
#[derive(Clone)]
pub struct ProductCatalogueService {
    rows: Arc<dyn ProductRowSource>,
    cache: Option<Arc<dyn ProductCache>>,
    pricing: Arc<PricingPolicy>,
    ttl: Duration,
}

impl ProductCatalogueService {
    /// Create a service without a cache; every call reaches the store.
    pub fn new(rows: Arc<dyn ProductRowSource>, pricing: Arc<PricingPolicy>) -> Self {
        Self {
            rows,
            cache: None,
            pricing,
            ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// Attach a cache used for read-through lookups.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn ProductCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Override the cache entry expiry.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    fn map_row_source_error(error: ProductRowSourceError) -> Error {
        match error {
            ProductRowSourceError::Connection { message } => {
                Error::internal(format!("product store unavailable: {message}"))
            }
            ProductRowSourceError::Query { message } => {
                Error::internal(format!("product store error: {message}"))
            }
        }
    }

    async fn read_cached(cache: &dyn ProductCache, key: &ProductCacheKey) -> Option<Vec<Product>> {
        let payload = match cache.get(key).await {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                debug!(cache_key = %key, "product cache miss");
                return None;
            }
            Err(err) => {
                warn!(cache_key = %key, error = %err, "product cache read failed");
                return None;
            }
        };
        match serde_json::from_slice::<Vec<Product>>(&payload) {
            Ok(products) => {
                debug!(cache_key = %key, count = products.len(), "product cache hit");
                Some(products)
            }
            Err(err) => {
                warn!(cache_key = %key, error = %err, "discarding undecodable cache entry");
                None
            }
        }
    }

    async fn write_cached(&self, cache: &dyn ProductCache, key: &ProductCacheKey, products: &[Product]) {
        let payload = match serde_json::to_vec(products) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(cache_key = %key, error = %err, "failed to encode products for cache");
                return;
            }
        };
        if let Err(err) = cache.set(key, &payload, self.ttl).await {
            warn!(cache_key = %key, error = %err, "product cache write failed");
        }
    }

    async fn load_from_store(&self, request: &ProductListingRequest) -> Result<Vec<Product>, Error> {
        let query = ProductQuery::for_listing(request);
        let rows = self
            .rows
            .query_rows(&query)
            .await
            .map_err(Self::map_row_source_error)?;
        Ok(rows.iter().map(|row| self.pricing.price(row)).collect())
    }
}

#[async_trait]
impl ProductCatalogueQuery for ProductCatalogueService {
    async fn list_products(&self, request: &ProductListingRequest) -> Result<Vec<Product>, Error> {
        let Some(cache) = self.cache.as_deref() else {
            return self.load_from_store(request).await;
        };

        let key = ProductCacheKey::for_listing(request);
        if let Some(products) = Self::read_cached(cache, &key).await {
            return Ok(products);
        }

        let products = self.load_from_store(request).await?;
        self.write_cached(cache, &key, &products).await;
        Ok(products)
    }
}

#[cfg(test)]
#[path = "product_catalogue_service_tests.rs"]
mod tests;
