//! Driving port for product listings.
//!
//! Inbound adapters depend on this trait rather than on the concrete service,
//! keeping HTTP handlers free of cache and store wiring.

use async_trait::async_trait;

use crate::domain::{Error, Product, ProductListingRequest};

/// Domain use-case port for listing priced products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCatalogueQuery: Send + Sync {
    /// Return the page of discounted products described by `request`.
    async fn list_products(&self, request: &ProductListingRequest) -> Result<Vec<Product>, Error>;
}

/// Fixture query returning an empty page.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProductCatalogueQuery;

#[async_trait]
impl ProductCatalogueQuery for FixtureProductCatalogueQuery {
    async fn list_products(&self, _request: &ProductListingRequest) -> Result<Vec<Product>, Error> {
        Ok(Vec::new())
    }
}
