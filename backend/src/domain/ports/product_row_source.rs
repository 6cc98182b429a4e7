//! Read-side port for product rows.
//!
//! The catalogue service hands a fully parameterised [`ProductQuery`] to the
//! adapter and receives raw rows back; pricing happens in the domain.

use async_trait::async_trait;

use crate::domain::{ProductQuery, ProductRow};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading product rows.
    pub enum ProductRowSourceError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "product store connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "product store query failed: {message}",
    }
}

/// Port executing product listing queries against the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRowSource: Send + Sync {
    /// Execute `query` and return every row in store order.
    ///
    /// No partial results: any execution or scan failure fails the whole call.
    async fn query_rows(&self, query: &ProductQuery) -> Result<Vec<ProductRow>, ProductRowSourceError>;
}

/// Fixture implementation used when no database is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProductRowSource;

#[async_trait]
impl ProductRowSource for FixtureProductRowSource {
    async fn query_rows(&self, _query: &ProductQuery) -> Result<Vec<ProductRow>, ProductRowSourceError> {
        Ok(Vec::new())
    }
}
