//! Port abstraction for seeding example products.
//!
//! Seeding continues numbering after the highest numeric SKU already stored,
//! so repeated runs append rather than collide.

use async_trait::async_trait;

use crate::domain::ProductRow;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by product seed repository adapters.
    pub enum ProductSeedRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "product seeding connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "product seeding query failed: {message}",
    }
}

/// Port for bulk inserting generated products.
///
/// Implementations must skip rows whose SKU already exists rather than fail.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductSeedRepository: Send + Sync {
    /// Highest SKU consisting only of digits, parsed as a number.
    ///
    /// Returns `None` for an empty table.
    async fn highest_numeric_sku(&self) -> Result<Option<u64>, ProductSeedRepositoryError>;

    /// Insert `rows`, returning how many were newly stored.
    async fn insert_products(&self, rows: &[ProductRow]) -> Result<usize, ProductSeedRepositoryError>;
}
