//! Error types for the example-data crate.

use thiserror::Error;

/// Errors raised when a generation plan cannot be honoured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The lower price bound is negative.
    #[error("minimum price {min} must not be negative")]
    NegativePrice {
        /// Configured lower bound.
        min: i64,
    },

    /// The price bounds are inverted.
    #[error("minimum price {min} exceeds maximum price {max}")]
    InvalidPriceRange {
        /// Configured lower bound.
        min: i64,
        /// Configured upper bound.
        max: i64,
    },

    /// Continuing after the highest existing product number would overflow.
    #[error("cannot generate {count} products after product number {highest}")]
    NumberOverflow {
        /// Highest product number already stored.
        highest: u64,
        /// Requested number of products.
        count: usize,
    },
}
