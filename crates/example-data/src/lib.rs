//! Deterministic example product data generation for demonstration purposes.
//!
//! Generates believable, reproducible product rows for filling an empty or
//! partially populated catalogue. It is designed to be independent of
//! backend domain types to avoid circular dependencies.
//!
//! # Example
//!
//! ```
//! use example_data::{ProductGenerationPlan, generate_example_products};
//!
//! let plan = ProductGenerationPlan::new(42, 3, 30_000, 150_000).expect("valid plan");
//! let products = generate_example_products(&plan);
//!
//! assert_eq!(products.len(), 3);
//! assert_eq!(products.first().map(|p| p.category.as_str()), Some("sandals"));
//! ```

mod error;
mod generator;
mod seed;

pub use error::GenerationError;
pub use generator::{ProductGenerationPlan, generate_example_products};
pub use seed::{CategorySeed, ExampleProductSeed};
