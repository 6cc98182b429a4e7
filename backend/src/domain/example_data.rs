//! Example product seeding orchestration.
//!
//! Plans a generation run after the highest numeric SKU already stored,
//! converts the generated records into product rows, and delegates
//! persistence to the seeding repository port.

use std::sync::Arc;

use example_data::{
    ExampleProductSeed, GenerationError, ProductGenerationPlan, generate_example_products,
};
use thiserror::Error;

use crate::domain::ProductRow;
use crate::domain::ports::{ProductSeedRepository, ProductSeedRepositoryError};

/// Parameters for one seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleDataSeedRequest {
    /// RNG seed driving price generation.
    pub seed: u64,
    /// Number of products to generate.
    pub count: usize,
    /// Inclusive lower price bound in minor units.
    pub min_price: i64,
    /// Inclusive upper price bound in minor units.
    pub max_price: i64,
}

/// Result of applying example data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleDataSeedOutcome {
    /// First SKU number assigned by this run.
    pub first_number: u64,
    /// Number of products generated.
    pub generated: usize,
    /// Number of products newly stored.
    pub inserted: usize,
}

/// Errors raised while preparing or applying example data.
#[derive(Debug, Error)]
pub enum ExampleDataSeedingError {
    /// The generation plan was rejected.
    #[error("example data generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// Persistence adapter failed while seeding.
    #[error("example data persistence error: {0}")]
    Persistence(#[from] ProductSeedRepositoryError),
}

/// Service that orchestrates example product seeding.
#[derive(Clone)]
pub struct ExampleDataSeeder<R> {
    repository: Arc<R>,
}

impl<R> ExampleDataSeeder<R> {
    /// Create a new seeder with the given persistence adapter.
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> ExampleDataSeeder<R>
where
    R: ProductSeedRepository,
{
    /// Generate and store `request.count` products after the highest
    /// numeric SKU.
    ///
    /// # Errors
    ///
    /// Returns [`ExampleDataSeedingError`] if the price range is invalid,
    /// numbering would overflow, or persistence fails.
    pub async fn seed(
        &self,
        request: ExampleDataSeedRequest,
    ) -> Result<ExampleDataSeedOutcome, ExampleDataSeedingError> {
        let plan = ProductGenerationPlan::new(
            request.seed,
            request.count,
            request.min_price,
            request.max_price,
        )?;
        let highest = self.repository.highest_numeric_sku().await?;
        let plan = plan.continuing_after(highest)?;

        let rows: Vec<ProductRow> = generate_example_products(&plan)
            .into_iter()
            .map(convert_seed_product)
            .collect();
        let inserted = if rows.is_empty() {
            0
        } else {
            self.repository.insert_products(&rows).await?
        };

        Ok(ExampleDataSeedOutcome {
            first_number: plan.first_number(),
            generated: rows.len(),
            inserted,
        })
    }
}

fn convert_seed_product(seed: ExampleProductSeed) -> ProductRow {
    let ExampleProductSeed {
        sku,
        name,
        category,
        price,
    } = seed;
    ProductRow {
        sku,
        name,
        category,
        price,
    }
}
