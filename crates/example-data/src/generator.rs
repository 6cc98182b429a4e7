//! Deterministic product generation from a validated plan.
//!
//! The same plan always produces identical output: prices are drawn from a
//! ChaCha8 stream seeded with the plan's seed value.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::seed::ExampleProductSeed;

/// Validated parameters for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductGenerationPlan {
    seed: u64,
    count: usize,
    min_price: i64,
    max_price: i64,
    highest_existing: u64,
}

impl ProductGenerationPlan {
    /// Validate the price range and build a plan starting at product 1.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when `min_price` is negative or exceeds
    /// `max_price`.
    pub const fn new(
        seed: u64,
        count: usize,
        min_price: i64,
        max_price: i64,
    ) -> Result<Self, GenerationError> {
        if min_price < 0 {
            return Err(GenerationError::NegativePrice { min: min_price });
        }
        if min_price > max_price {
            return Err(GenerationError::InvalidPriceRange {
                min: min_price,
                max: max_price,
            });
        }
        Ok(Self {
            seed,
            count,
            min_price,
            max_price,
            highest_existing: 0,
        })
    }

    /// Continue numbering after the highest product number already stored.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::NumberOverflow`] when the last generated
    /// number would not fit in a `u64`.
    pub fn continuing_after(mut self, highest: Option<u64>) -> Result<Self, GenerationError> {
        let highest = highest.unwrap_or(0);
        let overflow = GenerationError::NumberOverflow {
            highest,
            count: self.count,
        };
        let count = u64::try_from(self.count).map_err(|_| overflow.clone())?;
        highest.checked_add(count).ok_or(overflow)?;
        self.highest_existing = highest;
        Ok(self)
    }

    /// Number of products the plan generates.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// First product number the plan assigns.
    #[must_use]
    pub const fn first_number(&self) -> u64 {
        self.highest_existing.saturating_add(1)
    }
}

/// Generates example products from a plan.
///
/// Product numbers run consecutively from [`ProductGenerationPlan::first_number`];
/// prices are uniform in the plan's inclusive price range.
///
/// # Example
///
/// ```
/// use example_data::{ProductGenerationPlan, generate_example_products};
///
/// let plan = ProductGenerationPlan::new(42, 3, 30_000, 150_000)
///     .and_then(|plan| plan.continuing_after(Some(9)))
///     .expect("valid plan");
/// let products = generate_example_products(&plan);
///
/// let skus: Vec<_> = products.iter().map(|p| p.sku.as_str()).collect();
/// assert_eq!(skus, ["000010", "000011", "000012"]);
/// // Same plan produces identical products
/// assert_eq!(products, generate_example_products(&plan));
/// ```
#[must_use]
pub fn generate_example_products(plan: &ProductGenerationPlan) -> Vec<ExampleProductSeed> {
    let mut rng = ChaCha8Rng::seed_from_u64(plan.seed);
    (plan.first_number()..)
        .take(plan.count)
        .map(|number| {
            let price = rng.random_range(plan.min_price..=plan.max_price);
            ExampleProductSeed::new(number, price)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    //! Plan validation and generation determinism.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn plan() -> ProductGenerationPlan {
        ProductGenerationPlan::new(42, 30, 30_000, 150_000).expect("valid plan")
    }

    #[rstest]
    fn same_seed_generates_identical_products(plan: ProductGenerationPlan) {
        assert_eq!(
            generate_example_products(&plan),
            generate_example_products(&plan)
        );
    }

    #[rstest]
    fn different_seeds_change_prices(plan: ProductGenerationPlan) {
        let other = ProductGenerationPlan::new(43, 30, 30_000, 150_000).expect("valid plan");
        let first: Vec<i64> = generate_example_products(&plan)
            .iter()
            .map(|p| p.price)
            .collect();
        let second: Vec<i64> = generate_example_products(&other)
            .iter()
            .map(|p| p.price)
            .collect();
        assert_ne!(first, second);
    }

    #[rstest]
    fn prices_stay_within_inclusive_range(plan: ProductGenerationPlan) {
        assert!(
            generate_example_products(&plan)
                .iter()
                .all(|p| (30_000..=150_000).contains(&p.price))
        );
    }

    #[rstest]
    fn equal_bounds_fix_the_price() {
        let plan = ProductGenerationPlan::new(7, 5, 50_000, 50_000).expect("valid plan");
        assert!(
            generate_example_products(&plan)
                .iter()
                .all(|p| p.price == 50_000)
        );
    }

    #[rstest]
    fn numbering_continues_after_highest_existing(plan: ProductGenerationPlan) {
        let plan = plan.continuing_after(Some(999)).expect("no overflow");
        let products = generate_example_products(&plan);
        assert_eq!(products.len(), 30);
        assert_eq!(products.first().map(|p| p.sku.as_str()), Some("001000"));
        assert_eq!(products.last().map(|p| p.sku.as_str()), Some("001029"));
    }

    #[rstest]
    fn empty_store_starts_at_one(plan: ProductGenerationPlan) {
        let plan = plan.continuing_after(None).expect("no overflow");
        assert_eq!(plan.first_number(), 1);
        let products = generate_example_products(&plan);
        assert_eq!(
            products.first().map(|p| (p.sku.as_str(), p.name.as_str())),
            Some(("000001", "Product 1"))
        );
    }

    #[rstest]
    fn zero_count_generates_nothing() {
        let plan = ProductGenerationPlan::new(1, 0, 0, 10).expect("valid plan");
        assert!(generate_example_products(&plan).is_empty());
    }

    #[rstest]
    #[case(-1, 10, GenerationError::NegativePrice { min: -1 })]
    #[case(10, 5, GenerationError::InvalidPriceRange { min: 10, max: 5 })]
    fn invalid_price_ranges_are_rejected(
        #[case] min: i64,
        #[case] max: i64,
        #[case] expected: GenerationError,
    ) {
        let err = ProductGenerationPlan::new(1, 1, min, max).expect_err("invalid range");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn overflowing_numbering_is_rejected(plan: ProductGenerationPlan) {
        let err = plan
            .continuing_after(Some(u64::MAX - 1))
            .expect_err("overflow detected");
        assert!(matches!(err, GenerationError::NumberOverflow { .. }));
    }
}
