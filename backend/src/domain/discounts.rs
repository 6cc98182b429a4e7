//! Discount rules and the pricing policy that applies them.
//!
//! The rule list is an immutable value injected into the catalogue service,
//! so alternative rule sets can be exercised without touching global state.

use super::{Price, Product, ProductRow};

/// Currency code attached to every priced product in this deployment.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Applicability predicate of a discount rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscountTarget {
    /// Matches products in the named category.
    Category(String),
    /// Matches the product with the named SKU.
    Sku(String),
}

impl DiscountTarget {
    fn matches(&self, row: &ProductRow) -> bool {
        match self {
            Self::Category(category) => *category == row.category,
            Self::Sku(sku) => *sku == row.sku,
        }
    }
}

/// Validation errors raised when constructing a [`DiscountRule`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiscountRuleValidationError {
    /// Percentage exceeded 100.
    #[error("discount percentage must be between 0 and 100, got {percentage}")]
    PercentageOutOfRange {
        /// Rejected value.
        percentage: u8,
    },
}

/// A percentage discount applied to matching products.
///
/// ## Invariants
/// - `percentage` lies in `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountRule {
    percentage: u8,
    target: DiscountTarget,
}

impl DiscountRule {
    /// Validate and construct a rule.
    pub fn new(percentage: u8, target: DiscountTarget) -> Result<Self, DiscountRuleValidationError> {
        if percentage > 100 {
            return Err(DiscountRuleValidationError::PercentageOutOfRange { percentage });
        }
        Ok(Self { percentage, target })
    }

    /// Discount as a whole percentage.
    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    /// Predicate selecting the products this rule applies to.
    pub fn target(&self) -> &DiscountTarget {
        &self.target
    }
}

/// Immutable pricing configuration: the currency and an ordered rule list.
///
/// # Examples
/// ```
/// use catalogue_backend::domain::{PricingPolicy, ProductRow};
///
/// let policy = PricingPolicy::default();
/// let product = policy.price(&ProductRow {
///     sku: "000003".to_owned(),
///     name: "Product 3".to_owned(),
///     category: "shoes".to_owned(),
///     price: 60_000,
/// });
/// assert_eq!(product.price.final_amount, 51_000);
/// assert_eq!(product.price.discount_percentage.as_deref(), Some("15%"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingPolicy {
    currency: String,
    rules: Vec<DiscountRule>,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_owned(),
            rules: vec![
                DiscountRule {
                    percentage: 30,
                    target: DiscountTarget::Category("boots".to_owned()),
                },
                DiscountRule {
                    percentage: 15,
                    target: DiscountTarget::Sku("000003".to_owned()),
                },
            ],
        }
    }
}

impl PricingPolicy {
    /// Build a policy from an explicit currency and ordered rule list.
    pub fn new(currency: impl Into<String>, rules: Vec<DiscountRule>) -> Self {
        Self {
            currency: currency.into(),
            rules,
        }
    }

    /// Currency attached to priced products.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[DiscountRule] {
        &self.rules
    }

    /// Highest-percentage matching rule; the earliest rule wins ties and
    /// zero-percent rules never win.
    fn best_rule(&self, row: &ProductRow) -> Option<&DiscountRule> {
        self.rules
            .iter()
            .filter(|rule| rule.percentage > 0 && rule.target.matches(row))
            .fold(None, |best: Option<&DiscountRule>, rule| match best {
                Some(current) if current.percentage >= rule.percentage => Some(current),
                _ => Some(rule),
            })
    }

    /// Price a store row, applying the winning discount if any.
    pub fn price(&self, row: &ProductRow) -> Product {
        let price = match self.best_rule(row) {
            Some(rule) => Price {
                original: row.price,
                final_amount: apply_percentage(row.price, rule.percentage),
                discount_percentage: Some(format!("{}%", rule.percentage)),
                currency: self.currency.clone(),
            },
            None => Price::undiscounted(row.price, self.currency.clone()),
        };
        Product {
            sku: row.sku.clone(),
            name: row.name.clone(),
            category: row.category.clone(),
            price,
        }
    }
}

/// Subtract `percentage` of `amount`, flooring the reduction.
///
/// The product is taken in `i128` so every `i64` price is representable.
fn apply_percentage(amount: i64, percentage: u8) -> i64 {
    let amount = i128::from(amount);
    let reduced = amount - (amount * i128::from(percentage)).div_euclid(100);
    i64::try_from(reduced).unwrap_or(if reduced < 0 { i64::MIN } else { i64::MAX })
}

#[cfg(test)]
mod tests {
    //! Rule selection and price arithmetic.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn policy() -> PricingPolicy {
        PricingPolicy::default()
    }

    fn row(sku: &str, category: &str, price: i64) -> ProductRow {
        ProductRow {
            sku: sku.to_owned(),
            name: format!("Product {sku}"),
            category: category.to_owned(),
            price,
        }
    }

    fn rule(percentage: u8, target: DiscountTarget) -> DiscountRule {
        DiscountRule::new(percentage, target).expect("valid rule")
    }

    #[rstest]
    #[case::both_rules_match("000003", "boots", 100_000, 70_000, Some("30%"))]
    #[case::sku_rule_only("000003", "shoes", 60_000, 51_000, Some("15%"))]
    #[case::category_rule_only("000001", "boots", 80_000, 56_000, Some("30%"))]
    #[case::no_rule("000002", "sandals", 42_000, 42_000, None)]
    fn applies_highest_matching_discount(
        policy: PricingPolicy,
        #[case] sku: &str,
        #[case] category: &str,
        #[case] original: i64,
        #[case] expected_final: i64,
        #[case] expected_label: Option<&str>,
    ) {
        let product = policy.price(&row(sku, category, original));

        assert_eq!(product.price.original, original);
        assert_eq!(product.price.final_amount, expected_final);
        assert_eq!(product.price.discount_percentage.as_deref(), expected_label);
        assert_eq!(product.price.currency, "EUR");
        assert_eq!(product.sku, sku);
    }

    #[rstest]
    fn discount_rounds_reduction_down(policy: PricingPolicy) {
        // 30% of 99 is 29.7; the reduction floors to 29.
        let product = policy.price(&row("000001", "boots", 99));
        assert_eq!(product.price.final_amount, 70);
    }

    #[rstest]
    #[case::tenth_of_max(922_337_203_685_477_580, 645_636_042_579_834_306)]
    #[case::max(i64::MAX, 6_456_360_425_798_343_065)]
    fn large_prices_do_not_overflow(
        policy: PricingPolicy,
        #[case] original: i64,
        #[case] expected_final: i64,
    ) {
        let product = policy.price(&row("000001", "boots", original));

        assert_eq!(product.price.original, original);
        assert_eq!(product.price.final_amount, expected_final);
        assert_eq!(product.price.discount_percentage.as_deref(), Some("30%"));
    }

    #[rstest]
    fn zero_percent_rule_never_labels() {
        let policy = PricingPolicy::new(
            "EUR",
            vec![rule(0, DiscountTarget::Category("boots".to_owned()))],
        );
        let product = policy.price(&row("000001", "boots", 1_000));

        assert_eq!(product.price.final_amount, 1_000);
        assert!(product.price.discount_percentage.is_none());
    }

    #[rstest]
    fn first_rule_wins_ties() {
        let policy = PricingPolicy::new(
            "EUR",
            vec![
                rule(20, DiscountTarget::Sku("000009".to_owned())),
                rule(20, DiscountTarget::Category("boots".to_owned())),
            ],
        );
        let best = policy.best_rule(&row("000009", "boots", 1_000));

        assert_eq!(
            best.map(DiscountRule::target),
            Some(&DiscountTarget::Sku("000009".to_owned()))
        );
    }

    #[rstest]
    fn later_rule_wins_when_strictly_greater() {
        let policy = PricingPolicy::new(
            "GBP",
            vec![
                rule(10, DiscountTarget::Sku("000009".to_owned())),
                rule(50, DiscountTarget::Category("boots".to_owned())),
            ],
        );
        let product = policy.price(&row("000009", "boots", 1_000));

        assert_eq!(product.price.final_amount, 500);
        assert_eq!(product.price.discount_percentage.as_deref(), Some("50%"));
        assert_eq!(product.price.currency, "GBP");
    }

    #[rstest]
    fn full_discount_is_free() {
        let policy = PricingPolicy::new(
            "EUR",
            vec![rule(100, DiscountTarget::Sku("000001".to_owned()))],
        );
        assert_eq!(policy.price(&row("000001", "boots", 1_234)).price.final_amount, 0);
    }

    #[rstest]
    fn rejects_percentages_above_one_hundred() {
        let result = DiscountRule::new(101, DiscountTarget::Sku("000001".to_owned()));
        assert_eq!(
            result,
            Err(DiscountRuleValidationError::PercentageOutOfRange { percentage: 101 })
        );
    }
}
