//! Generated product seed types.
//!
//! These types are independent of backend domain types to avoid circular
//! dependencies.

/// Category assigned to a generated product.
///
/// Categories rotate by product number so every third product shares one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategorySeed {
    /// Product numbers divisible by three.
    Boots,
    /// Product numbers leaving remainder one.
    Sandals,
    /// Product numbers leaving remainder two.
    Sneakers,
}

impl CategorySeed {
    /// Category for the given product number.
    ///
    /// # Example
    ///
    /// ```
    /// use example_data::CategorySeed;
    ///
    /// assert_eq!(CategorySeed::for_number(3), CategorySeed::Boots);
    /// assert_eq!(CategorySeed::for_number(4).as_str(), "sandals");
    /// ```
    #[must_use]
    pub const fn for_number(number: u64) -> Self {
        match number.rem_euclid(3) {
            0 => Self::Boots,
            1 => Self::Sandals,
            _ => Self::Sneakers,
        }
    }

    /// Lowercase category name as stored.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boots => "boots",
            Self::Sandals => "sandals",
            Self::Sneakers => "sneakers",
        }
    }
}

/// A generated example product record.
///
/// Carries the four stored product columns. It is designed to be converted
/// into backend row types at the point of use.
///
/// # Example
///
/// ```
/// use example_data::ExampleProductSeed;
///
/// let product = ExampleProductSeed::new(7, 42_000);
/// assert_eq!(product.sku, "000007");
/// assert_eq!(product.name, "Product 7");
/// assert_eq!(product.category, "sandals");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleProductSeed {
    /// Zero-padded six digit product number.
    pub sku: String,
    /// Display name derived from the product number.
    pub name: String,
    /// Category name.
    pub category: String,
    /// Price in minor currency units.
    pub price: i64,
}

impl ExampleProductSeed {
    /// Build the record for product `number` priced at `price`.
    #[must_use]
    pub fn new(number: u64, price: i64) -> Self {
        Self {
            sku: format!("{number:06}"),
            name: format!("Product {number}"),
            category: CategorySeed::for_number(number).as_str().to_owned(),
            price,
        }
    }
}
