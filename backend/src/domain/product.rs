//! Product catalogue entities.
//!
//! [`ProductRow`] is what the store hands back; [`Product`] is the priced,
//! client-facing view produced by the discount engine. Both are read-only from
//! the domain's perspective.

use serde::{Deserialize, Serialize};

/// Raw product record as scanned from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    /// Stable business key.
    pub sku: String,
    /// Display name.
    pub name: String,
    /// Category label used by filters and discount rules.
    pub category: String,
    /// Price in minor currency units.
    pub price: i64,
}

/// Priced product returned to clients and stored in the cache.
///
/// # Examples
/// ```
/// use catalogue_backend::domain::{Price, Product};
///
/// let product = Product {
///     sku: "000001".to_owned(),
///     name: "Product 1".to_owned(),
///     category: "sandals".to_owned(),
///     price: Price::undiscounted(42_000, "EUR"),
/// };
/// let json = serde_json::to_value(&product).expect("serialises");
/// assert!(json["price"].get("discount_percentage").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable business key.
    pub sku: String,
    /// Display name.
    pub name: String,
    /// Category label.
    pub category: String,
    /// Original and discounted amounts.
    pub price: Price,
}

/// Price breakdown for a single product.
///
/// ## Invariants
/// - `final_amount <= original` for non-negative originals.
/// - `discount_percentage` is present if and only if a discount applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount before discounts, in minor units.
    pub original: i64,
    /// Amount after the winning discount, in minor units.
    #[serde(rename = "final")]
    pub final_amount: i64,
    /// Human-readable discount label such as `30%`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<String>,
    /// ISO 4217 currency code.
    pub currency: String,
}

impl Price {
    /// Price with no discount applied.
    pub fn undiscounted(original: i64, currency: impl Into<String>) -> Self {
        Self {
            original,
            final_amount: original,
            discount_percentage: None,
            currency: currency.into(),
        }
    }
}
