//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers below mirror their serialised shape for utoipa's external schema
//! registration.

use utoipa::{IntoParams, ToSchema};

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Internal errors are redacted to a generic message before they leave the
/// server.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "internal_error")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Internal server error")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Price`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Price)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PriceSchema {
    /// Amount before discounts, in minor currency units.
    #[schema(example = 100_000)]
    original: i64,
    /// Amount after the winning discount, in minor currency units.
    #[schema(rename = "final", example = 70_000)]
    final_amount: i64,
    /// Applied discount label; absent when no discount applies.
    #[schema(example = "30%")]
    discount_percentage: Option<String>,
    /// ISO 4217 currency code.
    #[schema(example = "EUR")]
    currency: String,
}

/// OpenAPI schema for [`crate::domain::Product`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Product)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ProductSchema {
    /// Stable business identifier.
    #[schema(example = "000003")]
    sku: String,
    /// Display name.
    #[schema(example = "Product 3")]
    name: String,
    /// Category label.
    #[schema(example = "boots")]
    category: String,
    /// Original and discounted price.
    price: PriceSchema,
}

/// Query parameters accepted by `GET /products`.
///
/// Malformed values are not rejected; they fall back to defaults.
#[derive(IntoParams)]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI parameter generation via utoipa"
)]
pub struct ProductListingQuerySchema {
    /// One-based page number; values below 1 mean 1.
    #[param(example = 1)]
    page: Option<u32>,
    /// Products per page; defaults to 10 and is capped at 5.
    #[param(example = 5)]
    page_size: Option<u32>,
    /// Exact category match; empty means no filter.
    #[param(example = "boots")]
    category: Option<String>,
    /// Strict upper bound on the original price; non-positive means no filter.
    #[param(example = 80_000)]
    price_less_than: Option<i64>,
}
