//! Domain primitives, services and ports.
//!
//! Purpose: Define the product retrieval pipeline independently of transport
//! and storage. Types are immutable values; adapters reach the domain only
//! through [`ports`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport agnostic error payload.
//! - ProductListingParams / ProductListingRequest: raw and normalised listing
//!   input.
//! - ProductQuery: parameterised listing statement with page-size cap.
//! - PricingPolicy: ordered discount rules and currency.
//! - ProductCatalogueService: cache-aside implementation of the listing port.

pub mod discounts;
pub mod error;
#[cfg(feature = "example-data")]
pub mod example_data;
pub mod ports;
pub mod product;
pub mod product_catalogue_service;
pub mod product_listing;
pub mod product_query;
pub mod trace_id;

pub use self::discounts::{
    DEFAULT_CURRENCY, DiscountRule, DiscountRuleValidationError, DiscountTarget, PricingPolicy,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
#[cfg(feature = "example-data")]
pub use self::example_data::{
    ExampleDataSeedOutcome, ExampleDataSeedRequest, ExampleDataSeeder, ExampleDataSeedingError,
};
pub use self::product::{Price, Product, ProductRow};
pub use self::product_catalogue_service::{DEFAULT_CACHE_TTL, ProductCatalogueService};
pub use self::product_listing::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, ProductFilters, ProductListingParams, ProductListingRequest,
};
pub use self::product_query::{MAX_PAGE_SIZE, ProductQuery, QueryParam, effective_page_size};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use catalogue_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::internal("product store unavailable"))
/// }
/// # assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
