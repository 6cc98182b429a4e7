//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod cache_key;
mod product_cache;
mod product_catalogue_query;
mod product_row_source;
mod product_seed_repository;

pub use cache_key::ProductCacheKey;
#[cfg(test)]
pub use product_cache::MockProductCache;
pub use product_cache::{ProductCache, ProductCacheError};
#[cfg(test)]
pub use product_catalogue_query::MockProductCatalogueQuery;
pub use product_catalogue_query::{FixtureProductCatalogueQuery, ProductCatalogueQuery};
#[cfg(test)]
pub use product_row_source::MockProductRowSource;
pub use product_row_source::{FixtureProductRowSource, ProductRowSource, ProductRowSourceError};
#[cfg(test)]
pub use product_seed_repository::MockProductSeedRepository;
pub use product_seed_repository::{ProductSeedRepository, ProductSeedRepositoryError};
