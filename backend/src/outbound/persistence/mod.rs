//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the product ports backed by PostgreSQL through
//! `diesel-async` and `bb8` connection pooling.
//!
//! - **Thin adapters**: implementations only translate between Diesel rows
//!   and domain types.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: Diesel and pool failures map onto the port
//!   error enums.
//!
//! # Example
//!
//! ```rust,no_run
//! use catalogue_backend::outbound::persistence::{DbPool, DieselProductRowSource, PoolConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/catalogue")).await?;
//! let rows = DieselProductRowSource::new(pool);
//! # let _ = rows;
//! # Ok(())
//! # }
//! ```

pub(crate) mod diesel_helpers;
mod diesel_product_row_source;
mod diesel_product_seed_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_product_row_source::DieselProductRowSource;
pub use diesel_product_seed_repository::DieselProductSeedRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_CHECKOUT_TIMEOUT, DEFAULT_POOL_SIZE, DbPool, PoolConfig, PoolError};
