//! PostgreSQL-backed example product seeding adapter.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ProductRow;
use crate::domain::ports::{ProductSeedRepository, ProductSeedRepositoryError};

use super::diesel_helpers::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{HighestSkuRow, NewProductRow};
use super::pool::DbPool;
use super::schema::products;

/// Rows inserted per statement.
const INSERT_BATCH_SIZE: usize = 1_000;

// Bounded to 18 digits so the cast cannot overflow BIGINT.
const HIGHEST_NUMERIC_SKU_SQL: &str = "SELECT MAX(sku::BIGINT) AS highest FROM products \
     WHERE sku ~ '^[0-9]{1,18}$'";

/// Diesel-backed implementation of [`ProductSeedRepository`].
#[derive(Clone)]
pub struct DieselProductSeedRepository {
    pool: DbPool,
}

impl DieselProductSeedRepository {
    /// Create a new seeding repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_diesel_error(error: diesel::result::Error, operation: &str) -> ProductSeedRepositoryError {
    map_basic_diesel_error(
        error,
        operation,
        ProductSeedRepositoryError::query,
        ProductSeedRepositoryError::connection,
    )
}

#[async_trait]
impl ProductSeedRepository for DieselProductSeedRepository {
    async fn highest_numeric_sku(&self) -> Result<Option<u64>, ProductSeedRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, ProductSeedRepositoryError::connection))?;

        let row: HighestSkuRow = diesel::sql_query(HIGHEST_NUMERIC_SKU_SQL)
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "highest numeric sku"))?;

        row.highest
            .map(u64::try_from)
            .transpose()
            .map_err(|_| ProductSeedRepositoryError::query("negative numeric sku"))
    }

    async fn insert_products(&self, rows: &[ProductRow]) -> Result<usize, ProductSeedRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, ProductSeedRepositoryError::connection))?;

        let mut inserted = 0;
        for batch in rows.chunks(INSERT_BATCH_SIZE) {
            let records: Vec<NewProductRow<'_>> = batch.iter().map(NewProductRow::from).collect();
            inserted += diesel::insert_into(products::table)
                .values(&records)
                .on_conflict(products::sku)
                .do_nothing()
                .execute(&mut conn)
                .await
                .map_err(|err| map_diesel_error(err, "insert products"))?;
            debug!(batch = batch.len(), inserted, "inserted product batch");
        }
        Ok(inserted)
    }
}
