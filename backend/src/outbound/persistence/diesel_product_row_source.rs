//! PostgreSQL-backed product row source.
//!
//! Executes the domain's parameterised [`ProductQuery`] verbatim, binding each
//! [`QueryParam`] positionally. No SQL is assembled here.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::sql_types::{BigInt, Text};
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{ProductRowSource, ProductRowSourceError};
use crate::domain::{ProductQuery, ProductRow, QueryParam};

use super::diesel_helpers::{map_basic_diesel_error, map_basic_pool_error};
use super::models::ProductRecord;
use super::pool::DbPool;

/// Diesel-backed implementation of [`ProductRowSource`].
#[derive(Clone)]
pub struct DieselProductRowSource {
    pool: DbPool,
}

impl DieselProductRowSource {
    /// Create a new row source with the given connection pool.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use catalogue_backend::outbound::persistence::{
    ///     DbPool, DieselProductRowSource, PoolConfig,
    /// };
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/catalogue")).await?;
    /// let rows = DieselProductRowSource::new(pool);
    /// # let _ = rows;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRowSource for DieselProductRowSource {
    async fn query_rows(&self, query: &ProductQuery) -> Result<Vec<ProductRow>, ProductRowSourceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, ProductRowSourceError::connection))?;

        let mut statement = diesel::sql_query(query.sql()).into_boxed::<Pg>();
        for param in query.params() {
            statement = match param {
                QueryParam::Text(value) => statement.bind::<Text, _>(value.clone()),
                QueryParam::Integer(value) => statement.bind::<BigInt, _>(*value),
            };
        }

        let records: Vec<ProductRecord> = statement.load(&mut conn).await.map_err(|err| {
            map_basic_diesel_error(
                err,
                "list products",
                ProductRowSourceError::query,
                ProductRowSourceError::connection,
            )
        })?;
        debug!(rows = records.len(), "loaded product rows");

        Ok(records.into_iter().map(ProductRow::from).collect())
    }
}
