//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Nullable};

use crate::domain::ProductRow;

use super::schema::products;

/// Row struct for raw listing queries against the products table.
#[derive(Debug, Clone, QueryableByName)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProductRecord {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub price: i64,
}

impl From<ProductRecord> for ProductRow {
    fn from(record: ProductRecord) -> Self {
        Self {
            sku: record.sku,
            name: record.name,
            category: record.category,
            price: record.price,
        }
    }
}

/// Insertable struct for seeding product records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = products)]
pub(crate) struct NewProductRow<'a> {
    pub sku: &'a str,
    pub name: &'a str,
    pub category: &'a str,
    pub price: i64,
}

impl<'a> From<&'a ProductRow> for NewProductRow<'a> {
    fn from(row: &'a ProductRow) -> Self {
        Self {
            sku: row.sku.as_str(),
            name: row.name.as_str(),
            category: row.category.as_str(),
            price: row.price,
        }
    }
}

/// Result of the highest numeric SKU scan.
#[derive(Debug, Clone, QueryableByName)]
pub(crate) struct HighestSkuRow {
    #[diesel(sql_type = Nullable<BigInt>)]
    pub highest: Option<i64>,
}
