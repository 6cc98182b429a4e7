//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. When a
//! migration changes the table, regenerate with `diesel print-schema` or
//! update by hand.

diesel::table! {
    /// Product catalogue.
    ///
    /// Rows are read-only to the service; only example data seeding writes.
    products (sku) {
        /// Primary key: stable business identifier.
        sku -> Varchar,
        /// Display name.
        name -> Varchar,
        /// Category label used by filters and discount rules.
        category -> Varchar,
        /// Price in minor currency units.
        price -> Int8,
    }
}
