//! Parameterised product listing queries.
//!
//! Predicates are collected as `(clause, parameter)` pairs and rendered with
//! PostgreSQL positional placeholders. Parameter values never reach the
//! clause text; adapters bind them in order.

use super::ProductListingRequest;

/// Hard cap on rows returned per page, whatever the client asks for.
pub const MAX_PAGE_SIZE: u32 = 5;

const SELECT_PRODUCTS: &str = "SELECT sku, name, category, price FROM products";

/// Value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParam {
    /// Bound as `TEXT`.
    Text(String),
    /// Bound as `BIGINT`.
    Integer(i64),
}

/// A select statement paired with its ordered bind parameters.
///
/// # Examples
/// ```
/// use catalogue_backend::domain::{ProductListingParams, ProductQuery, QueryParam};
///
/// let request = ProductListingParams {
///     category: Some("boots".to_owned()),
///     page_size: Some("50".to_owned()),
///     ..ProductListingParams::default()
/// }
/// .normalize();
/// let query = ProductQuery::for_listing(&request);
/// assert_eq!(
///     query.sql(),
///     "SELECT sku, name, category, price FROM products WHERE category = $1 LIMIT $2 OFFSET $3"
/// );
/// assert_eq!(
///     query.params(),
///     &[
///         QueryParam::Text("boots".to_owned()),
///         QueryParam::Integer(5),
///         QueryParam::Integer(0),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    sql: String,
    params: Vec<QueryParam>,
}

impl ProductQuery {
    /// Build the listing query for a normalised request.
    ///
    /// The page size is clamped to [`MAX_PAGE_SIZE`] and the offset derived
    /// from the clamped size.
    pub fn for_listing(request: &ProductListingRequest) -> Self {
        let mut predicates: Vec<(&'static str, QueryParam)> = Vec::with_capacity(2);
        if let Some(category) = &request.filters.category {
            predicates.push(("category =", QueryParam::Text(category.clone())));
        }
        if let Some(bound) = request.filters.price_less_than {
            predicates.push(("price <", QueryParam::Integer(bound)));
        }

        let limit = effective_page_size(request.page_size);
        let offset = request
            .page
            .saturating_sub(1)
            .saturating_mul(u64::from(limit));

        let mut sql = String::from(SELECT_PRODUCTS);
        let mut params = Vec::with_capacity(predicates.len() + 2);
        for (index, (clause, param)) in predicates.into_iter().enumerate() {
            let keyword = if index == 0 { "WHERE" } else { "AND" };
            params.push(param);
            sql.push_str(&format!(" {keyword} {clause} ${}", params.len()));
        }
        params.push(QueryParam::Integer(i64::from(limit)));
        sql.push_str(&format!(" LIMIT ${}", params.len()));
        params.push(QueryParam::Integer(
            i64::try_from(offset).unwrap_or(i64::MAX),
        ));
        sql.push_str(&format!(" OFFSET ${}", params.len()));

        Self { sql, params }
    }

    /// Statement text with positional placeholders.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bind parameters in placeholder order.
    pub fn params(&self) -> &[QueryParam] {
        &self.params
    }
}

/// Clamp a requested page size into `1..=MAX_PAGE_SIZE`.
pub fn effective_page_size(requested: u32) -> u32 {
    requested.clamp(1, MAX_PAGE_SIZE)
}
