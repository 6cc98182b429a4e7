//! Normalisation of raw listing parameters into a canonical descriptor.
//!
//! Malformed input never fails a request: unparsable or out-of-range values
//! fall back to defaults so [`ProductListingParams::normalize`] is total.

/// Page used when the request omits `page` or supplies a value below one.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the request omits `pageSize` or supplies a value
/// below one. The query builder still clamps the effective size to
/// [`crate::domain::MAX_PAGE_SIZE`].
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Raw, unvalidated listing parameters as received from the query string.
///
/// Every field is kept as text so that a malformed number degrades to its
/// default instead of rejecting the whole request. Collect query pairs into
/// this type with [`FromIterator`]; a repeated key keeps its first value and
/// unknown keys are ignored.
///
/// # Examples
/// ```
/// use catalogue_backend::domain::ProductListingParams;
///
/// let params: ProductListingParams = [("page", "2"), ("page", "7"), ("sort", "asc")]
///     .into_iter()
///     .collect();
/// assert_eq!(params.page.as_deref(), Some("2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListingParams {
    /// One-based page number.
    pub page: Option<String>,
    /// Requested number of products per page.
    pub page_size: Option<String>,
    /// Exact category to match.
    pub category: Option<String>,
    /// Strict upper bound on the original price, in minor units.
    pub price_less_than: Option<String>,
}

/// Optional predicates applied to the product listing.
///
/// `None` means "no constraint" for either field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProductFilters {
    /// Category equality predicate.
    pub category: Option<String>,
    /// Strict price upper bound predicate; always positive when present.
    pub price_less_than: Option<i64>,
}

/// Canonical listing descriptor shared by the cache key, the query builder
/// and the orchestrator.
///
/// ## Invariants
/// - `page >= 1`
/// - `page_size >= 1`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductListingRequest {
    /// Filter predicates.
    pub filters: ProductFilters,
    /// One-based page number.
    pub page: u64,
    /// Requested page size before the hard cap is applied.
    pub page_size: u32,
}

impl Default for ProductListingRequest {
    fn default() -> Self {
        Self {
            filters: ProductFilters::default(),
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ProductListingRequest {
    /// Build a descriptor, substituting defaults for values below one.
    pub fn new(filters: ProductFilters, page: u64, page_size: u32) -> Self {
        Self {
            filters,
            page: if page >= 1 { page } else { DEFAULT_PAGE },
            page_size: if page_size >= 1 {
                page_size
            } else {
                DEFAULT_PAGE_SIZE
            },
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ProductListingParams
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "page" => &mut params.page,
                "pageSize" => &mut params.page_size,
                "category" => &mut params.category,
                "priceLessThan" => &mut params.price_less_than,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }
}

impl ProductListingParams {
    /// Produce the canonical descriptor.
    ///
    /// # Examples
    /// ```
    /// use catalogue_backend::domain::ProductListingParams;
    ///
    /// let params = ProductListingParams {
    ///     page: Some("0".to_owned()),
    ///     page_size: Some("abc".to_owned()),
    ///     category: Some(String::new()),
    ///     price_less_than: Some("-5".to_owned()),
    /// };
    /// let request = params.normalize();
    /// assert_eq!(request.page, 1);
    /// assert_eq!(request.page_size, 10);
    /// assert!(request.filters.category.is_none());
    /// assert!(request.filters.price_less_than.is_none());
    /// ```
    pub fn normalize(&self) -> ProductListingRequest {
        let filters = ProductFilters {
            category: self
                .category
                .as_deref()
                .filter(|category| !category.is_empty())
                .map(str::to_owned),
            price_less_than: self
                .price_less_than
                .as_deref()
                .and_then(|raw| raw.parse::<i64>().ok())
                .filter(|bound| *bound > 0),
        };
        ProductListingRequest::new(
            filters,
            parse_positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE),
            parse_positive(self.page_size.as_deref())
                .map(|size| u32::try_from(size).unwrap_or(u32::MAX))
                .unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

/// Parse a signed 64-bit integer and keep it only when it is at least one.
fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|value| value.parse::<i64>().ok())
        .and_then(|value| u64::try_from(value).ok())
        .filter(|value| *value >= 1)
}

#[cfg(test)]
mod tests {
    //! Normalisation rules for pagination and filter inputs.
    use super::*;
    use rstest::rstest;

    fn params(page: Option<&str>, page_size: Option<&str>) -> ProductListingParams {
        ProductListingParams {
            page: page.map(str::to_owned),
            page_size: page_size.map(str::to_owned),
            ..ProductListingParams::default()
        }
    }

    #[rstest]
    #[case(None, 1)]
    #[case(Some(""), 1)]
    #[case(Some("0"), 1)]
    #[case(Some("-3"), 1)]
    #[case(Some("two"), 1)]
    #[case(Some("3"), 3)]
    #[case(Some("4294967296"), 4_294_967_296)]
    #[case(Some("9223372036854775807"), 9_223_372_036_854_775_807)]
    #[case(Some("9223372036854775808"), 1)]
    fn page_falls_back_to_first(#[case] raw: Option<&str>, #[case] expected: u64) {
        assert_eq!(params(raw, None).normalize().page, expected);
    }

    #[rstest]
    #[case(None, 10)]
    #[case(Some("0"), 10)]
    #[case(Some("-1"), 10)]
    #[case(Some("1.5"), 10)]
    #[case(Some("4"), 4)]
    #[case(Some("50"), 50)]
    #[case(Some("4294967296"), u32::MAX)]
    fn page_size_defaults_but_is_not_clamped_here(
        #[case] raw: Option<&str>,
        #[case] expected: u32,
    ) {
        assert_eq!(params(None, raw).normalize().page_size, expected);
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("boots"), Some("boots"))]
    fn empty_category_means_no_predicate(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
        let request = ProductListingParams {
            category: raw.map(str::to_owned),
            ..ProductListingParams::default()
        }
        .normalize();
        assert_eq!(request.filters.category.as_deref(), expected);
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some("0"), None)]
    #[case(Some("-100"), None)]
    #[case(Some("cheap"), None)]
    #[case(Some("80000"), Some(80_000))]
    fn non_positive_price_bound_means_no_predicate(
        #[case] raw: Option<&str>,
        #[case] expected: Option<i64>,
    ) {
        let request = ProductListingParams {
            price_less_than: raw.map(str::to_owned),
            ..ProductListingParams::default()
        }
        .normalize();
        assert_eq!(request.filters.price_less_than, expected);
    }

    #[rstest]
    fn query_pairs_keep_the_first_occurrence() {
        let params: ProductListingParams = [
            ("page", "1"),
            ("page", "2"),
            ("pageSize", "3"),
            ("category", "boots"),
            ("category", "sandals"),
            ("priceLessThan", ""),
            ("priceLessThan", "80000"),
            ("unknown", "ignored"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            params,
            ProductListingParams {
                page: Some("1".to_owned()),
                page_size: Some("3".to_owned()),
                category: Some("boots".to_owned()),
                price_less_than: Some(String::new()),
            }
        );
        let request = params.normalize();
        assert_eq!(request.page, 1);
        assert!(request.filters.price_less_than.is_none());
    }

    #[rstest]
    fn constructor_replaces_zero_values() {
        let request = ProductListingRequest::new(ProductFilters::default(), 0, 0);
        assert_eq!(request.page, DEFAULT_PAGE);
        assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
    }
}
