//! Cache key for product listing pages.
use crate::domain::ProductListingRequest;

const ABSENT: &str = "-";

/// Cache key under which a priced product page is stored.
///
/// Keys built by [`ProductCacheKey::for_listing`] encode every descriptor
/// field in a fixed order. The category is hex encoded, so free text can
/// neither alias another field nor introduce whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductCacheKey(String);

impl ProductCacheKey {
    /// Derive the key for a normalised listing request.
    ///
    /// # Examples
    /// ```
    /// use catalogue_backend::domain::ports::ProductCacheKey;
    /// use catalogue_backend::domain::ProductListingParams;
    ///
    /// let request = ProductListingParams {
    ///     category: Some("boots".to_owned()),
    ///     ..ProductListingParams::default()
    /// }
    /// .normalize();
    /// assert_eq!(
    ///     ProductCacheKey::for_listing(&request).as_str(),
    ///     "products:v1:category=626f6f7473:priceLessThan=-:page=1:pageSize=10"
    /// );
    /// ```
    pub fn for_listing(request: &ProductListingRequest) -> Self {
        let category = request
            .filters
            .category
            .as_deref()
            .map_or_else(|| ABSENT.to_owned(), hex::encode);
        let price_less_than = request
            .filters
            .price_less_than
            .map_or_else(|| ABSENT.to_owned(), |bound| bound.to_string());
        Self(format!(
            "products:v1:category={category}:priceLessThan={price_less_than}:page={}:pageSize={}",
            request.page, request.page_size
        ))
    }

    /// Borrow the underlying key as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for ProductCacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ProductCacheKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Key determinism and field sensitivity.
    use super::ProductCacheKey;
    use crate::domain::{ProductFilters, ProductListingRequest};
    use rstest::{fixture, rstest};

    #[fixture]
    fn base() -> ProductListingRequest {
        ProductListingRequest::new(
            ProductFilters {
                category: Some("boots".to_owned()),
                price_less_than: Some(80_000),
            },
            2,
            5,
        )
    }

    #[rstest]
    fn identical_requests_share_a_key(base: ProductListingRequest) {
        let again = base.clone();
        assert_eq!(
            ProductCacheKey::for_listing(&base),
            ProductCacheKey::for_listing(&again)
        );
    }

    #[rstest]
    fn renders_fields_in_fixed_order(base: ProductListingRequest) {
        assert_eq!(
            ProductCacheKey::for_listing(&base).as_str(),
            "products:v1:category=626f6f7473:priceLessThan=80000:page=2:pageSize=5"
        );
    }

    #[rstest]
    #[case::category(|r: &mut ProductListingRequest| r.filters.category = Some("sandals".to_owned()))]
    #[case::category_removed(|r: &mut ProductListingRequest| r.filters.category = None)]
    #[case::price(|r: &mut ProductListingRequest| r.filters.price_less_than = Some(80_001))]
    #[case::price_removed(|r: &mut ProductListingRequest| r.filters.price_less_than = None)]
    #[case::page(|r: &mut ProductListingRequest| r.page = 3)]
    #[case::page_size(|r: &mut ProductListingRequest| r.page_size = 4)]
    fn changing_any_field_changes_the_key(
        base: ProductListingRequest,
        #[case] mutate: fn(&mut ProductListingRequest),
    ) {
        let mut changed = base.clone();
        mutate(&mut changed);
        assert_ne!(
            ProductCacheKey::for_listing(&base),
            ProductCacheKey::for_listing(&changed)
        );
    }

    #[rstest]
    fn category_text_cannot_forge_other_fields(base: ProductListingRequest) {
        let mut forged = base.clone();
        forged.filters.category = Some("boots:priceLessThan=80000".to_owned());
        forged.filters.price_less_than = None;
        assert_ne!(
            ProductCacheKey::for_listing(&base),
            ProductCacheKey::for_listing(&forged)
        );
    }

    #[rstest]
    #[case(" running shoes ")]
    #[case("tab\tseparated")]
    fn whitespace_categories_stay_out_of_the_key(
        base: ProductListingRequest,
        #[case] category: &str,
    ) {
        let mut spaced = base;
        spaced.filters.category = Some(category.to_owned());
        let key = ProductCacheKey::for_listing(&spaced);
        assert!(!key.as_str().contains(char::is_whitespace));
        assert!(key.as_str().contains(&hex::encode(category)));
    }
}
