//! Product listing endpoint.
//!
//! ```text
//! GET /products?page=1&pageSize=5&category=boots&priceLessThan=80000
//! ```

use actix_web::{HttpResponse, get, web};
use tracing::debug;

use crate::domain::ProductListingParams;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, ProductListingQuerySchema, ProductSchema};
use crate::inbound::http::state::HttpState;

/// List discounted products, one page at a time.
#[utoipa::path(
    get,
    path = "/products",
    description = "Return one page of products with discounts applied. Page size is capped at 5; malformed parameters fall back to defaults.",
    params(ProductListingQuerySchema),
    responses(
        (status = 200, description = "Page of priced products", body = [ProductSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
#[get("/products")]
pub async fn list_products(
    state: web::Data<HttpState>,
    query: web::Query<Vec<(String, String)>>,
) -> ApiResult<HttpResponse> {
    // Raw pairs keep repeated keys from failing extraction.
    let params: ProductListingParams = query.into_inner().into_iter().collect();
    let request = params.normalize();
    debug!(
        category = request.filters.category.as_deref(),
        price_less_than = request.filters.price_less_than,
        page = request.page,
        page_size = request.page_size,
        "listing products"
    );
    let products = state.products.list_products(&request).await?;
    debug!(count = products.len(), "listed products");
    Ok(HttpResponse::Ok().json(products))
}

#[cfg(test)]
mod tests {
    //! Handler wiring: parameter normalisation and error mapping.
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::MockProductCatalogueQuery;
    use crate::domain::{Error, Price, Product, ProductFilters, ProductListingRequest};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    fn state(query: MockProductCatalogueQuery) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(Arc::new(query)))
    }

    #[rstest]
    #[case::defaults("/products", ProductListingRequest::default())]
    #[case::malformed(
        "/products?page=zero&pageSize=-4&category=&priceLessThan=cheap",
        ProductListingRequest::default()
    )]
    #[case::repeated_keys(
        "/products?page=1&page=2&pageSize=abc&pageSize=3",
        ProductListingRequest::default()
    )]
    #[case::filters(
        "/products?page=2&pageSize=3&category=boots&priceLessThan=80000",
        ProductListingRequest::new(
            ProductFilters {
                category: Some("boots".to_owned()),
                price_less_than: Some(80_000),
            },
            2,
            3,
        )
    )]
    #[actix_web::test]
    async fn normalises_query_before_listing(
        #[case] uri: &str,
        #[case] expected: ProductListingRequest,
    ) {
        let mut query = MockProductCatalogueQuery::new();
        query
            .expect_list_products()
            .withf(move |request| *request == expected)
            .times(1)
            .return_once(|_| Ok(Vec::new()));
        let app =
            actix_test::init_service(App::new().app_data(state(query)).service(list_products))
                .await;

        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!([]));
    }

    #[rstest]
    #[actix_web::test]
    async fn returns_priced_products_as_json() {
        let mut query = MockProductCatalogueQuery::new();
        query.expect_list_products().return_once(|_| {
            Ok(vec![Product {
                sku: "000001".to_owned(),
                name: "Product 1".to_owned(),
                category: "sandals".to_owned(),
                price: Price::undiscounted(42_000, "EUR"),
            }])
        });
        let app =
            actix_test::init_service(App::new().app_data(state(query)).service(list_products))
                .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/products").to_request(),
        )
        .await;

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body,
            json!([{
                "sku": "000001",
                "name": "Product 1",
                "category": "sandals",
                "price": {"original": 42000, "final": 42000, "currency": "EUR"},
            }])
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn store_failures_become_redacted_500() {
        let mut query = MockProductCatalogueQuery::new();
        query
            .expect_list_products()
            .return_once(|_| Err(Error::internal("product store error: connection reset")));
        let app =
            actix_test::init_service(App::new().app_data(state(query)).service(list_products))
                .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/products").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("code"), Some(&json!("internal_error")));
        assert_eq!(body.get("message"), Some(&json!("Internal server error")));
    }
}
