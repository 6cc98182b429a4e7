//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the product listing and health endpoints together
//! with the schema wrappers from [`crate::inbound::http::schemas`], keeping
//! domain types free of utoipa derives.
//!
//! The generated document backs Swagger UI in debug builds and is exported
//! via `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, PriceSchema, ProductSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product catalogue API",
        description = "Paginated, filterable product listings with discount pricing."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::products::list_products,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ProductSchema, PriceSchema, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "products", description = "Product catalogue listings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document's paths and schemas.
    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const PRODUCT_SCHEMA_NAME: &str = "crate.domain.Product";
    const PRICE_SCHEMA_NAME: &str = "crate.domain.Price";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn registers_product_listing_path() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/products"));
        assert!(doc.paths.paths.contains_key("/health/ready"));
        assert!(doc.paths.paths.contains_key("/health/live"));
    }

    #[test]
    fn product_schemas_have_wire_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;

        let product = schemas.get(PRODUCT_SCHEMA_NAME).expect("Product schema");
        for field in ["sku", "name", "category", "price"] {
            assert_object_schema_has_field(product, field);
        }

        let price = schemas.get(PRICE_SCHEMA_NAME).expect("Price schema");
        for field in ["original", "final", "discount_percentage", "currency"] {
            assert_object_schema_has_field(price, field);
        }
    }
}
