//! OpenAPI documentation configuration

use axum_helpers::ErrorResponse;
use utoipa::OpenApi;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "CRUD API for the product catalog"
    ),
    components(schemas(ErrorResponse)),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = domain_products::entity::Model::URL, api = domain_products::ApiDoc)
    )
)]
pub struct ApiDoc;
