use utoipa::OpenApi;

use crate::models::{CatalogResult, ErrorResponse, HealthResponse, Item, UpstreamFailureResponse};

/// OpenAPI documentation for the Catalog Proxy API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog Proxy API",
        version = "0.1.0",
        description = "Normalizes paginated video-catalog data from third-party upstreams.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Catalog", description = "Paginated catalog pages, one path per upstream source")
    ),
    paths(
        crate::handlers::get_catalog_page,
        crate::routes::health_check
    ),
    components(
        schemas(
            Item,
            CatalogResult,
            UpstreamFailureResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
