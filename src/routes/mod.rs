use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::constants::{MSG_HEALTH_OK, MSG_SERVER_RUNNING};
use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(health_check))
            // OpenAPI document
            .route("/openapi.json", web::get().to(openapi_json))
            // Catalog proxy, one source per path segment - must stay last
            .route("/{source}", web::get().to(handlers::get_catalog_page)),
    );
}

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: MSG_HEALTH_OK.to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
