//! Catalog proxy handler: one parameterized endpoint per configured source.

use actix_web::{http::header, web, HttpResponse};
use log::debug;
use validator::Validate;

use crate::errors::ApiError;
use crate::models::CatalogQuery;
use crate::services::CatalogService;
use crate::validators::validation_errors_to_api_error;

/// Fetch one page of a catalog source
#[utoipa::path(
    get,
    path = "/api/{source}",
    tag = "Catalog",
    params(
        ("source" = String, Path, description = "Configured source tag, e.g. 'entertainment2'"),
        ("limit" = Option<u32>, Query, description = "Items per page (default: 20, max: 100)"),
        ("start" = Option<u32>, Query, description = "Offset of the first item (default: 0)"),
        ("t" = Option<String>, Query, description = "Upstream category id")
    ),
    responses(
        (status = 200, description = "Catalog page", body = crate::models::CatalogResult),
        (status = 400, description = "Invalid query", body = crate::models::ErrorResponse),
        (status = 404, description = "Unknown source", body = crate::models::ErrorResponse),
        (status = 500, description = "Upstream failure", body = crate::models::UpstreamFailureResponse)
    )
)]
pub async fn get_catalog_page(
    catalog_service: web::Data<CatalogService>,
    path: web::Path<String>,
    query: web::Query<CatalogQuery>,
) -> Result<HttpResponse, ApiError> {
    let source = path.into_inner();
    let query = query.into_inner();
    query.validate().map_err(validation_errors_to_api_error)?;

    let request = query.into_page_request();
    debug!("Catalog request for {}: {:?}", source, request);

    let page = catalog_service.fetch_page(&source, &request).await?;

    Ok(HttpResponse::Ok()
        .insert_header((
            header::CACHE_CONTROL,
            format!("public, max-age={}", page.max_age_secs),
        ))
        .json(page.result))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};

    use crate::config::FixedCacheTime;
    use crate::models::CatalogResult;
    use crate::routes::configure_routes;
    use crate::services::catalog_service::tests::{registry, StubUpstream};
    use crate::services::CatalogService;

    use super::*;

    fn service(upstream: Arc<StubUpstream>) -> web::Data<CatalogService> {
        web::Data::new(CatalogService::new(
            registry(),
            upstream,
            Arc::new(FixedCacheTime(7200)),
        ))
    }

    #[actix_web::test]
    async fn test_first_page_full() {
        let upstream = Arc::new(StubUpstream::with_records(20));
        let app = test::init_service(
            App::new()
                .app_data(service(upstream.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/entertainment2?limit=20&start=0")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=7200"
        );
        let body: CatalogResult = test::read_body_json(resp).await;
        assert_eq!(body.code, 200);
        assert_eq!(body.list.len(), 20);

        let calls = upstream.calls.lock().unwrap();
        assert_eq!(calls[0].1.upstream_page(), 1);
    }

    #[actix_web::test]
    async fn test_second_page_short() {
        let upstream = Arc::new(StubUpstream::with_records(5));
        let app = test::init_service(
            App::new()
                .app_data(service(upstream.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/entertainment2?limit=20&start=20&t=6")
            .to_request();
        let body: CatalogResult = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.list.len(), 5);

        let calls = upstream.calls.lock().unwrap();
        assert_eq!(calls[0].1.upstream_page(), 2);
        assert_eq!(calls[0].1.category, "6");
    }

    #[actix_web::test]
    async fn test_defaults_when_query_is_empty() {
        let upstream = Arc::new(StubUpstream::with_records(3));
        let app = test::init_service(
            App::new()
                .app_data(service(upstream.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/entertainment2").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let calls = upstream.calls.lock().unwrap();
        assert_eq!(calls[0].1.limit, 20);
        assert_eq!(calls[0].1.start, 0);
        assert_eq!(calls[0].1.category, "");
    }

    #[actix_web::test]
    async fn test_upstream_503_becomes_500() {
        let app = test::init_service(
            App::new()
                .app_data(service(Arc::new(StubUpstream::failing(503))))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/entertainment2?limit=20&start=0")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(!body["error"].as_str().unwrap().is_empty());
        assert!(body["details"].as_str().unwrap().contains("503"));
    }

    #[actix_web::test]
    async fn test_invalid_limit_is_rejected() {
        let upstream = Arc::new(StubUpstream::with_records(1));
        let app = test::init_service(
            App::new()
                .app_data(service(upstream.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/entertainment2?limit=0")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(upstream.calls.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_unknown_source_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(service(Arc::new(StubUpstream::with_records(1))))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
