use std::sync::Arc;
use std::time::Duration;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};

use catalog_proxy::config::CONFIG;
use catalog_proxy::routes;
use catalog_proxy::services::{CatalogService, ReqwestUpstream, SourceRegistry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let sources = SourceRegistry::parse(&CONFIG.catalog_sources).map_err(|e| {
        error!("Invalid CATALOG_SOURCES: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    info!("Serving catalog sources: {}", sources.tags().join(", "));

    let upstream = ReqwestUpstream::new(
        Duration::from_secs(CONFIG.upstream_timeout_secs),
        &CONFIG.upstream_user_agent,
    )
    .map_err(|e| {
        error!("Failed to build upstream HTTP client: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let catalog_service = web::Data::new(CatalogService::new(
        sources,
        Arc::new(upstream),
        Arc::new(CONFIG.clone()),
    ));

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(catalog_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
