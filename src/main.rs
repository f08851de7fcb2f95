// src/main.rs

use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use pricewatch::infra::config;
use pricewatch::transport;
use pricewatch::{CatalogStore, IngestService, PageFetcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // --- Catalog Store Initialization ---
    let store = CatalogStore::connect(&config::database_url()).await?;
    info!("catalog store ready");

    // --- Ingestion Task Initialization ---
    let catalog_url = config::catalog_url();
    let pass_interval = Duration::from_secs(config::scrape_interval_secs());
    let ingest = Arc::new(IngestService::new(
        PageFetcher::new()?,
        store.clone(),
        catalog_url.clone(),
        pass_interval,
    ));
    ingest.clone().start_background_task();
    info!(url = %catalog_url, interval_secs = pass_interval.as_secs(), "ingestion task started");

    // --- API Server Initialization ---
    let app_state = transport::http::AppState { store };
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
        )
        .layer(cors);

    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("API server listening on http://{bind_addr}");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
            ingest.shutdown();
        }
    }

    Ok(())
}
