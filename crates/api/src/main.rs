use anyhow::Result;
use std::sync::Arc;
use tracing::info;

mod app;
mod config;
mod error;
mod middleware;
mod routes;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging
    middleware::logging::init_logging(&config.logging);

    info!("Starting Camera Sentinel API v{}", env!("CARGO_PKG_VERSION"));

    // Connect the document store
    let store_config = persistence::StoreConfig {
        endpoint: config.store.endpoint.clone(),
        project_id: config.store.project_id.clone(),
        api_key: config.store.api_key.clone(),
        database_id: config.store.database_id.clone(),
        timeout_secs: config.store.timeout_secs,
    };
    let client = persistence::DocumentClient::new(store_config);
    let store = Arc::new(persistence::DocumentEventStore::new(client));

    // Stub analyzer until a detector service is wired in
    let analyzer = Arc::new(domain::services::StubAnalyzer::new(config.analyzer.clone()));

    let zones = config.default_zones()?;
    info!(zones = zones.len(), "Loaded default security zones");

    // Build application
    let app = app::create_app(config.clone(), store, analyzer, zones);

    // Start server
    let addr = config.socket_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
