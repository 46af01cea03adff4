use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::trace_id;
use crate::routes::{detections, events, health, zones};
use domain::models::SecurityZone;
use domain::services::{EventIngestionPipeline, EventStore, FrameAnalyzer};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pipeline: Arc<EventIngestionPipeline>,
    pub store: Arc<dyn EventStore>,
    /// Zones applied to frames that do not carry their own zone list.
    pub zones: Arc<Vec<SecurityZone>>,
}

pub fn create_app(
    config: Config,
    store: Arc<dyn EventStore>,
    analyzer: Arc<dyn FrameAnalyzer>,
    zones: Vec<SecurityZone>,
) -> Router {
    let config = Arc::new(config);

    let pipeline = Arc::new(EventIngestionPipeline::new(analyzer, store.clone()));

    let state = AppState {
        config: config.clone(),
        pipeline,
        store,
        zones: Arc::new(zones),
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Ingestion and query routes
    // Using /api/v1 prefix for versioned API
    let api_routes = Router::new()
        .route("/api/v1/detections", post(detections::ingest_frame))
        .route("/api/v1/events", get(events::list_events))
        .route("/api/v1/events/stats", get(events::event_stats))
        .route("/api/v1/zones", get(zones::list_zones));

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live));

    // Merge all routes
    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id)) // Request ID and logging
        .layer(cors)
        .with_state(state)
}
