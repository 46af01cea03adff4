//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixtures for running the API
//! against an in-memory event store and a stub analyzer.

// Allow dead code in this module - these are helper utilities that may not be used
// by all integration tests but are intentionally available for future use.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use camera_sentinel_api::{app::create_app, config::Config};
use domain::models::{
    EventDetails, RawDetection, SecurityEventType, SecurityZone, ZoneCoordinates, ZoneType,
};
use domain::services::{AnalyzerError, FrameAnalyzer};

/// Test configuration pointing at nothing in particular.
///
/// The store and analyzer are injected separately, so the connection
/// settings here are never dialed.
pub fn test_config() -> Config {
    Config {
        server: camera_sentinel_api::config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Use random port
            request_timeout_secs: 30,
        },
        store: camera_sentinel_api::config::StoreConfig {
            endpoint: "http://localhost/v1".to_string(),
            project_id: "test-project".to_string(),
            api_key: "test-key".to_string(),
            database_id: "surveillance".to_string(),
            timeout_secs: 5,
        },
        logging: camera_sentinel_api::config::LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: camera_sentinel_api::config::SecurityConfig {
            cors_origins: vec![],
        },
        analyzer: domain::services::AnalyzerConfig::default(),
        zones: vec![],
    }
}

/// Zone fixture.
pub fn test_zone(
    id: &str,
    name: &str,
    zone_type: ZoneType,
    active_hours: &str,
) -> SecurityZone {
    SecurityZone {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        zone_type,
        coordinates: ZoneCoordinates {
            x1: 0.0,
            y1: 0.0,
            x2: 50.0,
            y2: 50.0,
        },
        cameras: vec!["front-door".to_string()],
        active_hours: active_hours.to_string(),
        enabled: true,
    }
}

/// Default zones wired into the test application.
pub fn test_zones() -> Vec<SecurityZone> {
    vec![
        test_zone("zone-1", "Main Entrance", ZoneType::Restricted, "always"),
        test_zone("zone-2", "Parking", ZoneType::Monitored, "18:00-06:00"),
    ]
}

/// Detection fixture: an intrusion the classifier marks critical.
pub fn intrusion_detection() -> RawDetection {
    RawDetection {
        detection_type: SecurityEventType::Intrusion,
        zone: Some("zone-1".to_string()),
        confidence: 0.95,
        details: EventDetails::default(),
    }
}

/// Detection fixture: restricted-zone motion the classifier marks medium.
pub fn motion_detection() -> RawDetection {
    RawDetection {
        detection_type: SecurityEventType::MotionInRestricted,
        zone: Some("zone-1".to_string()),
        confidence: 0.8,
        details: EventDetails::default(),
    }
}

/// Analyzer double that records the zone ids handed to each call and
/// reports no detections.
#[derive(Debug, Default)]
pub struct RecordingAnalyzer {
    calls: Mutex<Vec<Vec<String>>>,
}

impl RecordingAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zone ids received per analyze call, in call order.
    pub fn zones_seen(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl FrameAnalyzer for RecordingAnalyzer {
    async fn analyze(
        &self,
        _frame: &str,
        zones: &[SecurityZone],
    ) -> Result<Vec<RawDetection>, AnalyzerError> {
        let ids = zones.iter().map(|z| z.id.clone()).collect();
        self.calls.lock().unwrap().push(ids);
        Ok(Vec::new())
    }
}

/// Create a test application router with injected store and analyzer.
pub fn create_test_app(
    config: Config,
    store: Arc<domain::services::MemoryEventStore>,
    analyzer: Arc<dyn FrameAnalyzer>,
) -> Router {
    create_app(config, store, analyzer, test_zones())
}

/// Build a JSON request.
pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a request with a raw body, for malformed-payload tests.
pub fn raw_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Parse a response body as JSON.
pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}
