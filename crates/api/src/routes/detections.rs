//! Frame ingestion endpoint handlers.
//!
//! Accepts frame notifications from cameras, runs detection analysis,
//! classifies severity, and persists one security event per detection.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{AnalyzeFrameRequest, AnalyzeFrameResponse};
use domain::services::{IngestionRequest, PipelineError};

/// Ingest a camera frame and persist any resulting security events.
///
/// POST /api/v1/detections
pub async fn ingest_frame(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeFrameRequest>, JsonRejection>,
) -> Result<Json<AnalyzeFrameResponse>, ApiError> {
    // Malformed JSON gets the uniform error body instead of the default rejection
    let Json(request) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    request.validate()?;

    let timestamp = request
        .parse_timestamp()
        .map_err(PipelineError::InvalidRequest)?;

    let ingestion = IngestionRequest {
        frame: request.frame,
        camera_name: request.camera_name,
        timestamp,
        // Frames without an explicit zone list fall back to the configured zones
        zones: request
            .zones
            .unwrap_or_else(|| state.zones.as_ref().clone()),
    };

    let detections = state.pipeline.handle(&ingestion).await?;

    info!(
        camera_name = %ingestion.camera_name,
        detections = detections.len(),
        "Frame processed"
    );

    Ok(Json(AnalyzeFrameResponse::ok(detections)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::{EventDetails, RawDetection, SecurityEventType};

    #[test]
    fn test_analyze_frame_request_deserialization() {
        let json = r#"{
            "frame": "frames/cam-01/1717171717.jpg",
            "cameraName": "front-door",
            "timestamp": "1701878400000"
        }"#;

        let request: AnalyzeFrameRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.frame, "frames/cam-01/1717171717.jpg");
        assert_eq!(request.camera_name, "front-door");
        assert!(request.zones.is_none());
    }

    #[test]
    fn test_analyze_frame_request_with_zones() {
        let json = r#"{
            "frame": "frames/cam-02/1717171718.jpg",
            "cameraName": "parking",
            "timestamp": "2024-03-01T12:00:00Z",
            "zones": [{
                "id": "zone-1",
                "name": "Main Entrance",
                "type": "restricted",
                "coordinates": {"x1": 0.0, "y1": 0.0, "x2": 50.0, "y2": 50.0},
                "activeHours": "always"
            }]
        }"#;

        let request: AnalyzeFrameRequest = serde_json::from_str(json).unwrap();
        let zones = request.zones.unwrap();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].id, "zone-1");
    }

    #[test]
    fn test_analyze_frame_response_serialization() {
        let detection = RawDetection {
            detection_type: SecurityEventType::Intrusion,
            zone: Some("zone-1".to_string()),
            confidence: 0.95,
            details: EventDetails::default(),
        };

        let response = AnalyzeFrameResponse::ok(vec![detection]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["detections"][0]["type"], "intrusion");
        assert_eq!(json["detections"][0]["confidence"], 0.95);
    }

    #[test]
    fn test_analyze_frame_response_empty() {
        let response = AnalyzeFrameResponse::ok(vec![]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["detections"].as_array().unwrap().len(), 0);
    }
}
