//! Frame analysis request and response payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::detection::RawDetection;
use crate::models::zone::SecurityZone;

/// Request payload for the detection ingestion endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeFrameRequest {
    /// Opaque frame reference (storage key or data URI); never decoded here.
    #[validate(length(min = 1, message = "Frame reference must not be empty"))]
    pub frame: String,

    #[validate(length(min = 1, max = 128, message = "Camera name must be 1-128 characters"))]
    pub camera_name: String,

    /// Capture time, ISO 8601 or epoch milliseconds.
    pub timestamp: String,

    /// Zones to analyze against. The service's configured zones are used
    /// when absent.
    #[validate(nested)]
    pub zones: Option<Vec<SecurityZone>>,
}

impl AnalyzeFrameRequest {
    /// Parse timestamp from ISO 8601 or milliseconds string.
    pub fn parse_timestamp(&self) -> Result<DateTime<Utc>, String> {
        // Try parsing as integer (milliseconds)
        if let Ok(millis) = self.timestamp.parse::<i64>() {
            return DateTime::from_timestamp_millis(millis)
                .ok_or_else(|| "Timestamp out of range".to_string());
        }

        // Try parsing as ISO 8601
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.timestamp) {
            return Ok(dt.with_timezone(&Utc));
        }

        // Try parsing as ISO 8601 without timezone (assume UTC)
        if let Ok(dt) =
            chrono::NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%dT%H:%M:%S%.f")
        {
            return Ok(dt.and_utc());
        }

        Err("Invalid timestamp format. Use milliseconds or ISO 8601".to_string())
    }
}

/// Response payload for the detection ingestion endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeFrameResponse {
    pub success: bool,
    pub detections: Vec<RawDetection>,
}

impl AnalyzeFrameResponse {
    /// Successful analysis outcome carrying the detections found.
    pub fn ok(detections: Vec<RawDetection>) -> Self {
        Self {
            success: true,
            detections,
        }
    }
}
