//! Security event domain model, the persisted record of a detection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::detection::{RawDetection, SecurityEventType};

/// Severity levels assigned by the classifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Converts to wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// Parses from wire string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            "critical" => Some(Severity::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A security event as persisted in the `security_events` collection.
///
/// Created exactly once per detection and never mutated by the pipeline.
/// `processed` and `notifications_sent` start false; downstream consumers
/// flip them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityEvent {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub event_type: SecurityEventType,
    pub timestamp: DateTime<Utc>,
    pub camera_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    pub confidence: f64,
    /// JSON-serialized copy of the detection's detail payload.
    pub details: String,
    pub severity: Severity,
    pub processed: bool,
    pub notifications_sent: bool,
}

impl SecurityEvent {
    /// Builds the persisted record for a detection captured by `camera_name`
    /// at `timestamp`, with the severity already classified.
    pub fn from_detection(
        detection: &RawDetection,
        camera_name: &str,
        timestamp: DateTime<Utc>,
        severity: Severity,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: Uuid::new_v4(),
            event_type: detection.detection_type,
            timestamp,
            camera_name: camera_name.to_string(),
            zone: detection.zone.clone(),
            confidence: detection.confidence,
            details: serde_json::to_string(&detection.details)?,
            severity,
            processed: false,
            notifications_sent: false,
        })
    }
}

/// Filter for listing persisted events. All criteria are conjunctive.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub camera_name: Option<String>,
    pub severity: Option<Severity>,
    pub event_type: Option<SecurityEventType>,
    pub since: Option<DateTime<Utc>>,
    pub limit: u32,
}

/// One page of events plus the total match count in the store.
#[derive(Debug, Clone)]
pub struct EventPage {
    pub events: Vec<SecurityEvent>,
    pub total: u64,
}

/// Default page size for event listings.
fn default_limit() -> u32 {
    50
}

/// Query parameters for listing security events.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsQuery {
    pub camera_name: Option<String>,

    pub severity: Option<Severity>,

    pub event_type: Option<SecurityEventType>,

    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Response payload for a single persisted event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityEventResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub event_type: SecurityEventType,
    pub timestamp: DateTime<Utc>,
    pub camera_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    pub confidence: f64,
    pub details: String,
    pub severity: Severity,
    pub processed: bool,
    pub notifications_sent: bool,
}

impl From<SecurityEvent> for SecurityEventResponse {
    fn from(e: SecurityEvent) -> Self {
        Self {
            id: e.id,
            event_type: e.event_type,
            timestamp: e.timestamp,
            camera_name: e.camera_name,
            zone: e.zone,
            confidence: e.confidence,
            details: e.details,
            severity: e.severity,
            processed: e.processed,
            notifications_sent: e.notifications_sent,
        }
    }
}

/// Response for listing security events.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsResponse {
    pub events: Vec<SecurityEventResponse>,
    pub total: u64,
}

/// Query parameters for the event stats summary.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    /// Restrict the summary to events newer than this many hours.
    #[validate(range(min = 1, max = 8760, message = "sinceHours must be between 1 and 8760"))]
    pub since_hours: Option<u32>,
}

/// Event counts broken down by severity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeverityCounts {
    pub low: u64,
    pub medium: u64,
    pub high: u64,
    pub critical: u64,
}

/// Response for the event stats summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStatsResponse {
    pub total: u64,
    pub by_severity: SeverityCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_hours: Option<u32>,
}
