//! Document definitions, the wire mappings for stored records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain::models::{SecurityEvent, SecurityEventType, Severity};
use domain::services::StoreError;

/// Collection holding persisted security events.
pub const SECURITY_EVENTS_COLLECTION: &str = "security_events";

/// Write model for a security event document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityEventDocument<'a> {
    #[serde(rename = "type")]
    pub event_type: SecurityEventType,
    pub timestamp: DateTime<Utc>,
    pub camera_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<&'a str>,
    pub confidence: f64,
    pub details: &'a str,
    pub severity: Severity,
    pub processed: bool,
    pub notifications_sent: bool,
}

impl<'a> From<&'a SecurityEvent> for SecurityEventDocument<'a> {
    fn from(event: &'a SecurityEvent) -> Self {
        Self {
            event_type: event.event_type,
            timestamp: event.timestamp,
            camera_name: &event.camera_name,
            zone: event.zone.as_deref(),
            confidence: event.confidence,
            details: &event.details,
            severity: event.severity,
            processed: event.processed,
            notifications_sent: event.notifications_sent,
        }
    }
}

/// Read model for a stored security event. Store-managed fields beyond `$id`
/// are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSecurityEvent {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: SecurityEventType,
    pub timestamp: DateTime<Utc>,
    pub camera_name: String,
    #[serde(default)]
    pub zone: Option<String>,
    pub confidence: f64,
    pub details: String,
    pub severity: Severity,
    pub processed: bool,
    pub notifications_sent: bool,
}

impl StoredSecurityEvent {
    /// Converts into the domain model. Fails when the stored document id is
    /// not a UUID (documents are always written with UUID ids).
    pub fn into_domain(self) -> Result<SecurityEvent, StoreError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|_| StoreError::Encoding(format!("document id is not a UUID: {}", self.id)))?;

        Ok(SecurityEvent {
            id,
            event_type: self.event_type,
            timestamp: self.timestamp,
            camera_name: self.camera_name,
            zone: self.zone,
            confidence: self.confidence,
            details: self.details,
            severity: self.severity,
            processed: self.processed,
            notifications_sent: self.notifications_sent,
        })
    }
}
