//! Raw detection model, the analyzer's output.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Kinds of security events the analyzer can report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SecurityEventType {
    Intrusion,
    MotionInRestricted,
    UnauthorizedPresence,
    Loitering,
    GateOpen,
    GateClose,
}

impl SecurityEventType {
    /// Converts to wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityEventType::Intrusion => "intrusion",
            SecurityEventType::MotionInRestricted => "motion_in_restricted",
            SecurityEventType::UnauthorizedPresence => "unauthorized_presence",
            SecurityEventType::Loitering => "loitering",
            SecurityEventType::GateOpen => "gate_open",
            SecurityEventType::GateClose => "gate_close",
        }
    }

    /// Parses from wire string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "intrusion" => Some(SecurityEventType::Intrusion),
            "motion_in_restricted" => Some(SecurityEventType::MotionInRestricted),
            "unauthorized_presence" => Some(SecurityEventType::UnauthorizedPresence),
            "loitering" => Some(SecurityEventType::Loitering),
            "gate_open" => Some(SecurityEventType::GateOpen),
            "gate_close" => Some(SecurityEventType::GateClose),
            _ => None,
        }
    }
}

impl std::fmt::Display for SecurityEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Movement direction of a detected object relative to a zone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Entering,
    Exiting,
    Stationary,
}

/// Position of a detected object, percentages of frame width/height.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Structured detail payload attached to a detection. All fields optional;
/// analyzers fill in what they know.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_count: Option<u32>,

    /// Dwell time in seconds, set for loitering detections.
    #[serde(rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

/// A single raw detection produced by the frame analyzer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RawDetection {
    #[serde(rename = "type")]
    pub detection_type: SecurityEventType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,

    #[validate(custom(function = "shared::validation::validate_confidence"))]
    pub confidence: f64,

    #[serde(default)]
    pub details: EventDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_event_type_serialization() {
        let intrusion = SecurityEventType::Intrusion;
        let json = serde_json::to_string(&intrusion).unwrap();
        assert_eq!(json, "\"intrusion\"");

        let motion = SecurityEventType::MotionInRestricted;
        let json = serde_json::to_string(&motion).unwrap();
        assert_eq!(json, "\"motion_in_restricted\"");

        let gate = SecurityEventType::GateOpen;
        let json = serde_json::to_string(&gate).unwrap();
        assert_eq!(json, "\"gate_open\"");
    }

    #[test]
    fn test_security_event_type_as_str() {
        assert_eq!(SecurityEventType::Intrusion.as_str(), "intrusion");
        assert_eq!(
            SecurityEventType::UnauthorizedPresence.as_str(),
            "unauthorized_presence"
        );
        assert_eq!(SecurityEventType::Loitering.as_str(), "loitering");
        assert_eq!(SecurityEventType::GateClose.as_str(), "gate_close");
    }

    #[test]
    fn test_security_event_type_from_str() {
        assert_eq!(
            SecurityEventType::from_str("intrusion"),
            Some(SecurityEventType::Intrusion)
        );
        assert_eq!(
            SecurityEventType::from_str("motion_in_restricted"),
            Some(SecurityEventType::MotionInRestricted)
        );
        assert_eq!(SecurityEventType::from_str("invalid"), None);
    }

    #[test]
    fn test_raw_detection_deserialization() {
        let json = r#"{
            "type": "intrusion",
            "zone": "zone-1",
            "confidence": 0.85,
            "details": {
                "objectType": "person",
                "objectCount": 2,
                "direction": "entering"
            }
        }"#;

        let detection: RawDetection = serde_json::from_str(json).unwrap();
        assert_eq!(detection.detection_type, SecurityEventType::Intrusion);
        assert_eq!(detection.zone.as_deref(), Some("zone-1"));
        assert_eq!(detection.confidence, 0.85);
        assert_eq!(detection.details.object_type.as_deref(), Some("person"));
        assert_eq!(detection.details.object_count, Some(2));
        assert_eq!(detection.details.direction, Some(Direction::Entering));
    }

    #[test]
    fn test_raw_detection_confidence_bounds() {
        let mut detection = RawDetection {
            detection_type: SecurityEventType::Intrusion,
            zone: Some("zone-1".to_string()),
            confidence: 0.85,
            details: EventDetails::default(),
        };
        assert!(detection.validate().is_ok());

        detection.confidence = 1.0;
        assert!(detection.validate().is_ok());

        detection.confidence = 1.2;
        let err = detection.validate().unwrap_err();
        assert!(err.field_errors().contains_key("confidence"));

        detection.confidence = -0.1;
        assert!(detection.validate().is_err());
    }

    #[test]
    fn test_raw_detection_details_default_to_empty() {
        let json = r#"{"type": "gate_open", "confidence": 0.6}"#;

        let detection: RawDetection = serde_json::from_str(json).unwrap();
        assert_eq!(detection.details, EventDetails::default());
        assert!(detection.zone.is_none());
    }

    #[test]
    fn test_event_details_serialization_skips_none() {
        let details = EventDetails {
            object_type: Some("vehicle".to_string()),
            duration_secs: Some(42.0),
            ..EventDetails::default()
        };

        let json = serde_json::to_string(&details).unwrap();
        assert!(json.contains("\"objectType\":\"vehicle\""));
        assert!(json.contains("\"duration\":42"));
        assert!(!json.contains("position"));
        assert!(!json.contains("speed"));
    }
}
