//! Security zone domain model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Zone classification, drives which detections matter inside it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ZoneType {
    Restricted,
    Monitored,
    Safe,
}

impl ZoneType {
    /// Converts to wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneType::Restricted => "restricted",
            ZoneType::Monitored => "monitored",
            ZoneType::Safe => "safe",
        }
    }

    /// Parses from wire string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "restricted" => Some(ZoneType::Restricted),
            "monitored" => Some(ZoneType::Monitored),
            "safe" => Some(ZoneType::Safe),
            _ => None,
        }
    }
}

/// Rectangular zone bounds, expressed as percentages of frame width/height.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct ZoneCoordinates {
    #[validate(custom(function = "shared::validation::validate_frame_percent"))]
    pub x1: f64,
    #[validate(custom(function = "shared::validation::validate_frame_percent"))]
    pub y1: f64,
    #[validate(custom(function = "shared::validation::validate_frame_percent"))]
    pub x2: f64,
    #[validate(custom(function = "shared::validation::validate_frame_percent"))]
    pub y2: f64,
}

/// Default enabled status for zones.
fn default_enabled() -> bool {
    true
}

/// A monitored region of the camera frame.
///
/// Zones are administered externally; the pipeline treats them as read-only
/// input. `active_hours` is either "always" or an "HH:MM-HH:MM" window that
/// may wrap past midnight.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SecurityZone {
    #[validate(length(min = 1, max = 64, message = "Zone id must be 1-64 characters"))]
    pub id: String,

    #[validate(length(min = 1, max = 100, message = "Zone name must be 1-100 characters"))]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub zone_type: ZoneType,

    #[validate(nested)]
    pub coordinates: ZoneCoordinates,

    #[serde(default)]
    pub cameras: Vec<String>,

    #[validate(custom(function = "shared::validation::validate_active_hours"))]
    pub active_hours: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

/// Parsed form of a zone's `active_hours` expression.
///
/// Only the hour components take part in the authorization check; minutes are
/// carried so a stricter comparison stays a local change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveHours {
    Always,
    Window {
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
    },
}

impl ActiveHours {
    /// Parses an active-hours expression. Returns `None` for anything that is
    /// neither "always" nor a well-formed "HH:MM-HH:MM" window.
    pub fn parse(s: &str) -> Option<Self> {
        if s == "always" {
            return Some(ActiveHours::Always);
        }

        let (start, end) = s.split_once('-')?;
        let (start_hour, start_minute) = parse_clock(start)?;
        let (end_hour, end_minute) = parse_clock(end)?;

        Some(ActiveHours::Window {
            start_hour,
            start_minute,
            end_hour,
            end_minute,
        })
    }
}

/// Parses "HH:MM" into (hour, minute), rejecting out-of-range values.
fn parse_clock(s: &str) -> Option<(u32, u32)> {
    let (hour, minute) = s.split_once(':')?;
    let hour: u32 = hour.trim().parse().ok()?;
    let minute: u32 = minute.trim().parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}
