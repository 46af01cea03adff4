//! Zone authorization: decides whether a zone is inside its active window.

use chrono::{DateTime, Timelike, Utc};

use crate::models::zone::{ActiveHours, SecurityZone};

/// Returns true when `time` falls inside the zone's active hours.
///
/// "always" zones are active at any time. Hour windows compare the hour
/// component only; a window whose start hour exceeds its end hour wraps past
/// midnight ("18:00-06:00" covers evening through early morning). Malformed
/// expressions never authorize.
///
/// Pure function of its inputs; the caller supplies the clock.
pub fn is_authorized_time(zone: &SecurityZone, time: DateTime<Utc>) -> bool {
    match ActiveHours::parse(&zone.active_hours) {
        Some(ActiveHours::Always) => true,
        Some(ActiveHours::Window {
            start_hour,
            end_hour,
            ..
        }) => {
            let hour = time.hour();
            if start_hour > end_hour {
                hour >= start_hour || hour < end_hour
            } else {
                hour >= start_hour && hour < end_hour
            }
        }
        None => false,
    }
}
