//! Severity classification for raw detections.

use crate::models::detection::{RawDetection, SecurityEventType};
use crate::models::event::Severity;

/// Assigns a severity to a detection. First matching rule wins:
///
/// 1. intrusions are always critical, regardless of confidence
/// 2. confidence above 0.9 is high
/// 3. confidence above 0.7 is medium
/// 4. everything else is low
pub fn classify(detection: &RawDetection) -> Severity {
    if detection.detection_type == SecurityEventType::Intrusion {
        return Severity::Critical;
    }
    if detection.confidence > 0.9 {
        return Severity::High;
    }
    if detection.confidence > 0.7 {
        return Severity::Medium;
    }
    Severity::Low
}
