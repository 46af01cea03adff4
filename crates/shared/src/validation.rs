//! Common validation utilities.

use validator::ValidationError;

lazy_static::lazy_static! {
    /// Matches an hour window such as "18:00-06:00". Hours 0-23, minutes 00-59.
    static ref ACTIVE_HOURS_RE: regex::Regex =
        regex::Regex::new(r"^(?:[01]?\d|2[0-3]):[0-5]\d-(?:[01]?\d|2[0-3]):[0-5]\d$").unwrap();
}

/// Validates that a zone coordinate is a percentage of the frame (0 to 100).
pub fn validate_frame_percent(value: f64) -> Result<(), ValidationError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("frame_percent_range");
        err.message = Some("Zone coordinates must be between 0 and 100".into());
        Err(err)
    }
}

/// Validates that a detection confidence is within valid range (0 to 1).
pub fn validate_confidence(confidence: f64) -> Result<(), ValidationError> {
    if (0.0..=1.0).contains(&confidence) {
        Ok(())
    } else {
        let mut err = ValidationError::new("confidence_range");
        err.message = Some("Confidence must be between 0 and 1".into());
        Err(err)
    }
}

/// Validates an active-hours expression: either "always" or "HH:MM-HH:MM".
/// The window may wrap past midnight (e.g. "18:00-06:00").
pub fn validate_active_hours(value: &str) -> Result<(), ValidationError> {
    if value == "always" || ACTIVE_HOURS_RE.is_match(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("active_hours_format");
        err.message = Some("Active hours must be \"always\" or \"HH:MM-HH:MM\"".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Frame percent tests
    #[test]
    fn test_validate_frame_percent() {
        assert!(validate_frame_percent(0.0).is_ok());
        assert!(validate_frame_percent(50.0).is_ok());
        assert!(validate_frame_percent(100.0).is_ok());
        assert!(validate_frame_percent(-0.1).is_err());
        assert!(validate_frame_percent(100.1).is_err());
    }

    #[test]
    fn test_validate_frame_percent_error_message() {
        let err = validate_frame_percent(150.0).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Zone coordinates must be between 0 and 100"
        );
    }

    // Confidence tests
    #[test]
    fn test_validate_confidence() {
        assert!(validate_confidence(0.0).is_ok());
        assert!(validate_confidence(0.7).is_ok());
        assert!(validate_confidence(1.0).is_ok());
        assert!(validate_confidence(-0.01).is_err());
        assert!(validate_confidence(1.01).is_err());
    }

    #[test]
    fn test_validate_confidence_error_message() {
        let err = validate_confidence(2.0).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Confidence must be between 0 and 1"
        );
    }

    // Active hours tests
    #[test]
    fn test_validate_active_hours_always() {
        assert!(validate_active_hours("always").is_ok());
    }

    #[test]
    fn test_validate_active_hours_windows() {
        assert!(validate_active_hours("08:00-18:00").is_ok());
        assert!(validate_active_hours("18:00-06:00").is_ok()); // wraps midnight
        assert!(validate_active_hours("0:00-23:59").is_ok()); // single-digit hour
        assert!(validate_active_hours("22:30-6:15").is_ok());
    }

    #[test]
    fn test_validate_active_hours_rejects_malformed() {
        assert!(validate_active_hours("").is_err());
        assert!(validate_active_hours("Always").is_err());
        assert!(validate_active_hours("08:00").is_err());
        assert!(validate_active_hours("08-18").is_err());
        assert!(validate_active_hours("24:00-06:00").is_err());
        assert!(validate_active_hours("08:60-18:00").is_err());
        assert!(validate_active_hours("08:00-18:00-20:00").is_err());
    }

    #[test]
    fn test_validate_active_hours_error_message() {
        let err = validate_active_hours("all day").unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Active hours must be \"always\" or \"HH:MM-HH:MM\""
        );
    }
}
