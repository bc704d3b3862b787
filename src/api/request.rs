//! Request types for the BaZi engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::models::BirthMoment;

/// Request body for the `/calculate` endpoint.
///
/// Carries the civil birth date and clock time. Field-domain validation
/// (month range, real calendar date, hour range) happens in the engine,
/// not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The civil birth year.
    pub year: i32,
    /// The birth month (1-12).
    pub month: u32,
    /// The birth day of month.
    pub day: u32,
    /// The birth hour (0-23).
    pub hour: u32,
    /// The birth minute (0-59), echoed but unused by the calculation.
    #[serde(default)]
    pub minute: Option<u32>,
}

impl From<CalculationRequest> for BirthMoment {
    fn from(req: CalculationRequest) -> Self {
        BirthMoment {
            year: req.year,
            month: req.month,
            day: req.day,
            hour: req.hour,
            minute: req.minute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "year": 1991,
            "month": 1,
            "day": 1,
            "hour": 12,
            "minute": 30
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.year, 1991);
        assert_eq!(request.hour, 12);
        assert_eq!(request.minute, Some(30));
    }

    #[test]
    fn test_minute_is_optional() {
        let json = r#"{"year":2000,"month":2,"day":4,"hour":23}"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.minute, None);
    }

    #[test]
    fn test_birth_moment_conversion() {
        let request = CalculationRequest {
            year: 1984,
            month: 5,
            day: 20,
            hour: 8,
            minute: Some(15),
        };

        let moment: BirthMoment = request.into();
        assert_eq!(moment.year, 1984);
        assert_eq!(moment.minute, Some(15));
    }
}
