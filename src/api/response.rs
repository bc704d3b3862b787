//! Response types for the BaZi engine API.
//!
//! This module defines the chart response, the error response structures
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{BirthMoment, FourPillarResult, SexagenaryPair};

/// A single pillar rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarView {
    /// The two-character stem-branch label, e.g. `己卯`.
    pub label: String,
    /// The pinyin name of the heavenly stem.
    pub stem: String,
    /// The pinyin name of the earthly branch.
    pub branch: String,
    /// The pillar's position in the sexagenary cycle (0-59).
    pub cycle_index: u8,
}

impl From<SexagenaryPair> for PillarView {
    fn from(pair: SexagenaryPair) -> Self {
        PillarView {
            label: pair.label(),
            stem: pair.stem().name().to_string(),
            branch: pair.branch().name().to_string(),
            cycle_index: pair.index(),
        }
    }
}

/// The four pillars of a chart, rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarSet {
    /// The year pillar.
    pub year: PillarView,
    /// The month pillar.
    pub month: PillarView,
    /// The day pillar.
    pub day: PillarView,
    /// The hour pillar.
    pub hour: PillarView,
}

/// Successful response body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the chart.
    pub engine_version: String,
    /// The echoed birth moment.
    pub birth: BirthMoment,
    /// The four pillars.
    pub pillars: PillarSet,
}

impl ChartResponse {
    /// Builds a response from an engine result.
    pub fn from_result(result: FourPillarResult) -> Self {
        ChartResponse {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            birth: result.birth,
            pillars: PillarSet {
                year: result.year_pillar.into(),
                month: result.month_pillar.into(),
                day: result.day_pillar.into(),
                hour: result.hour_pillar.into(),
            },
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidInput { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    format!("Invalid input: {}", message),
                    "The birth moment contains an out-of-range field",
                ),
            },
            EngineError::InvalidDate { year, month, day } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE",
                    format!("Invalid calendar date: {:04}-{:02}-{:02}", year, month, day),
                    "The year, month and day do not form a real calendar date",
                ),
            },
            EngineError::UnresolvedHour { hour } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "UNRESOLVED_HOUR",
                    format!("No earthly-branch window matches hour {}", hour),
                    "The hour-range table failed to cover a validated hour",
                ),
            },
            EngineError::InvariantViolation { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVARIANT_VIOLATION",
                    "Internal calculation invariant violated",
                    message,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_date_maps_to_400() {
        let engine_error = EngineError::InvalidDate {
            year: 2001,
            month: 2,
            day: 30,
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_DATE");
        assert!(api_error.error.message.contains("2001-02-30"));
    }

    #[test]
    fn test_invariant_violation_maps_to_500() {
        let engine_error = EngineError::InvariantViolation {
            message: "table defect".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "INVARIANT_VIOLATION");
    }

    #[test]
    fn test_pillar_view_from_pair() {
        let view: PillarView = SexagenaryPair::from_cycle_index(15).into();
        assert_eq!(view.label, "己卯");
        assert_eq!(view.stem, "Ji");
        assert_eq!(view.branch, "Mao");
        assert_eq!(view.cycle_index, 15);
    }
}
