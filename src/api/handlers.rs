//! HTTP request handlers for the BaZi engine API.
//!
//! This module contains the handler function for the `/calculate` endpoint.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_four_pillars;
use crate::models::BirthMoment;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, ChartResponse};

/// Creates the API router with all endpoints.
///
/// The engine's lookup tables are compile-time constants, so the router
/// carries no shared state.
pub fn create_router() -> Router {
    Router::new().route("/calculate", post(calculate_handler))
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a birth moment and returns the four-pillar chart.
async fn calculate_handler(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing chart calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let moment: BirthMoment = request.into();

    // Perform the calculation
    let start_time = Instant::now();
    match calculate_four_pillars(&moment) {
        Ok(result) => {
            let duration = start_time.elapsed();
            let response = ChartResponse::from_result(result);
            info!(
                correlation_id = %correlation_id,
                calculation_id = %response.calculation_id,
                day_pillar = %result.day_pillar,
                duration_us = duration.as_micros(),
                "Chart calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Chart calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
