//! HTTP API module for the BaZi calculation engine.
//!
//! This module provides the REST endpoint for computing a four-pillar
//! chart from a birth date and time. It is a thin presentation shell over
//! [`crate::calculation`] and contains no calculation logic of its own.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ChartResponse, PillarView};
