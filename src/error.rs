//! Error types for the BaZi calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a four-pillar calculation.

use thiserror::Error;

/// The main error type for the BaZi calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// The first two variants are user-input problems; [`UnresolvedHour`] and
/// [`InvariantViolation`] indicate a defect in the engine's lookup tables
/// and are surfaced distinctly rather than silently defaulted.
///
/// [`UnresolvedHour`]: EngineError::UnresolvedHour
/// [`InvariantViolation`]: EngineError::InvariantViolation
///
/// # Example
///
/// ```
/// use bazi_engine::error::EngineError;
///
/// let error = EngineError::InvalidDate { year: 2001, month: 2, day: 30 };
/// assert_eq!(error.to_string(), "Invalid calendar date: 2001-02-30");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The input moment was missing a field or outside its domain.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// A description of what made the input invalid.
        message: String,
    },

    /// A syntactically plausible but calendrically impossible date.
    #[error("Invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// The civil year.
        year: i32,
        /// The month component (1-12).
        month: u32,
        /// The day component.
        day: u32,
    },

    /// A clock hour matched none of the twelve two-hour windows.
    ///
    /// Unreachable for hours in 0..24; if it occurs the hour-range table
    /// is defective.
    #[error("No earthly-branch window matches hour {hour}")]
    UnresolvedHour {
        /// The clock hour that failed to resolve.
        hour: u32,
    },

    /// An internal lookup that is total by construction failed.
    #[error("Invariant violation: {message}")]
    InvariantViolation {
        /// A description of the violated invariant.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_displays_message() {
        let error = EngineError::InvalidInput {
            message: "hour 24 is out of range 0-23".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid input: hour 24 is out of range 0-23");
    }

    #[test]
    fn test_invalid_date_displays_zero_padded_date() {
        let error = EngineError::InvalidDate {
            year: 2001,
            month: 2,
            day: 30,
        };
        assert_eq!(error.to_string(), "Invalid calendar date: 2001-02-30");
    }

    #[test]
    fn test_unresolved_hour_displays_hour() {
        let error = EngineError::UnresolvedHour { hour: 99 };
        assert_eq!(error.to_string(), "No earthly-branch window matches hour 99");
    }

    #[test]
    fn test_invariant_violation_displays_message() {
        let error = EngineError::InvariantViolation {
            message: "no cycle index for stem 3 and branch 4".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invariant violation: no cycle index for stem 3 and branch 4"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_input() -> EngineResult<()> {
            Err(EngineError::InvalidInput {
                message: "missing date".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_input()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
