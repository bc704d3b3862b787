//! Birth moment model.
//!
//! This module defines the [`BirthMoment`] value object: the civil date and
//! clock time a four-pillar calculation starts from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A civil birth date and clock time.
///
/// Immutable once constructed. The minute is accepted and echoed in results
/// but never used by the calculation.
///
/// # Example
///
/// ```
/// use bazi_engine::models::BirthMoment;
///
/// let moment = BirthMoment {
///     year: 1991,
///     month: 1,
///     day: 1,
///     hour: 12,
///     minute: Some(0),
/// };
/// assert!(moment.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthMoment {
    /// The civil year.
    pub year: i32,
    /// The month (1-12).
    pub month: u32,
    /// The day of the month (1-31, validated against the month and year).
    pub day: u32,
    /// The clock hour (0-23).
    pub hour: u32,
    /// The clock minute (0-59), unused by the calculation.
    #[serde(default)]
    pub minute: Option<u32>,
}

impl BirthMoment {
    /// Checks that every field is within its domain.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] for a calendrically impossible
    /// date and [`EngineError::InvalidInput`] for an out-of-range hour or
    /// minute.
    pub fn validate(&self) -> EngineResult<()> {
        self.date()?;
        if self.hour > 23 {
            return Err(EngineError::InvalidInput {
                message: format!("hour {} is out of range 0-23", self.hour),
            });
        }
        if let Some(minute) = self.minute {
            if minute > 59 {
                return Err(EngineError::InvalidInput {
                    message: format!("minute {} is out of range 0-59", minute),
                });
            }
        }
        Ok(())
    }

    /// Returns the birth date as a date-only value.
    ///
    /// The date-only representation keeps day-count arithmetic immune to
    /// time-of-day and local-offset drift.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] if the year, month and day do
    /// not form a real calendar date (e.g. February 30th).
    pub fn date(&self) -> EngineResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(EngineError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
        })
    }
}
