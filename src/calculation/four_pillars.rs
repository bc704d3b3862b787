//! Four-pillar orchestration.
//!
//! A single-pass pipeline per request: validate the moment, derive the year
//! and month pillars from the unadjusted date, shift the date for the day
//! pillar when the birth falls in the early Zi slot, then derive the hour
//! pillar from the day stem.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{BirthMoment, FourPillarResult};

use super::day_pillar::day_pillar;
use super::hour_pillar::hour_pillar;
use super::month_pillar::month_pillar;
use super::year_pillar::year_pillar;

/// Returns the calendar date the day pillar is computed from.
///
/// The BaZi day boundary is the start of the Zi hour (23:00), not midnight,
/// so a birth in the early Zi slot (00:00-00:59) still belongs to the
/// previous BaZi day.
pub fn day_pillar_date(date: NaiveDate, hour: u32) -> EngineResult<NaiveDate> {
    if hour < 1 {
        date.pred_opt().ok_or_else(|| EngineError::InvariantViolation {
            message: format!("no calendar day precedes {}", date),
        })
    } else {
        Ok(date)
    }
}

/// Calculates the full four-pillar chart for a birth moment.
///
/// The year and month pillars use the unadjusted civil date; the day pillar
/// uses the early-Zi-adjusted date; the hour pillar derives from the day
/// pillar's stem and the raw clock hour. Errors carry no partial result.
///
/// # Errors
///
/// [`EngineError::InvalidDate`] or [`EngineError::InvalidInput`] for a bad
/// moment; [`EngineError::UnresolvedHour`] or
/// [`EngineError::InvariantViolation`] only for defective lookup tables.
///
/// # Example
///
/// ```
/// use bazi_engine::calculation::calculate_four_pillars;
/// use bazi_engine::models::BirthMoment;
///
/// let moment = BirthMoment { year: 1991, month: 1, day: 1, hour: 12, minute: Some(0) };
/// let result = calculate_four_pillars(&moment).unwrap();
///
/// assert_eq!(result.year_pillar.label(), "庚午");
/// assert_eq!(result.month_pillar.label(), "戊子");
/// assert_eq!(result.day_pillar.label(), "己卯");
/// assert_eq!(result.hour_pillar.label(), "庚午");
/// ```
pub fn calculate_four_pillars(moment: &BirthMoment) -> EngineResult<FourPillarResult> {
    moment.validate()?;
    let date = moment.date()?;

    let year_pillar = year_pillar(date);
    let month_pillar = month_pillar(date)?;

    let day_date = day_pillar_date(date, moment.hour)?;
    let day_pillar = day_pillar(day_date);

    let hour_pillar = hour_pillar(day_pillar.stem(), moment.hour)?;

    Ok(FourPillarResult {
        birth: *moment,
        year_pillar,
        month_pillar,
        day_pillar,
        hour_pillar,
    })
}
