//! Year pillar calculation.
//!
//! The BaZi year begins at the Start of Spring (立春), not January 1st, so
//! a date before that boundary belongs to the previous year's pillar. The
//! boundary is the fixed calendar-day approximation shared with the
//! month-pillar table, not an astronomical timestamp.

use chrono::{Datelike, NaiveDate};

use crate::models::SexagenaryPair;

/// The approximate Start of Spring as an annual (month, day) boundary.
pub const START_OF_SPRING: (u32, u32) = (2, 4);

/// The civil year mapped to cycle index 0.
///
/// Year 4 of the civil era opening a cycle is a modeling convention of the
/// sexagenary year count, preserved exactly for compatibility.
const CYCLE_REFERENCE_YEAR: i64 = 4;

/// Calculates the year pillar for a calendar date.
///
/// A date strictly before the approximate Start of Spring (February 4th)
/// takes the previous civil year's pillar.
///
/// # Example
///
/// ```
/// use bazi_engine::calculation::year_pillar;
/// use chrono::NaiveDate;
///
/// // One day before the Start of Spring: still the 1999 pillar.
/// let before = NaiveDate::from_ymd_opt(2000, 2, 3).unwrap();
/// assert_eq!(year_pillar(before).label(), "己卯");
///
/// let after = NaiveDate::from_ymd_opt(2000, 2, 5).unwrap();
/// assert_eq!(year_pillar(after).label(), "庚辰");
/// ```
pub fn year_pillar(date: NaiveDate) -> SexagenaryPair {
    SexagenaryPair::from_cycle_index(effective_year(date) - CYCLE_REFERENCE_YEAR)
}

/// Returns the civil year the date belongs to under the Start-of-Spring
/// boundary.
pub(crate) fn effective_year(date: NaiveDate) -> i64 {
    let (boundary_month, boundary_day) = START_OF_SPRING;
    let year = i64::from(date.year());
    if (date.month(), date.day()) < (boundary_month, boundary_day) {
        year - 1
    } else {
        year
    }
}
