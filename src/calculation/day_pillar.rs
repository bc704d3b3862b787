//! Day pillar calculation.
//!
//! The day pillar is pure epoch arithmetic: a fixed anchor date carries a
//! calibrated cycle index, and every other date's pillar is the anchor index
//! advanced by the whole-day distance to that date.

use chrono::NaiveDate;

use crate::models::SexagenaryPair;

/// The anchor date for day-pillar arithmetic: 1990-01-01.
///
/// Dates are compared as date-only values, so the day count between two
/// dates is exact regardless of clock time or local offset.
pub const DAY_PILLAR_EPOCH: NaiveDate =
    match NaiveDate::from_ymd_opt(1990, 1, 1) {
        Some(date) => date,
        None => unreachable!(),
    };

/// The cycle index calibrated to [`DAY_PILLAR_EPOCH`]: 甲戌, index 10.
///
/// BaZi day-cycle alignment has no universally agreed absolute epoch, so
/// this value is a preserved convention, not a derivation. The calibration
/// it pins is that 1991-01-01 falls on cycle index 15 (己卯).
pub const DAY_PILLAR_EPOCH_INDEX: i64 = 10;

/// Calculates the day pillar for a calendar date.
///
/// Advances [`DAY_PILLAR_EPOCH_INDEX`] by the signed whole-day distance
/// from [`DAY_PILLAR_EPOCH`]; dates before the epoch reduce into the cycle
/// the same way.
///
/// # Example
///
/// ```
/// use bazi_engine::calculation::day_pillar;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(1991, 1, 1).unwrap();
/// assert_eq!(day_pillar(date).index(), 15);
/// assert_eq!(day_pillar(date).label(), "己卯");
/// ```
pub fn day_pillar(date: NaiveDate) -> SexagenaryPair {
    let days = (date - DAY_PILLAR_EPOCH).num_days();
    SexagenaryPair::from_cycle_index(DAY_PILLAR_EPOCH_INDEX + days)
}
