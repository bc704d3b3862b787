//! Month pillar calculation.
//!
//! The month branch is set by the principal solar term governing the birth
//! date, and the month stem follows from the year stem via the Five Tigers
//! rule. Term onsets are fixed calendar-day approximations held in an
//! explicit lookup table; a future upgrade to ephemeris-grade boundaries
//! would replace only [`SOLAR_TERMS`].

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{EarthlyBranch, HeavenlyStem, SexagenaryPair};

use super::year_pillar::year_pillar;

/// The approximate annual onset of a principal solar term and the month
/// branch it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarTermApproximation {
    /// The term's pinyin name.
    pub name: &'static str,
    /// The onset month in the civil calendar.
    pub month: u32,
    /// The onset day in the civil calendar.
    pub day: u32,
    /// The month branch the term opens.
    pub branch: EarthlyBranch,
}

impl SolarTermApproximation {
    /// Returns the term's concrete onset date within a civil year.
    ///
    /// Total over the table: every entry's (month, day) exists in every
    /// year supported by `chrono`.
    fn onset(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

/// The twelve principal solar terms that open BaZi months, as fixed
/// calendar-day approximations.
///
/// Listed in civil-year order, starting with Minor Cold in January. The
/// table is immutable process-wide constant data.
pub const SOLAR_TERMS: [SolarTermApproximation; 12] = [
    SolarTermApproximation { name: "Xiaohan", month: 1, day: 6, branch: EarthlyBranch::Chou },
    SolarTermApproximation { name: "Lichun", month: 2, day: 4, branch: EarthlyBranch::Yin },
    SolarTermApproximation { name: "Jingzhe", month: 3, day: 6, branch: EarthlyBranch::Mao },
    SolarTermApproximation { name: "Qingming", month: 4, day: 5, branch: EarthlyBranch::Chen },
    SolarTermApproximation { name: "Lixia", month: 5, day: 6, branch: EarthlyBranch::Si },
    SolarTermApproximation { name: "Mangzhong", month: 6, day: 6, branch: EarthlyBranch::Wu },
    SolarTermApproximation { name: "Xiaoshu", month: 7, day: 7, branch: EarthlyBranch::Wei },
    SolarTermApproximation { name: "Liqiu", month: 8, day: 8, branch: EarthlyBranch::Shen },
    SolarTermApproximation { name: "Bailu", month: 9, day: 8, branch: EarthlyBranch::You },
    SolarTermApproximation { name: "Hanlu", month: 10, day: 8, branch: EarthlyBranch::Xu },
    SolarTermApproximation { name: "Lidong", month: 11, day: 7, branch: EarthlyBranch::Hai },
    SolarTermApproximation { name: "Daxue", month: 12, day: 7, branch: EarthlyBranch::Zi },
];

/// The Five Tigers rule (五虎遁): each pair of year stems fixes the stem of
/// the Yin (Tiger) month.
///
/// Total over the ten stems; every stem appears in exactly one pair.
const FIVE_TIGERS: [(HeavenlyStem, HeavenlyStem, HeavenlyStem); 5] = [
    (HeavenlyStem::Jia, HeavenlyStem::Ji, HeavenlyStem::Bing),
    (HeavenlyStem::Yi, HeavenlyStem::Geng, HeavenlyStem::Wu),
    (HeavenlyStem::Bing, HeavenlyStem::Xin, HeavenlyStem::Geng),
    (HeavenlyStem::Ding, HeavenlyStem::Ren, HeavenlyStem::Ren),
    (HeavenlyStem::Wu, HeavenlyStem::Gui, HeavenlyStem::Jia),
];

/// Finds the principal term governing a date.
///
/// Materializes the term table for the previous, current and next civil
/// year (terms near January 1st belong to the previous year's table),
/// sorts the 36 onsets chronologically and keeps the last one on or before
/// the date. A date preceding every onset in the window falls back to the
/// Minor Cold entry; that edge is unreachable for any real input because
/// the window always starts a full year early.
pub fn governing_term(date: NaiveDate) -> (NaiveDate, SolarTermApproximation) {
    let year = chrono::Datelike::year(&date);
    let mut onsets: Vec<(NaiveDate, SolarTermApproximation)> = Vec::with_capacity(36);
    for y in [year - 1, year, year + 1] {
        for term in SOLAR_TERMS {
            if let Some(onset) = term.onset(y) {
                onsets.push((onset, term));
            }
        }
    }
    onsets.sort_by_key(|(onset, _)| *onset);

    onsets
        .iter()
        .rev()
        .find(|(onset, _)| *onset <= date)
        .copied()
        .unwrap_or_else(|| {
            // Safety default per the month-boundary rule: Minor Cold.
            let minor_cold = SOLAR_TERMS[0];
            (
                minor_cold.onset(year - 1).unwrap_or(date),
                minor_cold,
            )
        })
}

/// Offset of a month branch from the Yin (Tiger) month.
///
/// Yin is the first BaZi month, so the month sequence runs
/// Yin, Mao, ..., Hai, Zi, Chou.
fn offset_from_yin(branch: EarthlyBranch) -> usize {
    (branch.index() + 12 - EarthlyBranch::Yin.index()) % 12
}

/// Looks up the Yin-month starting stem for a year stem.
fn yin_month_starting_stem(year_stem: HeavenlyStem) -> EngineResult<HeavenlyStem> {
    FIVE_TIGERS
        .iter()
        .find(|(first, second, _)| *first == year_stem || *second == year_stem)
        .map(|(_, _, start)| *start)
        .ok_or_else(|| EngineError::InvariantViolation {
            message: format!("year stem {} missing from the Five Tigers table", year_stem.name()),
        })
}

/// Calculates the month pillar for a calendar date.
///
/// The governing term's branch is the month branch; the month stem is the
/// Five Tigers starting stem for the (solar-term-adjusted) year stem,
/// advanced by the branch's offset from the Yin month.
///
/// # Errors
///
/// Returns [`EngineError::InvariantViolation`] only if a lookup table is
/// defective; the derivation is total for every valid date.
///
/// # Example
///
/// ```
/// use bazi_engine::calculation::month_pillar;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2000, 6, 10).unwrap();
/// assert_eq!(month_pillar(date).unwrap().label(), "壬午");
/// ```
pub fn month_pillar(date: NaiveDate) -> EngineResult<SexagenaryPair> {
    let (_, term) = governing_term(date);
    let month_branch = term.branch;

    let year_stem = year_pillar(date).stem();
    let starting_stem = yin_month_starting_stem(year_stem)?;
    let stem_index = (starting_stem.index() + offset_from_yin(month_branch)) % 10;
    let month_stem = HeavenlyStem::from_index(stem_index);

    SexagenaryPair::from_stem_branch(month_stem, month_branch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_table_covers_all_twelve_branches() {
        for branch in EarthlyBranch::ALL {
            assert!(
                SOLAR_TERMS.iter().any(|t| t.branch == branch),
                "no term opens the {} month",
                branch.name()
            );
        }
    }

    #[test]
    fn test_five_tigers_covers_all_ten_stems_once() {
        for stem in HeavenlyStem::ALL {
            let hits = FIVE_TIGERS
                .iter()
                .filter(|(a, b, _)| *a == stem || *b == stem)
                .count();
            assert_eq!(hits, 1, "stem {} covered {} times", stem.name(), hits);
        }
    }

    #[test]
    fn test_birth_on_term_day_takes_that_branch() {
        let (onset, term) = governing_term(date(2000, 2, 4));
        assert_eq!(term.branch, EarthlyBranch::Yin);
        assert_eq!(onset, date(2000, 2, 4));
    }

    #[test]
    fn test_day_before_term_takes_previous_branch() {
        let (_, term) = governing_term(date(2000, 2, 3));
        assert_eq!(term.branch, EarthlyBranch::Chou);
    }

    #[test]
    fn test_late_december_governed_by_daxue() {
        let (onset, term) = governing_term(date(1991, 1, 1));
        assert_eq!(term.branch, EarthlyBranch::Zi);
        assert_eq!(onset, date(1990, 12, 7));
    }

    #[test]
    fn test_month_pillar_december_1990() {
        // Year stem 庚 (1990 pillar), Zi month: 戊子.
        assert_eq!(month_pillar(date(1991, 1, 1)).unwrap().label(), "戊子");
    }

    #[test]
    fn test_month_pillar_june_2000() {
        assert_eq!(month_pillar(date(2000, 6, 10)).unwrap().label(), "壬午");
    }

    #[test]
    fn test_month_pillar_january_2000() {
        // Before Lichun the year stem is still 己 (1999), Chou month: 丁丑.
        assert_eq!(month_pillar(date(2000, 2, 3)).unwrap().label(), "丁丑");
    }

    #[test]
    fn test_month_stem_uses_solar_adjusted_year() {
        // 2000-02-03 and 2000-02-04 straddle the year boundary; their month
        // stems derive from different year stems.
        let before = month_pillar(date(2000, 2, 3)).unwrap();
        let after = month_pillar(date(2000, 2, 4)).unwrap();
        assert_eq!(before.label(), "丁丑");
        assert_eq!(after.label(), "戊寅");
    }

    #[test]
    fn test_offset_from_yin_ordering() {
        assert_eq!(offset_from_yin(EarthlyBranch::Yin), 0);
        assert_eq!(offset_from_yin(EarthlyBranch::Mao), 1);
        assert_eq!(offset_from_yin(EarthlyBranch::Zi), 10);
        assert_eq!(offset_from_yin(EarthlyBranch::Chou), 11);
    }

    #[test]
    fn test_every_month_pillar_is_in_cycle() {
        // Walk one full year; every derived pair must be constructible,
        // which exercises the parity invariant end to end.
        let mut current = date(1999, 1, 1);
        while current < date(2000, 1, 1) {
            assert!(month_pillar(current).is_ok(), "failed at {}", current);
            current = current.succ_opt().unwrap();
        }
    }
}
