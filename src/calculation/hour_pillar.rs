//! Hour pillar calculation.
//!
//! Each earthly branch owns a two-hour window of the day, starting with Zi
//! at 23:00-00:59. The hour stem follows from the day stem via the Five
//! Rats rule.

use crate::error::{EngineError, EngineResult};
use crate::models::{EarthlyBranch, HeavenlyStem, SexagenaryPair};

/// A two-hour clock window owned by an earthly branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    /// The first hour of the window (inclusive).
    pub start_hour: u32,
    /// The end hour of the window (exclusive).
    pub end_hour: u32,
    /// The branch owning the window.
    pub branch: EarthlyBranch,
}

impl HourRange {
    /// Returns whether the window contains the given clock hour.
    ///
    /// A window whose start hour exceeds its end hour wraps across
    /// midnight; only the Zi window does. Hours outside the 0-23 clock
    /// domain match no window, wrapping or not.
    pub const fn contains(&self, hour: u32) -> bool {
        if self.start_hour > self.end_hour {
            (hour >= self.start_hour && hour < 24) || hour < self.end_hour
        } else {
            hour >= self.start_hour && hour < self.end_hour
        }
    }
}

/// The twelve two-hour windows covering the full day.
///
/// Immutable process-wide constant data. The Zi window wraps across
/// midnight (23:00-00:59).
pub const HOUR_RANGES: [HourRange; 12] = [
    HourRange { start_hour: 23, end_hour: 1, branch: EarthlyBranch::Zi },
    HourRange { start_hour: 1, end_hour: 3, branch: EarthlyBranch::Chou },
    HourRange { start_hour: 3, end_hour: 5, branch: EarthlyBranch::Yin },
    HourRange { start_hour: 5, end_hour: 7, branch: EarthlyBranch::Mao },
    HourRange { start_hour: 7, end_hour: 9, branch: EarthlyBranch::Chen },
    HourRange { start_hour: 9, end_hour: 11, branch: EarthlyBranch::Si },
    HourRange { start_hour: 11, end_hour: 13, branch: EarthlyBranch::Wu },
    HourRange { start_hour: 13, end_hour: 15, branch: EarthlyBranch::Wei },
    HourRange { start_hour: 15, end_hour: 17, branch: EarthlyBranch::Shen },
    HourRange { start_hour: 17, end_hour: 19, branch: EarthlyBranch::You },
    HourRange { start_hour: 19, end_hour: 21, branch: EarthlyBranch::Xu },
    HourRange { start_hour: 21, end_hour: 23, branch: EarthlyBranch::Hai },
];

/// The Five Rats rule (五鼠遁): each pair of day stems fixes the stem of
/// the Zi (Rat) hour.
///
/// Total over the ten stems; every stem appears in exactly one pair.
const FIVE_RATS: [(HeavenlyStem, HeavenlyStem, HeavenlyStem); 5] = [
    (HeavenlyStem::Jia, HeavenlyStem::Ji, HeavenlyStem::Jia),
    (HeavenlyStem::Yi, HeavenlyStem::Geng, HeavenlyStem::Bing),
    (HeavenlyStem::Bing, HeavenlyStem::Xin, HeavenlyStem::Wu),
    (HeavenlyStem::Ding, HeavenlyStem::Ren, HeavenlyStem::Geng),
    (HeavenlyStem::Wu, HeavenlyStem::Gui, HeavenlyStem::Ren),
];

/// Resolves a clock hour to its earthly-branch window.
///
/// # Errors
///
/// Returns [`EngineError::UnresolvedHour`] if no window matches; that is
/// unreachable for hours in 0..24 and indicates a defective table.
pub fn hour_branch(hour: u32) -> EngineResult<EarthlyBranch> {
    HOUR_RANGES
        .iter()
        .find(|range| range.contains(hour))
        .map(|range| range.branch)
        .ok_or(EngineError::UnresolvedHour { hour })
}

/// Looks up the Zi-hour starting stem for a day stem.
fn zi_hour_starting_stem(day_stem: HeavenlyStem) -> EngineResult<HeavenlyStem> {
    FIVE_RATS
        .iter()
        .find(|(first, second, _)| *first == day_stem || *second == day_stem)
        .map(|(_, _, start)| *start)
        .ok_or_else(|| EngineError::InvariantViolation {
            message: format!("day stem {} missing from the Five Rats table", day_stem.name()),
        })
}

/// Calculates the hour pillar from the day's heavenly stem and the clock
/// hour.
///
/// The hour branch comes from the two-hour window table; the hour stem is
/// the Five Rats starting stem for the day stem, advanced by the branch's
/// offset from Zi.
///
/// # Example
///
/// ```
/// use bazi_engine::calculation::hour_pillar;
/// use bazi_engine::models::HeavenlyStem;
///
/// let pillar = hour_pillar(HeavenlyStem::Ji, 12).unwrap();
/// assert_eq!(pillar.label(), "庚午");
/// ```
pub fn hour_pillar(day_stem: HeavenlyStem, hour: u32) -> EngineResult<SexagenaryPair> {
    let branch = hour_branch(hour)?;
    let starting_stem = zi_hour_starting_stem(day_stem)?;
    // Branch indices already count from Zi.
    let stem_index = (starting_stem.index() + branch.index()) % 10;
    SexagenaryPair::from_stem_branch(HeavenlyStem::from_index(stem_index), branch)
}
