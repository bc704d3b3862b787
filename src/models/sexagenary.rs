//! The sexagenary pair: a stem-branch combination in the 60-cycle.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{EarthlyBranch, HeavenlyStem};

/// The length of the sexagenary cycle.
pub const SEXAGENARY_CYCLE_LEN: usize = 60;

/// A stem-branch pair identified by a single cycle index in 0..60.
///
/// The pair at index `i` combines `stem[i mod 10]` with `branch[i mod 12]`.
/// Only 60 of the 120 theoretical stem-branch combinations occur in the
/// cycle: exactly those where the stem index and branch index share the
/// parity of `i`. Out-of-cycle combinations cannot be constructed; see
/// [`SexagenaryPair::from_stem_branch`].
///
/// # Example
///
/// ```
/// use bazi_engine::models::SexagenaryPair;
///
/// let jiazi = SexagenaryPair::from_cycle_index(0);
/// assert_eq!(jiazi.label(), "甲子");
///
/// // Indices reduce into the cycle, including negative ones.
/// assert_eq!(SexagenaryPair::from_cycle_index(60).label(), "甲子");
/// assert_eq!(SexagenaryPair::from_cycle_index(-1).label(), "癸亥");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SexagenaryPair(u8);

impl SexagenaryPair {
    /// Constructs the pair at the given cycle position, reducing modulo 60.
    ///
    /// Negative indices reduce into 0..60 as well, so day counts before the
    /// day-pillar epoch are handled without a separate branch.
    pub fn from_cycle_index(index: i64) -> Self {
        Self(index.rem_euclid(SEXAGENARY_CYCLE_LEN as i64) as u8)
    }

    /// Finds the unique cycle position carrying the given stem and branch.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvariantViolation`] if the combination is not
    /// a member of the cycle (stem and branch indices of opposite parity).
    ///
    /// # Example
    ///
    /// ```
    /// use bazi_engine::models::{EarthlyBranch, HeavenlyStem, SexagenaryPair};
    ///
    /// let pair = SexagenaryPair::from_stem_branch(HeavenlyStem::Ji, EarthlyBranch::Mao).unwrap();
    /// assert_eq!(pair.index(), 15);
    ///
    /// // 甲丑 is one of the 60 combinations that never occur.
    /// assert!(SexagenaryPair::from_stem_branch(HeavenlyStem::Jia, EarthlyBranch::Chou).is_err());
    /// ```
    pub fn from_stem_branch(stem: HeavenlyStem, branch: EarthlyBranch) -> EngineResult<Self> {
        (0..SEXAGENARY_CYCLE_LEN)
            .find(|i| i % 10 == stem.index() && i % 12 == branch.index())
            .map(|i| Self(i as u8))
            .ok_or_else(|| EngineError::InvariantViolation {
                message: format!(
                    "stem {} and branch {} do not combine within the sexagenary cycle",
                    stem.name(),
                    branch.name()
                ),
            })
    }

    /// Returns the pair's cycle index (0-59).
    pub fn index(&self) -> u8 {
        self.0
    }

    /// Returns the pair's heavenly stem.
    pub fn stem(&self) -> HeavenlyStem {
        HeavenlyStem::from_index(self.0 as usize)
    }

    /// Returns the pair's earthly branch.
    pub fn branch(&self) -> EarthlyBranch {
        EarthlyBranch::from_index(self.0 as usize)
    }

    /// Returns the two-character stem-branch label, e.g. `甲子`.
    pub fn label(&self) -> String {
        format!("{}{}", self.stem().symbol(), self.branch().symbol())
    }
}

impl std::fmt::Display for SexagenaryPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_zero_is_jiazi() {
        let pair = SexagenaryPair::from_cycle_index(0);
        assert_eq!(pair.stem(), HeavenlyStem::Jia);
        assert_eq!(pair.branch(), EarthlyBranch::Zi);
        assert_eq!(pair.label(), "甲子");
    }

    #[test]
    fn test_index_59_is_guihai() {
        let pair = SexagenaryPair::from_cycle_index(59);
        assert_eq!(pair.stem(), HeavenlyStem::Gui);
        assert_eq!(pair.branch(), EarthlyBranch::Hai);
        assert_eq!(pair.label(), "癸亥");
    }

    #[test]
    fn test_negative_index_reduces_into_cycle() {
        assert_eq!(
            SexagenaryPair::from_cycle_index(-1),
            SexagenaryPair::from_cycle_index(59)
        );
        assert_eq!(
            SexagenaryPair::from_cycle_index(-120),
            SexagenaryPair::from_cycle_index(0)
        );
    }

    #[test]
    fn test_parity_invariant_holds_for_all_members() {
        for i in 0..SEXAGENARY_CYCLE_LEN {
            let pair = SexagenaryPair::from_cycle_index(i as i64);
            assert_eq!(
                pair.stem().index() % 2,
                pair.branch().index() % 2,
                "index {} pairs a stem and branch of opposite parity",
                i
            );
            assert_eq!(pair.stem().index() % 2, i % 2);
        }
    }

    #[test]
    fn test_from_stem_branch_round_trips_every_member() {
        for i in 0..SEXAGENARY_CYCLE_LEN {
            let pair = SexagenaryPair::from_cycle_index(i as i64);
            let rebuilt = SexagenaryPair::from_stem_branch(pair.stem(), pair.branch()).unwrap();
            assert_eq!(rebuilt.index() as usize, i);
        }
    }

    #[test]
    fn test_from_stem_branch_rejects_out_of_cycle_combinations() {
        // Odd branch with an even stem never occurs.
        let result = SexagenaryPair::from_stem_branch(HeavenlyStem::Jia, EarthlyBranch::Chou);
        assert!(matches!(
            result,
            Err(crate::error::EngineError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn test_display_matches_label() {
        let pair = SexagenaryPair::from_cycle_index(42);
        assert_eq!(format!("{}", pair), pair.label());
        assert_eq!(pair.label(), "丙午");
    }
}
