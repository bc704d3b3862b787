//! Sexagenary cycle lookup.

use crate::models::SexagenaryPair;

/// Returns the stem-branch label at the given cycle position.
///
/// The cycle runs the ten stems and twelve branches in lockstep, so the
/// label at `i` combines `stem[i mod 10]` with `branch[i mod 12]`. Pure and
/// total: any integer index reduces into the 60-cycle.
///
/// # Example
///
/// ```
/// use bazi_engine::calculation::label_at;
///
/// assert_eq!(label_at(0), "甲子");
/// assert_eq!(label_at(15), "己卯");
/// assert_eq!(label_at(60), label_at(0));
/// ```
pub fn label_at(index: i64) -> String {
    SexagenaryPair::from_cycle_index(index).label()
}
