//! Core data models for the BaZi calculation engine.
//!
//! This module contains all the domain value objects used throughout the
//! engine. Every type here is immutable once constructed; the stem and
//! branch tables are process-wide compile-time constants.

mod birth_moment;
mod four_pillars;
mod sexagenary;
mod stems_branches;

pub use birth_moment::BirthMoment;
pub use four_pillars::FourPillarResult;
pub use sexagenary::{SEXAGENARY_CYCLE_LEN, SexagenaryPair};
pub use stems_branches::{EarthlyBranch, HeavenlyStem};
