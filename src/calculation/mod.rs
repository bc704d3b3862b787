//! Calculation logic for the BaZi engine.
//!
//! This module contains all the pillar derivations: the sexagenary cycle
//! lookup, day-pillar epoch arithmetic, the year-pillar Start-of-Spring
//! boundary, the month-pillar governing solar term and Five Tigers rule,
//! the hour-pillar two-hour windows and Five Rats rule, and the orchestrator
//! that sequences them into a full chart.

mod day_pillar;
mod four_pillars;
mod hour_pillar;
mod month_pillar;
mod sexagenary_cycle;
mod year_pillar;

pub use day_pillar::{DAY_PILLAR_EPOCH, DAY_PILLAR_EPOCH_INDEX, day_pillar};
pub use four_pillars::{calculate_four_pillars, day_pillar_date};
pub use hour_pillar::{HOUR_RANGES, HourRange, hour_branch, hour_pillar};
pub use month_pillar::{SOLAR_TERMS, SolarTermApproximation, governing_term, month_pillar};
pub use sexagenary_cycle::label_at;
pub use year_pillar::{START_OF_SPRING, year_pillar};
