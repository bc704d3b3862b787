//! Four-pillar result model.

use serde::{Deserialize, Serialize};

use crate::models::{BirthMoment, SexagenaryPair};

/// The outcome of a four-pillar calculation.
///
/// Holds one [`SexagenaryPair`] per pillar plus the echoed birth moment.
/// Created once per calculation and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillarResult {
    /// The echoed input moment.
    pub birth: BirthMoment,
    /// The year pillar.
    pub year_pillar: SexagenaryPair,
    /// The month pillar.
    pub month_pillar: SexagenaryPair,
    /// The day pillar.
    pub day_pillar: SexagenaryPair,
    /// The hour pillar.
    pub hour_pillar: SexagenaryPair,
}

impl FourPillarResult {
    /// Returns the four pillar labels in year, month, day, hour order.
    ///
    /// This is the "eight characters" of the chart.
    pub fn labels(&self) -> [String; 4] {
        [
            self.year_pillar.label(),
            self.month_pillar.label(),
            self.day_pillar.label(),
            self.hour_pillar.label(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_ordered_year_month_day_hour() {
        let result = FourPillarResult {
            birth: BirthMoment {
                year: 1991,
                month: 1,
                day: 1,
                hour: 12,
                minute: Some(0),
            },
            year_pillar: SexagenaryPair::from_cycle_index(6),
            month_pillar: SexagenaryPair::from_cycle_index(24),
            day_pillar: SexagenaryPair::from_cycle_index(15),
            hour_pillar: SexagenaryPair::from_cycle_index(6),
        };

        assert_eq!(
            result.labels(),
            ["庚午".to_string(), "戊子".to_string(), "己卯".to_string(), "庚午".to_string()]
        );
    }
}
