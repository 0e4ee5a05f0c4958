use crate::prelude::{Age, ForAge, Real};
use serde::{Deserialize, Serialize};

use super::constants::AGE_FATALITY_BANDS;

/// A single breakpoint of a step function over ages. A band covers every age
/// below its threshold that no earlier band already covers.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct RateBand {
    pub max_age: Age,
    pub rate: Real,
}

/// Ordered breakpoint table mapping an age to a fatality rate.
///
/// Thresholds must be non-decreasing. The last band is open-ended: ages
/// beyond every threshold receive its rate.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FatalityTable {
    bands: Vec<RateBand>,
}

impl FatalityTable {
    pub fn new(bands: Vec<RateBand>) -> Self {
        assert!(!bands.is_empty(), "Table must have at least one band");
        assert!(
            bands.windows(2).all(|w| w[0].max_age <= w[1].max_age),
            "Band thresholds must be non-decreasing"
        );
        assert!(
            bands.iter().all(|b| 0.0 <= b.rate && b.rate <= 1.0),
            "Rates must be probabilities"
        );
        FatalityTable { bands }
    }

    pub fn from_pairs(pairs: &[(Age, Real)]) -> Self {
        let bands = pairs
            .iter()
            .map(|&(max_age, rate)| RateBand { max_age, rate })
            .collect();
        return Self::new(bands);
    }

    pub fn bands(&self) -> &[RateBand] {
        self.bands.as_slice()
    }

    /// Fatality rate for a person of the given age.
    ///
    /// Scans the bands in ascending order, tracking the current band's rate,
    /// and stops as soon as the age falls below a threshold. Ages beyond
    /// every threshold get the last band's rate. Total and permissive: any
    /// age selects the nearest applicable band.
    pub fn lookup(&self, age: Age) -> Real {
        let mut rate = 0.0;
        for band in &self.bands {
            rate = band.rate;
            if age < band.max_age {
                break;
            }
        }
        return rate;
    }
}

impl Default for FatalityTable {
    fn default() -> Self {
        Self::from_pairs(&AGE_FATALITY_BANDS)
    }
}

impl ForAge<Real> for FatalityTable {
    fn for_age(&self, age: Age) -> Real {
        self.lookup(age)
    }
}
