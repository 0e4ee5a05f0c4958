use getset::CopyGetters;
use serde::{Deserialize, Serialize};

use crate::prelude::{Real, Time};

/// Snapshot of the exponential "kill count" narrative at a given week.
///
/// Snapshots are immutable: advancing time returns a fresh value, so the
/// caller owns every state transition. Growth is deliberately unbounded.
#[derive(Debug, PartialEq, Copy, Clone, CopyGetters, Serialize, Deserialize)]
#[getset(get_copy = "pub")]
pub struct OutbreakState {
    infected: Real,
    weeks: Time,
}

impl OutbreakState {
    /// Week-1 state with the given number of infected people.
    pub fn new(initial_infected: u32) -> Self {
        OutbreakState {
            infected: initial_infected as Real,
            weeks: 1,
        }
    }

    /// Expected deaths among the people currently infected, rounded half
    /// away from zero.
    pub fn killed_this_week(&self, fatality_rate: Real) -> u64 {
        (self.infected * fatality_rate).round() as u64
    }

    /// Next week's snapshot: the infected count grows by the reproduction
    /// factor and the week counter advances by one.
    pub fn advance_week(&self, reproduction_factor: Real) -> Self {
        OutbreakState {
            infected: self.infected * reproduction_factor,
            weeks: self.weeks + 1,
        }
    }
}

impl Default for OutbreakState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::BASIC_REPRODUCTION_FACTOR;

    #[test]
    fn starts_at_week_one() {
        let state = OutbreakState::new(2);
        assert_eq!(state.infected(), 2.0);
        assert_eq!(state.weeks(), 1);
    }

    #[test]
    fn advance_week_multiplies_infections() {
        let state = OutbreakState::new(2).advance_week(2.0);
        assert_eq!(state.infected(), 4.0);
        assert_eq!(state.weeks(), 2);
    }

    #[test]
    fn killed_rounds_half_away_from_zero() {
        assert_eq!(OutbreakState::new(2).killed_this_week(0.034), 0);
        assert_eq!(OutbreakState::new(100).killed_this_week(0.034), 3);
        assert_eq!(OutbreakState::new(100).killed_this_week(0.035), 4);
    }

    #[test]
    fn doubling_sequence() {
        let mut state = OutbreakState::new(1);
        let mut curve = vec![state.infected()];
        for _ in 0..4 {
            state = state.advance_week(BASIC_REPRODUCTION_FACTOR);
            curve.push(state.infected());
        }
        assert_eq!(curve, vec![1.0, 2.0, 4.0, 8.0, 16.0]);
        assert_eq!(state.weeks(), 5);
    }

    #[test]
    fn roundtrip() {
        let state = OutbreakState::new(2).advance_week(1.5);
        let data = toml::to_string(&state).unwrap();
        let state_: OutbreakState = toml::from_str(&data).unwrap();
        assert_eq!(state, state_);
    }
}
