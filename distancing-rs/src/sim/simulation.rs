use getset::{CopyGetters, Getters};
use log::info;

use crate::prelude::{
    KillCurveTracker, OutbreakState, Real, BASIC_REPRODUCTION_FACTOR, CASE_FATALITY_RATE,
};

/// Drives the week-by-week narrative: advance the outbreak one week at a
/// time, recording every step in a kill curve.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct OutbreakSimulation {
    #[getset(get_copy = "pub")]
    state: OutbreakState,
    #[getset(get_copy = "pub")]
    fatality_rate: Real,
    #[getset(get_copy = "pub")]
    reproduction_factor: Real,
    #[getset(get = "pub")]
    tracker: KillCurveTracker,
}

impl OutbreakSimulation {
    /// New simulation with the narrative defaults (rate 3.4%, factor 2).
    pub fn new(initial_infected: u32) -> Self {
        Self::with_params(
            initial_infected,
            CASE_FATALITY_RATE,
            BASIC_REPRODUCTION_FACTOR,
        )
    }

    /// New simulation with explicit parameters. Week 1 is recorded
    /// immediately so the curve always starts at the initial state.
    pub fn with_params(
        initial_infected: u32,
        fatality_rate: Real,
        reproduction_factor: Real,
    ) -> Self {
        let state = OutbreakState::new(initial_infected);
        let mut tracker = KillCurveTracker::new();
        tracker.update(&state, fatality_rate);
        OutbreakSimulation {
            state,
            fatality_rate,
            reproduction_factor,
            tracker,
        }
    }

    /// Advance a single week and record it.
    pub fn step(&mut self) -> &mut Self {
        self.state = self.state.advance_week(self.reproduction_factor);
        self.tracker.update(&self.state, self.fatality_rate);
        info!(
            "week [{}]: {} infected, {} killed",
            self.state.weeks(),
            self.state.infected(),
            self.state.killed_this_week(self.fatality_rate)
        );
        return self;
    }

    /// Run the simulation for the given number of weeks.
    pub fn run(&mut self, n_weeks: usize) -> &mut Self {
        for _ in 0..n_weeks {
            self.step();
        }
        return self;
    }

    /// Deaths in the current week.
    pub fn killed_this_week(&self) -> u64 {
        self.state.killed_this_week(self.fatality_rate)
    }

    /// Deaths accumulated across every recorded week.
    pub fn total_killed(&self) -> u64 {
        self.tracker.total_killed()
    }

    /// Render the recorded weekly curve as CSV data.
    pub fn render_killcurve_csv(&self, head: &str) -> String {
        self.tracker.render_csv(head, ',')
    }
}
