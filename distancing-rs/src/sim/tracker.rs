use crate::prelude::{OutbreakState, Real, Time};

/// Week-by-week record of an outbreak run, one entry per recorded week in
/// each column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KillCurveTracker {
    weeks: Vec<Time>,
    infected: Vec<Real>,
    killed: Vec<u64>,
}

impl KillCurveTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the given state as a new row.
    pub fn update(&mut self, state: &OutbreakState, fatality_rate: Real) {
        self.weeks.push(state.weeks());
        self.infected.push(state.infected());
        self.killed.push(state.killed_this_week(fatality_rate));
    }

    /// Number of recorded weeks.
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// The latest recorded row as (week, infected, killed).
    pub fn tip(&self) -> Option<(Time, Real, u64)> {
        let i = self.len().checked_sub(1)?;
        Some((self.weeks[i], self.infected[i], self.killed[i]))
    }

    /// Deaths accumulated across every recorded week.
    pub fn total_killed(&self) -> u64 {
        self.killed.iter().sum()
    }

    /// Render the recorded curve as CSV data.
    pub fn render_csv(&self, head: &str, sep: char) -> String {
        let mut data = head.to_string();
        for i in 0..self.len() {
            data.push('\n');
            data.push_str(&format!("{}", self.weeks[i]));
            data.push(sep);
            data.push_str(&format!("{}", self.infected[i]));
            data.push(sep);
            data.push_str(&format!("{}", self.killed[i]));
        }
        return data;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_one_row_per_week() {
        let mut tracker = KillCurveTracker::new();
        assert!(tracker.is_empty());
        assert_eq!(tracker.tip(), None);

        let mut state = OutbreakState::new(100);
        tracker.update(&state, 0.034);
        state = state.advance_week(2.0);
        tracker.update(&state, 0.034);

        assert_eq!(tracker.len(), 2);
        assert_eq!(tracker.tip(), Some((2, 200.0, 7)));
        assert_eq!(tracker.total_killed(), 10);
    }

    #[test]
    fn renders_csv() {
        let mut tracker = KillCurveTracker::new();
        let mut state = OutbreakState::new(100);
        tracker.update(&state, 0.034);
        state = state.advance_week(2.0);
        tracker.update(&state, 0.034);

        let csv = tracker.render_csv("week,infected,killed", ',');
        assert_eq!(csv, "week,infected,killed\n1,100,3\n2,200,7");
    }
}
