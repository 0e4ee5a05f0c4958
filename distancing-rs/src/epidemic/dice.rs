use getset::CopyGetters;
use rand::Rng;

use crate::prelude::{Age, FatalityTable, ForAge, Real};

/// Outcome toggle for a single person's fatality trial. `Dead` is absorbing:
/// once there, further rolls are ignored.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RollState {
    Alive,
    Rolling,
    Dead,
}

impl Default for RollState {
    fn default() -> Self {
        RollState::Alive
    }
}

impl RollState {
    pub fn is_dead(self) -> bool {
        self == RollState::Dead
    }

    pub fn is_rolling(self) -> bool {
        self == RollState::Rolling
    }
}

/// A household member's repeatable fatality trial. The rate is looked up once
/// at construction; each roll is an independent Bernoulli draw against it.
#[derive(Debug, Copy, Clone, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct DiceRoll {
    age: Age,
    rate: Real,
    state: RollState,
    rolls: u32,
}

impl DiceRoll {
    pub fn new(age: Age, table: &FatalityTable) -> Self {
        DiceRoll {
            age,
            rate: table.for_age(age),
            state: RollState::Alive,
            rolls: 0,
        }
    }

    /// Arm a new trial: count the roll and enter `Rolling`. The dead stay
    /// dead.
    pub fn roll(&mut self) -> &mut Self {
        if self.state != RollState::Dead {
            self.rolls += 1;
            self.state = RollState::Rolling;
        }
        return self;
    }

    /// Settle a pending trial with a single draw against the member's rate.
    /// Does nothing unless a roll is pending.
    pub fn resolve<R: Rng>(&mut self, rng: &mut R) -> RollState {
        if self.state == RollState::Rolling {
            if rng.gen_bool(self.rate) {
                self.state = RollState::Dead;
            } else {
                self.state = RollState::Alive;
            }
        }
        return self.state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn certain(rate: Real) -> FatalityTable {
        FatalityTable::from_pairs(&[(200, rate)])
    }

    #[test]
    fn rate_comes_from_the_table() {
        let table = FatalityTable::default();
        assert_eq!(DiceRoll::new(40, &table).rate(), 0.004);
        assert_eq!(DiceRoll::new(80, &table).rate(), 0.148);
    }

    #[test]
    fn zero_rate_never_kills() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut roll = DiceRoll::new(5, &certain(0.0));
        for _ in 0..100 {
            roll.roll();
            assert_eq!(roll.resolve(&mut rng), RollState::Alive);
        }
        assert_eq!(roll.rolls(), 100);
    }

    #[test]
    fn unit_rate_kills_on_first_roll() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut roll = DiceRoll::new(5, &certain(1.0));
        roll.roll();
        assert_eq!(roll.resolve(&mut rng), RollState::Dead);
    }

    #[test]
    fn dead_is_absorbing() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut roll = DiceRoll::new(5, &certain(1.0));
        roll.roll();
        roll.resolve(&mut rng);
        let rolls = roll.rolls();

        roll.roll();
        assert_eq!(roll.state(), RollState::Dead);
        assert_eq!(roll.rolls(), rolls);
    }

    #[test]
    fn resolve_without_pending_roll_is_a_noop() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut roll = DiceRoll::new(5, &certain(1.0));
        assert_eq!(roll.resolve(&mut rng), RollState::Alive);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let table = certain(0.5);
        let run = |seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut roll = DiceRoll::new(30, &table);
            let mut outcomes = vec![];
            for _ in 0..20 {
                roll.roll();
                outcomes.push(roll.resolve(&mut rng));
                if roll.state().is_dead() {
                    break;
                }
            }
            outcomes
        };
        assert_eq!(run(41), run(41));
    }
}
