use rand::Rng;
use thiserror::Error;

use crate::prelude::{Age, DiceRoll, FatalityTable, Real};

/// Reasons a comma-separated age list fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HouseholdParseError {
    #[error("age list is empty")]
    Empty,
    #[error("invalid age {0:?}")]
    InvalidAge(String),
}

/// Ordered ages of a household. The first entry is the visitor, the rest
/// their household members.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Household {
    ages: Vec<Age>,
}

impl Household {
    pub fn new(ages: Vec<Age>) -> Self {
        Household { ages }
    }

    /// Parse a comma-separated age list such as "40,62,9". Unset entries are
    /// expected to be filtered out by the caller beforehand.
    pub fn parse(data: &str) -> Result<Self, HouseholdParseError> {
        if data.trim().is_empty() {
            return Err(HouseholdParseError::Empty);
        }
        let mut ages = Vec::new();
        for part in data.split(',') {
            let part = part.trim();
            match part.parse() {
                Ok(age) => ages.push(age),
                _ => return Err(HouseholdParseError::InvalidAge(part.to_string())),
            }
        }
        return Ok(Household { ages });
    }

    /// Add another household member.
    pub fn push(&mut self, age: Age) -> &mut Self {
        self.ages.push(age);
        return self;
    }

    pub fn ages(&self) -> &[Age] {
        self.ages.as_slice()
    }

    pub fn len(&self) -> usize {
        self.ages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }

    /// Fatality rate of each member, in household order.
    pub fn rates(&self, table: &FatalityTable) -> Vec<Real> {
        self.ages.iter().map(|&age| table.lookup(age)).collect()
    }

    /// A fresh fatality trial for each member, in household order.
    pub fn dice_rolls(&self, table: &FatalityTable) -> Vec<DiceRoll> {
        self.ages
            .iter()
            .map(|&age| DiceRoll::new(age, table))
            .collect()
    }

    /// Roll and settle one trial per member, returning the settled trials.
    pub fn roll_all<R: Rng>(&self, table: &FatalityTable, rng: &mut R) -> Vec<DiceRoll> {
        let mut rolls = self.dice_rolls(table);
        for roll in rolls.iter_mut() {
            roll.roll();
            roll.resolve(rng);
        }
        return rolls;
    }
}
