use crate::prelude::{Age, Real};

///////////////////////////////////////////////////////////////////////////////
// Default narrative values for COVID-19 (as of March 2020)
///////////////////////////////////////////////////////////////////////////////

pub const CASE_FATALITY_RATE: Real = 0.034;
pub const FLU_FATALITY_RATE: Real = 0.001;
pub const BASIC_REPRODUCTION_FACTOR: Real = 2.0;

/// Age-dependent fatality rates as (max_age, rate) breakpoints, ascending.
/// The last two bands share the 79 threshold: during an ascending scan the
/// first one wins below 79 and the second acts as the open-ended top band.
pub const AGE_FATALITY_BANDS: [(Age, Real); 9] = [
    (9, 0.0),
    (19, 0.002),
    (29, 0.002),
    (39, 0.002),
    (49, 0.004),
    (59, 0.013),
    (69, 0.036),
    (79, 0.08),
    (79, 0.148),
];
