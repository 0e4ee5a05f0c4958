mod constants;
mod dice;
mod fatality;
pub use constants::*;
pub use dice::*;
pub use fatality::*;
