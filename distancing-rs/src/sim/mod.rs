mod household;
mod outbreak;
mod simulation;
mod tracker;
pub use household::*;
pub use outbreak::*;
pub use simulation::*;
pub use tracker::*;
