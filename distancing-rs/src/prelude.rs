pub use crate::epidemic::*;
pub use crate::sim::*;

/// Basic representation of time. This crate measures time in weeks.
pub type Time = u32;

/// Base Real type used by this crate. Uses an alias to easily change precision
/// if necessary.
pub type Real = f64;

/// Age of a person. Lookups are permissive over arbitrarily large values, so
/// this is wider than any realistic age.
pub type Age = u32;

/// Simple trait to simplify the use of age-dependent values/parameters.
pub trait ForAge<T> {
    /// Return the content of parameter for people with the given age.
    fn for_age(&self, age: Age) -> T;
}
