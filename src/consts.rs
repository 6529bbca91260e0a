//! Numeric `f64` constants.

pub use std::f64::consts::*;

pub const TWO_PI: f64 = TAU;

/// Default absolute tolerance for quaternion comparisons.
pub const EPSILON: f64 = f64::EPSILON * 8.0;
