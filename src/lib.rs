//! Scalar quaternion algebra.

#[macro_use]
mod macros;

pub mod consts;
pub mod quaternion;
pub mod random;

pub use consts::EPSILON;
pub use quaternion::Quaternion;
