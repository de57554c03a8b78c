//! Single-precision 2D, 3D and 4D vectors with a lazily cached magnitude.
//!
//! Each vector computes its squared magnitude, magnitude and inverse
//! magnitude on the first read that needs them and reuses them until one of
//! its components is mutated. Reads go through `&self`, so a vector can be
//! shared immutably within a thread while still filling its cache.

#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(clippy::cast_lossless)]

#[macro_use]
mod macros;

pub mod angle;
pub mod error;
mod magnitude;
pub mod vector2;
pub mod vector3;
pub mod vector4;

pub use angle::{Degrees, Radians};
pub use error::{Result, VectorError};
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;
