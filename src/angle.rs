//! Angles between vectors.

use crate::error::{Result, VectorError};
use std::{
    f32::consts::{FRAC_1_PI, PI},
    fmt,
    ops::{Add, Neg, Sub},
};

/// An angle in radians. This is what all vector angle computations return.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Radians(pub f32);

/// An angle in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Degrees(pub f32);

impl Radians {
    /// The value of the angle in radians.
    #[inline]
    pub const fn radians(self) -> f32 {
        self.0
    }

    /// The value of the angle in degrees.
    #[inline]
    pub fn degrees(self) -> f32 {
        radians_to_degrees(self.0)
    }

    /// Whether the angle is the NaN angle. The unsigned vector angles report
    /// [`VectorError::UndefinedAngle`] instead of returning this.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }
}

impl Degrees {
    /// The value of the angle in degrees.
    #[inline]
    pub const fn degrees(self) -> f32 {
        self.0
    }

    /// The value of the angle in radians.
    #[inline]
    pub fn radians(self) -> f32 {
        degrees_to_radians(self.0)
    }
}

impl From<Radians> for Degrees {
    fn from(angle: Radians) -> Self {
        Self(angle.degrees())
    }
}

impl From<Degrees> for Radians {
    fn from(angle: Degrees) -> Self {
        Self(angle.radians())
    }
}

impl Add for Radians {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Radians {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Radians {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Neg for Degrees {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad", self.0)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl_approx_eq!(Radians, 0);

impl_approx_eq!(Degrees, 0);

pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * (180.0 * FRAC_1_PI)
}

pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Computes the arccosine of `cos_theta` after clamping it to `[-1, 1]`.
///
/// Rounding in `dot / (|a| |b|)` can push the cosine of (anti)parallel
/// vectors slightly out of the domain of `acos`, which would give NaN.
#[inline]
pub(crate) fn clamped_acos(cos_theta: f32) -> Radians {
    Radians(cos_theta.clamp(-1.0, 1.0).acos())
}

/// Computes the unsigned angle between two vectors from their dot product
/// and magnitudes. When the magnitude product or the dot product leaves the
/// normal range, the cosine is instead taken as the dot product of the
/// normalized vectors, given by `normalized_dot`.
///
/// # Errors
/// Returns [`VectorError::UndefinedAngle`] if either magnitude is zero, or
/// if the cosine is NaN because a component is infinite or NaN.
pub(crate) fn unsigned_angle(
    dot: f32,
    magnitude: f32,
    other_magnitude: f32,
    normalized_dot: impl FnOnce() -> f32,
) -> Result<Radians> {
    if magnitude == 0.0 || other_magnitude == 0.0 {
        return Err(VectorError::UndefinedAngle);
    }
    let magnitude_product = magnitude * other_magnitude;
    let cos_theta = if magnitude_product.is_normal() && dot.is_finite() {
        dot / magnitude_product
    } else {
        normalized_dot()
    };
    if cos_theta.is_nan() {
        return Err(VectorError::UndefinedAngle);
    }
    Ok(clamped_acos(cos_theta))
}

/// Computes the angle from the given sine-like and cosine-like terms. The
/// terms need not be normalized, and `(0, 0)` gives a zero angle.
#[inline]
pub(crate) fn signed_atan2(sin_term: f32, cos_term: f32) -> Radians {
    Radians(sin_term.atan2(cos_term))
}
