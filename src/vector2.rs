//! 2-dimensional vectors.

use crate::{
    angle::{self, Radians},
    error::{Result, VectorError},
    magnitude::{MagnitudeCache, Magnitudes},
    vector3::Vector3,
};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 2-dimensional vector.
///
/// The squared magnitude, magnitude and inverse magnitude are computed on
/// the first read after construction or mutation and cached until the next
/// mutation. Equality is exact per component; use the [`approx`] traits to
/// compare vectors that went through rounding.
#[derive(Clone, Default)]
pub struct Vector2 {
    x: f32,
    y: f32,
    magnitudes: MagnitudeCache,
}

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            magnitudes: MagnitudeCache::dirty(),
        }
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a new vector with all ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::same(1.0)
    }

    /// The negative x-axis unit vector.
    #[inline]
    pub const fn left() -> Self {
        Self::new(-1.0, 0.0)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn right() -> Self {
        Self::new(1.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn up() -> Self {
        Self::new(0.0, 1.0)
    }

    /// The negative y-axis unit vector.
    #[inline]
    pub const fn down() -> Self {
        Self::new(0.0, -1.0)
    }

    #[inline]
    pub const fn negative_infinity() -> Self {
        Self::same(f32::NEG_INFINITY)
    }

    #[inline]
    pub const fn positive_infinity() -> Self {
        Self::same(f32::INFINITY)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn set_x(&mut self, x: f32) {
        self.x = x;
        self.magnitudes.invalidate();
    }

    #[inline]
    pub fn set_y(&mut self, y: f32) {
        self.y = y;
        self.magnitudes.invalidate();
    }

    /// A mutable reference to the x-component. The cached magnitude is
    /// discarded up front.
    #[inline]
    pub fn x_mut(&mut self) -> &mut f32 {
        self.magnitudes.invalidate();
        &mut self.x
    }

    /// A mutable reference to the y-component. The cached magnitude is
    /// discarded up front.
    #[inline]
    pub fn y_mut(&mut self) -> &mut f32 {
        self.magnitudes.invalidate();
        &mut self.y
    }

    /// Returns the component at `index` (0 for x, 1 for y).
    ///
    /// # Errors
    /// Returns [`VectorError::IndexOutOfRange`] if `index` is not 0 or 1.
    pub fn component(&self, index: usize) -> Result<f32> {
        VectorError::check_index(index, 2)?;
        Ok(self[index])
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: f32) -> Vector3 {
        Vector3::new(self.x, self.y, z)
    }

    /// The sum of the squared components.
    pub fn squared_magnitude(&self) -> f32 {
        self.magnitudes().squared
    }

    /// The Euclidean length of the vector.
    pub fn magnitude(&self) -> f32 {
        self.magnitudes().magnitude
    }

    /// The squared distance from the origin, which is the squared
    /// magnitude. Subtract two vectors first to get the distance between
    /// them.
    pub fn squared_distance(&self) -> f32 {
        self.squared_magnitude()
    }

    /// The distance from the origin, which is the magnitude.
    pub fn distance(&self) -> f32 {
        self.magnitude()
    }

    /// Computes the vector scaled to unit length, or the zero vector if
    /// the magnitude is zero.
    pub fn normalized(&self) -> Self {
        let magnitudes = self.magnitudes();
        if magnitudes.magnitude.is_infinite() && self.has_finite_components() {
            // Only the magnitude overflowed, which a quarter of the vector
            // can not do.
            return self.scaled(0.25).normalized();
        }
        if magnitudes.can_normalize() {
            self.scaled(magnitudes.inverse)
        } else {
            Self::zeros()
        }
    }

    /// Whether the magnitude is currently cached, meaning that it has been
    /// read since the vector was created or last mutated.
    pub fn has_cached_magnitude(&self) -> bool {
        !self.magnitudes.is_dirty()
    }

    /// Adds `value` to each component.
    #[inline]
    pub fn add_scalar(&self, value: f32) -> Self {
        Self::new(self.x + value, self.y + value)
    }

    /// Subtracts `value` from each component.
    #[inline]
    pub fn subtract_scalar(&self, value: f32) -> Self {
        Self::new(self.x - value, self.y - value)
    }

    /// Multiplies each component by `factor`.
    #[inline]
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Divides each component by `divisor`, following IEEE 754 for a zero
    /// divisor.
    #[inline]
    pub fn divided(&self, divisor: f32) -> Self {
        Self::new(self.x / divisor, self.y / divisor)
    }

    /// Divides each component by `divisor`.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_divided(&self, divisor: f32) -> Result<Self> {
        if divisor == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(self.divided(divisor))
    }

    #[inline]
    pub fn component_add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn component_sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Divides each component by the corresponding component in another
    /// vector, following IEEE 754 for zero divisors.
    #[inline]
    pub fn component_div(&self, other: &Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }

    /// Divides each component by the corresponding component in another
    /// vector.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if any component of `other`
    /// is zero.
    pub fn checked_component_div(&self, other: &Self) -> Result<Self> {
        if other.x == 0.0 || other.y == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(self.component_div(other))
    }

    /// Returns a vector where each component is the minimum of the
    /// corresponding component in this and another vector.
    #[inline]
    pub fn component_min(&self, other: &Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Returns a vector where each component is the maximum of the
    /// corresponding component in this and another vector.
    #[inline]
    pub fn component_max(&self, other: &Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the z-component of the 3D cross product of the two vectors
    /// extended with zero z-components.
    #[inline]
    pub fn cross(&self, other: &Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Computes the unsigned angle between this vector and another, in
    /// `[0, π]`.
    ///
    /// # Errors
    /// Returns [`VectorError::UndefinedAngle`] if either vector has zero
    /// magnitude or a component that is infinite or NaN.
    pub fn angle(&self, other: &Self) -> Result<Radians> {
        angle::unsigned_angle(
            self.dot(other),
            self.magnitude(),
            other.magnitude(),
            || self.normalized().dot(&other.normalized()),
        )
    }

    /// Computes the angle of the rotation from this vector to another, in
    /// `[-π, π]`. Counter-clockwise rotations are positive. A zero vector
    /// gives a zero angle.
    pub fn signed_angle(&self, to: &Self) -> Radians {
        angle::signed_atan2(self.cross(to), self.dot(to))
    }

    /// Interpolates linearly between this vector and `to`, with `t` clamped
    /// to `[0, 1]`.
    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        self.lerp_unclamped(to, t.clamp(0.0, 1.0))
    }

    /// Interpolates or extrapolates linearly between this vector and `to`.
    /// `t = 0` gives exactly this vector and `t = 1` exactly `to`.
    pub fn lerp_unclamped(&self, to: &Self, t: f32) -> Self {
        let s = 1.0 - t;
        Self::new(self.x * s + to.x * t, self.y * s + to.y * t)
    }

    /// Computes the projection of this vector onto `onto`. Projecting onto
    /// the zero vector gives the zero vector.
    pub fn project(&self, onto: &Self) -> Self {
        if onto.magnitude() == 0.0 {
            return Self::zeros();
        }
        let direction = onto.normalized();
        direction.scaled(self.dot(&direction))
    }

    /// Returns the vector rescaled to `max_magnitude` if it is longer than
    /// that, or a copy of it otherwise. A negative `max_magnitude` is treated
    /// as zero.
    pub fn clamp_magnitude(&self, max_magnitude: f32) -> Self {
        let max_magnitude = max_magnitude.max(0.0);
        if self.magnitude() > max_magnitude {
            self.normalized().scaled(max_magnitude)
        } else {
            self.clone()
        }
    }

    /// Returns the vector rotated by 90 degrees counter-clockwise.
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Mirrors this vector about the line with the given unit normal.
    pub fn reflect(&self, normal: &Self) -> Self {
        self.component_sub(&normal.scaled(2.0 * self.dot(normal)))
    }

    fn magnitudes(&self) -> Magnitudes {
        self.magnitudes.get_or_compute(&[self.x, self.y])
    }

    fn has_finite_components(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(vector: Vector2) -> Self {
        [vector.x, vector.y]
    }
}

impl_binop!(Add, add, Vector2, Vector2, Vector2, |a, b| {
    a.component_add(b)
});

impl_binop!(Add, add, Vector2, f32, Vector2, |a, b| { a.add_scalar(*b) });

impl_binop!(Sub, sub, Vector2, Vector2, Vector2, |a, b| {
    a.component_sub(b)
});

impl_binop!(Sub, sub, Vector2, f32, Vector2, |a, b| {
    a.subtract_scalar(*b)
});

impl_binop!(Mul, mul, Vector2, Vector2, Vector2, |a, b| {
    a.component_mul(b)
});

impl_binop!(Mul, mul, Vector2, f32, Vector2, |a, b| { a.scaled(*b) });

impl_binop!(Mul, mul, f32, Vector2, Vector2, |a, b| { b.scaled(*a) });

impl_binop!(Div, div, Vector2, Vector2, Vector2, |a, b| {
    a.component_div(b)
});

impl_binop!(Div, div, Vector2, f32, Vector2, |a, b| { a.divided(*b) });

impl_binop_assign!(AddAssign, add_assign, Vector2, Vector2, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.magnitudes.invalidate();
});

impl_binop_assign!(AddAssign, add_assign, Vector2, f32, |a, b| {
    a.x += *b;
    a.y += *b;
    a.magnitudes.invalidate();
});

impl_binop_assign!(SubAssign, sub_assign, Vector2, Vector2, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.magnitudes.invalidate();
});

impl_binop_assign!(SubAssign, sub_assign, Vector2, f32, |a, b| {
    a.x -= *b;
    a.y -= *b;
    a.magnitudes.invalidate();
});

impl_binop_assign!(MulAssign, mul_assign, Vector2, Vector2, |a, b| {
    a.x *= b.x;
    a.y *= b.y;
    a.magnitudes.invalidate();
});

impl_binop_assign!(MulAssign, mul_assign, Vector2, f32, |a, b| {
    a.x *= *b;
    a.y *= *b;
    a.magnitudes.invalidate();
});

impl_binop_assign!(DivAssign, div_assign, Vector2, Vector2, |a, b| {
    a.x /= b.x;
    a.y /= b.y;
    a.magnitudes.invalidate();
});

impl_binop_assign!(DivAssign, div_assign, Vector2, f32, |a, b| {
    a.x /= *b;
    a.y /= *b;
    a.magnitudes.invalidate();
});

impl_unary_op!(Neg, neg, Vector2, Vector2, |val| {
    Vector2::new(-val.x, -val.y)
});

impl_component_cmp!(Vector2, x, y);

impl Index<usize> for Vector2 {
    type Output = f32;

    /// # Panics
    /// If `index` is not 0 or 1. Use [`Vector2::component`] for a fallible
    /// lookup.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("{}", VectorError::IndexOutOfRange { index, dimension: 2 }),
        }
    }
}

impl IndexMut<usize> for Vector2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => self.x_mut(),
            1 => self.y_mut(),
            _ => panic!("{}", VectorError::IndexOutOfRange { index, dimension: 2 }),
        }
    }
}

impl_approx_eq!(Vector2, x, y);

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {} )", self.x, self.y)
    }
}

impl fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}
