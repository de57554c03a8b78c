//! 4-dimensional vectors.

use crate::{
    error::{Result, VectorError},
    magnitude::{MagnitudeCache, Magnitudes},
    vector2::Vector2,
    vector3::Vector3,
};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 4-dimensional vector with a lazily cached magnitude.
///
/// Only supports algebra. There is no cross product or angle in four
/// dimensions without an additional reference vector.
#[derive(Clone, Default)]
pub struct Vector4 {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
    magnitudes: MagnitudeCache,
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            x,
            y,
            z,
            w,
            magnitudes: MagnitudeCache::dirty(),
        }
    }

    /// Creates a new vector whose x- and y-components come from `xy` and
    /// whose z- and w-components come from `zw`.
    #[inline]
    pub const fn from_vector2_pair(xy: &Vector2, zw: &Vector2) -> Self {
        Self::new(xy.x(), xy.y(), zw.x(), zw.y())
    }

    #[inline]
    pub const fn from_vector3_and_w(xyz: &Vector3, w: f32) -> Self {
        Self::new(xyz.x(), xyz.y(), xyz.z(), w)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    #[inline]
    pub const fn ones() -> Self {
        Self::same(1.0)
    }

    #[inline]
    pub const fn negative_infinity() -> Self {
        Self::same(f32::NEG_INFINITY)
    }

    #[inline]
    pub const fn positive_infinity() -> Self {
        Self::same(f32::INFINITY)
    }

    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }

    #[inline]
    pub const fn w(&self) -> f32 {
        self.w
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

    #[inline]
    pub fn set_z(&mut self, z: f32) {
        self.z = z;
        self.magnitudes.invalidate();
    }

    #[inline]
    pub fn set_w(&mut self, w: f32) {
        self.w = w;
        self.magnitudes.invalidate();
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut f32 {
        self.magnitudes.invalidate();
        &mut self.x
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut f32 {
        self.magnitudes.invalidate();
        &mut self.y
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut f32 {
        self.magnitudes.invalidate();
        &mut self.z
    }

    #[inline]
    pub fn w_mut(&mut self) -> &mut f32 {
        self.magnitudes.invalidate();
        &mut self.w
    }

    /// Returns the component at `index` (0 to 3 for x to w).
    ///
    /// # Errors
    /// Returns [`VectorError::IndexOutOfRange`] if `index` is 4 or more.
    pub fn component(&self, index: usize) -> Result<f32> {
        VectorError::check_index(index, 4)?;
        Ok(self[index])
    }

    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub const fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn squared_magnitude(&self) -> f32 {
        self.magnitudes().squared
    }

    pub fn magnitude(&self) -> f32 {
        self.magnitudes().magnitude
    }

    pub fn squared_distance(&self) -> f32 {
        self.squared_magnitude()
    }

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

    pub fn has_cached_magnitude(&self) -> bool {
        !self.magnitudes.is_dirty()
    }

    #[inline]
    pub fn add_scalar(&self, value: f32) -> Self {
        self.map(|component| component + value)
    }

    #[inline]
    pub fn subtract_scalar(&self, value: f32) -> Self {
        self.map(|component| component - value)
    }

    #[inline]
    pub fn scaled(&self, factor: f32) -> Self {
        self.map(|component| component * factor)
    }

    /// Divides each component by `divisor`, following IEEE 754 for a zero
    /// divisor.
    #[inline]
    pub fn divided(&self, divisor: f32) -> Self {
        self.map(|component| component / divisor)
    }

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
        self.zip_map(other, |a, b| a + b)
    }

    #[inline]
    pub fn component_sub(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a - b)
    }

    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a * b)
    }

    #[inline]
    pub fn component_div(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a / b)
    }

    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if any component of `other`
    /// is zero.
    pub fn checked_component_div(&self, other: &Self) -> Result<Self> {
        if [other.x, other.y, other.z, other.w].contains(&0.0) {
            return Err(VectorError::DivisionByZero);
        }
        Ok(self.component_div(other))
    }

    #[inline]
    pub fn component_min(&self, other: &Self) -> Self {
        self.zip_map(other, f32::min)
    }

    #[inline]
    pub fn component_max(&self, other: &Self) -> Self {
        self.zip_map(other, f32::max)
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Interpolates linearly between this vector and `to`, with `t` clamped
    /// to `[0, 1]`.
    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        self.lerp_unclamped(to, t.clamp(0.0, 1.0))
    }

    pub fn lerp_unclamped(&self, to: &Self, t: f32) -> Self {
        let s = 1.0 - t;
        self.zip_map(to, |a, b| a * s + b * t)
    }

    /// Computes the projection of this vector onto `onto`, or the zero
    /// vector if `onto` is zero.
    pub fn project(&self, onto: &Self) -> Self {
        if onto.magnitude() == 0.0 {
            return Self::zeros();
        }
        let direction = onto.normalized();
        direction.scaled(self.dot(&direction))
    }

    fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }

    fn zip_map(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(
            f(self.x, other.x),
            f(self.y, other.y),
            f(self.z, other.z),
            f(self.w, other.w),
        )
    }

    fn magnitudes(&self) -> Magnitudes {
        self.magnitudes.get_or_compute(&[self.x, self.y, self.z, self.w])
    }

    fn has_finite_components(&self) -> bool {
        [self.x, self.y, self.z, self.w].iter().all(|c| c.is_finite())
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        [vector.x, vector.y, vector.z, vector.w]
    }
}

impl_binop!(Add, add, Vector4, Vector4, Vector4, |a, b| {
    a.component_add(b)
});

impl_binop!(Add, add, Vector4, f32, Vector4, |a, b| { a.add_scalar(*b) });

impl_binop!(Sub, sub, Vector4, Vector4, Vector4, |a, b| {
    a.component_sub(b)
});

impl_binop!(Sub, sub, Vector4, f32, Vector4, |a, b| {
    a.subtract_scalar(*b)
});

impl_binop!(Mul, mul, Vector4, Vector4, Vector4, |a, b| {
    a.component_mul(b)
});

impl_binop!(Mul, mul, Vector4, f32, Vector4, |a, b| { a.scaled(*b) });

impl_binop!(Mul, mul, f32, Vector4, Vector4, |a, b| { b.scaled(*a) });

impl_binop!(Div, div, Vector4, Vector4, Vector4, |a, b| {
    a.component_div(b)
});

impl_binop!(Div, div, Vector4, f32, Vector4, |a, b| { a.divided(*b) });

impl_binop_assign!(AddAssign, add_assign, Vector4, Vector4, |a, b| {
    *a = a.component_add(b);
});

impl_binop_assign!(AddAssign, add_assign, Vector4, f32, |a, b| {
    *a = a.add_scalar(*b);
});

impl_binop_assign!(SubAssign, sub_assign, Vector4, Vector4, |a, b| {
    *a = a.component_sub(b);
});

impl_binop_assign!(SubAssign, sub_assign, Vector4, f32, |a, b| {
    *a = a.subtract_scalar(*b);
});

impl_binop_assign!(MulAssign, mul_assign, Vector4, Vector4, |a, b| {
    *a = a.component_mul(b);
});

impl_binop_assign!(MulAssign, mul_assign, Vector4, f32, |a, b| {
    *a = a.scaled(*b);
});

impl_binop_assign!(DivAssign, div_assign, Vector4, Vector4, |a, b| {
    *a = a.component_div(b);
});

impl_binop_assign!(DivAssign, div_assign, Vector4, f32, |a, b| {
    *a = a.divided(*b);
});

impl_unary_op!(Neg, neg, Vector4, Vector4, |val| { val.map(|c| -c) });

impl_component_cmp!(Vector4, x, y, z, w);

impl Index<usize> for Vector4 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("{}", VectorError::IndexOutOfRange { index, dimension: 4 }),
        }
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => self.x_mut(),
            1 => self.y_mut(),
            2 => self.z_mut(),
            3 => self.w_mut(),
            _ => panic!("{}", VectorError::IndexOutOfRange { index, dimension: 4 }),
        }
    }
}

impl_approx_eq!(Vector4, x, y, z, w);

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {}, {}, {} )", self.x, self.y, self.z, self.w)
    }
}

impl fmt::Debug for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector4")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("w", &self.w)
            .finish()
    }
}
