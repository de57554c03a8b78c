//! 3-dimensional vectors.

use crate::{
    angle::{self, Radians},
    error::{Result, VectorError},
    magnitude::{MagnitudeCache, Magnitudes},
    vector2::Vector2,
    vector4::Vector4,
};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 3-dimensional vector.
///
/// Uses a right-handed convention for the named axes: x is right, y is up
/// and z is front, so the cross product of right and up is front.
///
/// Like [`Vector2`], the magnitude is computed lazily and cached until the
/// components change.
#[derive(Clone, Default)]
pub struct Vector3 {
    x: f32,
    y: f32,
    z: f32,
    magnitudes: MagnitudeCache,
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            magnitudes: MagnitudeCache::dirty(),
        }
    }

    /// Creates a new vector with the given x- and y-components and a zero
    /// z-component.
    #[inline]
    pub const fn from_xy(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Creates a new vector in the xy-plane from a 2D vector.
    #[inline]
    pub const fn from_vector2(xy: &Vector2) -> Self {
        Self::from_vector2_and_z(xy, 0.0)
    }

    #[inline]
    pub const fn from_vector2_and_z(xy: &Vector2, z: f32) -> Self {
        Self::new(xy.x(), xy.y(), z)
    }

    /// Creates a new vector whose y- and z-components are the components
    /// of the given 2D vector.
    #[inline]
    pub const fn from_x_and_yz(x: f32, yz: &Vector2) -> Self {
        Self::new(x, yz.x(), yz.y())
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value)
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

    #[inline]
    pub const fn left() -> Self {
        Self::new(-1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn right() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn up() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub const fn down() -> Self {
        Self::new(0.0, -1.0, 0.0)
    }

    #[inline]
    pub const fn front() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn back() -> Self {
        Self::new(0.0, 0.0, -1.0)
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

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
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

    /// A mutable reference to the z-component. The cached magnitude is
    /// discarded up front.
    #[inline]
    pub fn z_mut(&mut self) -> &mut f32 {
        self.magnitudes.invalidate();
        &mut self.z
    }

    /// Returns the component at `index` (0 for x, 1 for y, 2 for z).
    ///
    /// # Errors
    /// Returns [`VectorError::IndexOutOfRange`] if `index` is 3 or more.
    pub fn component(&self, index: usize) -> Result<f32> {
        VectorError::check_index(index, 3)?;
        Ok(self[index])
    }

    /// The 2D vector containing the x- and y-components of this vector.
    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: f32) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
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
    /// magnitude.
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

    /// Whether the magnitude is currently cached.
    pub fn has_cached_magnitude(&self) -> bool {
        !self.magnitudes.is_dirty()
    }

    /// Adds `value` to each component.
    #[inline]
    pub fn add_scalar(&self, value: f32) -> Self {
        Self::new(self.x + value, self.y + value, self.z + value)
    }

    /// Subtracts `value` from each component.
    #[inline]
    pub fn subtract_scalar(&self, value: f32) -> Self {
        Self::new(self.x - value, self.y - value, self.z - value)
    }

    /// Multiplies each component by `factor`.
    #[inline]
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Divides each component by `divisor`, following IEEE 754 for a zero
    /// divisor.
    #[inline]
    pub fn divided(&self, divisor: f32) -> Self {
        Self::new(self.x / divisor, self.y / divisor, self.z / divisor)
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
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    #[inline]
    pub fn component_sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Divides each component by the corresponding component in another
    /// vector, following IEEE 754 for zero divisors.
    #[inline]
    pub fn component_div(&self, other: &Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }

    /// Divides each component by the corresponding component in another
    /// vector.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if any component of `other`
    /// is zero.
    pub fn checked_component_div(&self, other: &Self) -> Result<Self> {
        if other.x == 0.0 || other.y == 0.0 || other.z == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(self.component_div(other))
    }

    #[inline]
    pub fn component_min(&self, other: &Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    #[inline]
    pub fn component_max(&self, other: &Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
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

    /// Computes the angle of the rotation from this vector to `to`, in
    /// `[-π, π]`. The sign is positive when the rotation is counter-clockwise
    /// seen from the tip of `axis`, i.e. when `self × to` points along
    /// `axis`.
    pub fn signed_angle(&self, to: &Self, axis: &Self) -> Radians {
        angle::signed_atan2(self.cross(to).dot(axis), self.dot(to))
    }

    /// Interpolates linearly between this vector and `to`, with `t` clamped
    /// to `[0, 1]`.
    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        self.lerp_unclamped(to, t.clamp(0.0, 1.0))
    }

    /// Interpolates or extrapolates linearly between this vector and `to`.
    pub fn lerp_unclamped(&self, to: &Self, t: f32) -> Self {
        let s = 1.0 - t;
        Self::new(
            self.x * s + to.x * t,
            self.y * s + to.y * t,
            self.z * s + to.z * t,
        )
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

    /// Computes the projection of this vector onto the plane through the
    /// origin with the given normal. The normal need not be normalized.
    pub fn project_on_plane(&self, plane_normal: &Self) -> Self {
        self.component_sub(&self.project(plane_normal))
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

    /// Returns a unit vector perpendicular to this one, or the zero vector
    /// if this vector is zero. The result is the normalized cross product
    /// with the coordinate axis least aligned with this vector.
    pub fn perpendicular(&self) -> Self {
        let (abs_x, abs_y, abs_z) = (self.x.abs(), self.y.abs(), self.z.abs());
        let axis = if abs_x <= abs_y && abs_x <= abs_z {
            Self::right()
        } else if abs_y <= abs_z {
            Self::up()
        } else {
            Self::front()
        };
        self.cross(&axis).normalized()
    }

    /// Mirrors this vector about the plane with the given unit normal.
    pub fn reflect(&self, normal: &Self) -> Self {
        self.component_sub(&normal.scaled(2.0 * self.dot(normal)))
    }

    /// Makes `normal` unit length, and makes `tangent` unit length and
    /// orthogonal to it, returning the two in that order.
    ///
    /// A tangent parallel to the normal comes out as the zero vector.
    pub fn ortho_normalize(normal: &Self, tangent: &Self) -> (Self, Self) {
        let normal = normal.normalized();
        let tangent = Self::gram_schmidt_step(tangent, &[&normal], "tangent");
        (normal, tangent)
    }

    /// Like [`Self::ortho_normalize`], but also makes `binormal` unit length
    /// and orthogonal to both the normal and the tangent. Returns the
    /// normal, tangent and binormal in that order.
    pub fn ortho_normalize_with_binormal(
        normal: &Self,
        tangent: &Self,
        binormal: &Self,
    ) -> (Self, Self, Self) {
        let (normal, tangent) = Self::ortho_normalize(normal, tangent);
        let binormal = Self::gram_schmidt_step(binormal, &[&normal, &tangent], "binormal");
        (normal, tangent, binormal)
    }

    /// Subtracts the projections onto each of the given orthonormal vectors
    /// and normalizes what is left.
    fn gram_schmidt_step(vector: &Self, orthonormal: &[&Self], name: &str) -> Self {
        let residual = orthonormal
            .iter()
            .fold(vector.clone(), |residual, basis_vector| {
                residual.component_sub(&vector.project(basis_vector))
            });
        if residual.magnitude() == 0.0 {
            log::trace!("Orthonormalization left the {name} with zero magnitude");
        }
        residual.normalized()
    }

    fn magnitudes(&self) -> Magnitudes {
        self.magnitudes.get_or_compute(&[self.x, self.y, self.z])
    }

    fn has_finite_components(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    a.component_add(b)
});

impl_binop!(Add, add, Vector3, f32, Vector3, |a, b| { a.add_scalar(*b) });

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    a.component_sub(b)
});

impl_binop!(Sub, sub, Vector3, f32, Vector3, |a, b| {
    a.subtract_scalar(*b)
});

impl_binop!(Mul, mul, Vector3, Vector3, Vector3, |a, b| {
    a.component_mul(b)
});

impl_binop!(Mul, mul, Vector3, f32, Vector3, |a, b| { a.scaled(*b) });

impl_binop!(Mul, mul, f32, Vector3, Vector3, |a, b| { b.scaled(*a) });

impl_binop!(Div, div, Vector3, Vector3, Vector3, |a, b| {
    a.component_div(b)
});

impl_binop!(Div, div, Vector3, f32, Vector3, |a, b| { a.divided(*b) });

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector3, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
    a.magnitudes.invalidate();
});

impl_binop_assign!(AddAssign, add_assign, Vector3, f32, |a, b| {
    a.x += *b;
    a.y += *b;
    a.z += *b;
    a.magnitudes.invalidate();
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector3, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
    a.magnitudes.invalidate();
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, f32, |a, b| {
    a.x -= *b;
    a.y -= *b;
    a.z -= *b;
    a.magnitudes.invalidate();
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, Vector3, |a, b| {
    a.x *= b.x;
    a.y *= b.y;
    a.z *= b.z;
    a.magnitudes.invalidate();
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, f32, |a, b| {
    a.x *= *b;
    a.y *= *b;
    a.z *= *b;
    a.magnitudes.invalidate();
});

impl_binop_assign!(DivAssign, div_assign, Vector3, Vector3, |a, b| {
    a.x /= b.x;
    a.y /= b.y;
    a.z /= b.z;
    a.magnitudes.invalidate();
});

impl_binop_assign!(DivAssign, div_assign, Vector3, f32, |a, b| {
    a.x /= *b;
    a.y /= *b;
    a.z /= *b;
    a.magnitudes.invalidate();
});

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::new(-val.x, -val.y, -val.z)
});

impl_component_cmp!(Vector3, x, y, z);

impl Index<usize> for Vector3 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("{}", VectorError::IndexOutOfRange { index, dimension: 3 }),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => self.x_mut(),
            1 => self.y_mut(),
            2 => self.z_mut(),
            _ => panic!("{}", VectorError::IndexOutOfRange { index, dimension: 3 }),
        }
    }
}

impl_approx_eq!(Vector3, x, y, z);

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {}, {} )", self.x, self.y, self.z)
    }
}

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector3")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::{abs_diff_eq, assert_abs_diff_eq};
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPSILON: f32 = 1e-6;

    prop_compose! {
        fn vector3_strategy(max_abs: f32)(
            x in -max_abs..max_abs,
            y in -max_abs..max_abs,
            z in -max_abs..max_abs,
        ) -> Vector3 {
            Vector3::new(x, y, z)
        }
    }

    #[test]
    fn computing_vector3_magnitude_works() {
        let v = Vector3::new(2.0, 3.0, 6.0);
        assert_abs_diff_eq!(v.magnitude(), 7.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.squared_magnitude(), 49.0, epsilon = EPSILON);
        assert!(v.has_cached_magnitude());
    }

    #[test]
    fn mutating_vector3_component_invalidates_cached_magnitude() {
        let mut v = Vector3::new(2.0, 3.0, 6.0);
        assert_abs_diff_eq!(v.magnitude(), 7.0, epsilon = EPSILON);

        v.set_z(0.0);
        assert_abs_diff_eq!(v.squared_magnitude(), 13.0, epsilon = EPSILON);

        *v.z_mut() = 4.0;
        assert_abs_diff_eq!(v.squared_magnitude(), 29.0, epsilon = EPSILON);

        v[1] = 0.0;
        assert_abs_diff_eq!(v.squared_magnitude(), 20.0, epsilon = EPSILON);

        v = Vector3::new(1.0, 0.0, 0.0);
        assert!(!v.has_cached_magnitude());
        assert_abs_diff_eq!(v.magnitude(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn compound_assignment_invalidates_vector3_cached_magnitude() {
        let mut v = Vector3::new(1.0, 2.0, 2.0);
        assert_abs_diff_eq!(v.magnitude(), 3.0, epsilon = EPSILON);

        v += Vector3::new(1.0, 2.0, 2.0);
        assert_abs_diff_eq!(v.magnitude(), 6.0, epsilon = EPSILON);

        v /= 2.0;
        assert_abs_diff_eq!(v.magnitude(), 3.0, epsilon = EPSILON);

        v -= 1.0;
        assert_abs_diff_eq!(v.squared_magnitude(), 2.0, epsilon = EPSILON);
    }

    #[test]
    fn normalizing_vector3_gives_unit_vector() {
        let normalized = Vector3::new(2.0, 3.0, 6.0).normalized();
        assert_abs_diff_eq!(normalized.magnitude(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(
            normalized,
            Vector3::new(2.0 / 7.0, 3.0 / 7.0, 6.0 / 7.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn normalizing_zero_vector3_gives_zero_with_dirty_and_clean_cache() {
        assert_eq!(Vector3::zeros().normalized(), Vector3::zeros());

        let clean = Vector3::zeros();
        clean.squared_magnitude();
        assert_eq!(clean.normalized(), Vector3::zeros());
    }

    #[test]
    fn constructing_vector3_from_vector2_works() {
        let xy = Vector2::new(1.5, -2.0);

        let v = Vector3::from_vector2_and_z(&xy, 7.25);
        assert_eq!((v.x(), v.y(), v.z()), (1.5, -2.0, 7.25));

        assert_eq!(Vector3::from_vector2(&xy), Vector3::new(1.5, -2.0, 0.0));
        assert_eq!(Vector3::from_xy(1.5, -2.0), Vector3::new(1.5, -2.0, 0.0));
        assert_eq!(Vector3::from_x_and_yz(3.0, &xy), Vector3::new(3.0, 1.5, -2.0));
        assert_eq!(v.xy(), xy);
    }

    #[test]
    fn extending_vector3_to_vector4_works() {
        let v = Vector3::new(1.0, 2.0, 3.0).extended(4.0);
        assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn vector3_constants_have_expected_components() {
        assert_eq!(Vector3::default(), Vector3::zeros());
        assert_eq!(Vector3::ones(), Vector3::same(1.0));
        assert_eq!(Vector3::right().cross(&Vector3::up()), Vector3::front());
        assert_eq!(Vector3::back(), -Vector3::front());
        assert_eq!(Vector3::left(), -Vector3::right());
        assert_eq!(Vector3::down(), -Vector3::up());
        assert!(Vector3::negative_infinity().z().is_infinite());
    }

    #[test]
    fn vector3_component_access_works() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.component(2), Ok(3.0));
        assert_eq!(
            v.component(3),
            Err(VectorError::IndexOutOfRange {
                index: 3,
                dimension: 3
            })
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn indexing_vector3_out_of_range_panics() {
        let _ = Vector3::zeros()[3];
    }

    #[test]
    fn vector3_operators_work() {
        let a = Vector3::new(1.0, -2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, -6.0);

        assert_eq!(&a + &b, Vector3::new(5.0, 3.0, -3.0));
        assert_eq!(&a - &b, Vector3::new(-3.0, -7.0, 9.0));
        assert_eq!(&a * &b, Vector3::new(4.0, -10.0, -18.0));
        assert_eq!(&a * 2.0, Vector3::new(2.0, -4.0, 6.0));
        assert_eq!(&a + 1.0, Vector3::new(2.0, -1.0, 4.0));
        assert_eq!(&a / 2.0, Vector3::new(0.5, -1.0, 1.5));
        assert_eq!(a.component_min(&b), Vector3::new(1.0, -2.0, -6.0));
        assert_eq!(a.component_max(&b), Vector3::new(4.0, 5.0, 3.0));
        assert_eq!(-a, Vector3::new(-1.0, 2.0, -3.0));
    }

    #[test]
    fn dividing_vector3_by_zero_follows_ieee_unless_checked() {
        let v = Vector3::new(1.0, 0.0, -1.0);
        let divided = &v / 0.0;
        assert_eq!(divided.x(), f32::INFINITY);
        assert!(divided.y().is_nan());
        assert_eq!(divided.z(), f32::NEG_INFINITY);

        assert_eq!(v.checked_divided(0.0), Err(VectorError::DivisionByZero));
        assert_eq!(
            v.checked_component_div(&Vector3::new(1.0, 1.0, 0.0)),
            Err(VectorError::DivisionByZero)
        );
        assert_eq!(
            v.checked_component_div(&Vector3::new(2.0, 1.0, 4.0)),
            Ok(Vector3::new(0.5, 0.0, -0.25))
        );
    }

    #[test]
    fn vector3_angle_works() {
        let angle = Vector3::right().angle(&Vector3::new(1.0, 1.0, 0.0)).unwrap();
        assert_abs_diff_eq!(angle, Radians(FRAC_PI_4), epsilon = EPSILON);
        assert_eq!(
            Vector3::right().angle(&Vector3::zeros()),
            Err(VectorError::UndefinedAngle)
        );
    }

    #[test]
    fn vector3_signed_angle_from_right_to_up_about_back_is_minus_quarter_turn() {
        let angle = Vector3::right().signed_angle(&Vector3::up(), &Vector3::back());
        assert_abs_diff_eq!(angle, Radians(-FRAC_PI_2), epsilon = EPSILON);
        assert_abs_diff_eq!(angle.degrees(), -90.0, epsilon = 1e-4);
    }

    #[test]
    fn vector3_signed_angle_handles_other_configurations() {
        let right = Vector3::right();

        let about_own_normal = right.signed_angle(&Vector3::up(), &Vector3::up());
        assert_eq!(about_own_normal, Radians(0.0));

        let clockwise = right.signed_angle(&Vector3::down(), &Vector3::back());
        assert_abs_diff_eq!(clockwise, Radians(FRAC_PI_2), epsilon = EPSILON);

        let opposite = right.signed_angle(&Vector3::left(), &Vector3::up());
        assert_abs_diff_eq!(opposite, Radians(PI), epsilon = EPSILON);

        let diagonal = right.signed_angle(&Vector3::new(1.0, 1.0, 0.0), &Vector3::back());
        assert_abs_diff_eq!(diagonal, Radians(-FRAC_PI_4), epsilon = EPSILON);
    }

    #[test]
    fn vector3_lerp_works() {
        let a = Vector3::new(0.1, 0.2, 0.3);
        let b = Vector3::new(-0.7, 1.1, 9.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 2.0), b);
        assert_eq!(a.lerp(&b, -2.0), a);

        let extrapolated = Vector3::zeros().lerp_unclamped(&Vector3::ones(), 3.0);
        assert_abs_diff_eq!(extrapolated, Vector3::same(3.0), epsilon = EPSILON);
    }

    #[test]
    fn vector3_project_and_project_on_plane_work() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let normal = Vector3::new(0.0, 0.0, 5.0);

        assert_abs_diff_eq!(v.project(&normal), Vector3::new(0.0, 0.0, 3.0), epsilon = EPSILON);
        assert_abs_diff_eq!(
            v.project_on_plane(&normal),
            Vector3::new(1.0, 2.0, 0.0),
            epsilon = EPSILON
        );
        assert_eq!(v.project(&Vector3::zeros()), Vector3::zeros());
        assert_eq!(v.project_on_plane(&Vector3::zeros()), v);
    }

    #[test]
    fn vector3_clamp_magnitude_only_shortens() {
        let v = Vector3::new(0.0, 3.0, 4.0);
        assert_abs_diff_eq!(v.clamp_magnitude(1.0), Vector3::new(0.0, 0.6, 0.8), epsilon = EPSILON);
        assert_eq!(v.clamp_magnitude(5.0), v);
    }

    #[test]
    fn vector3_reflect_works() {
        let reflected = Vector3::new(1.0, -1.0, 2.0).reflect(&Vector3::up());
        assert_eq!(reflected, Vector3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn vector3_perpendicular_is_orthogonal_unit_vector() {
        for v in [
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-5.0, 0.1, 0.0),
            Vector3::front(),
        ] {
            let perpendicular = v.perpendicular();
            assert_abs_diff_eq!(perpendicular.dot(&v), 0.0, epsilon = 1e-5);
            assert_abs_diff_eq!(perpendicular.magnitude(), 1.0, epsilon = EPSILON);
        }
        assert_eq!(Vector3::zeros().perpendicular(), Vector3::zeros());
    }

    #[test]
    fn ortho_normalizing_two_vectors_works() {
        let (normal, tangent) =
            Vector3::ortho_normalize(&Vector3::new(0.0, 2.0, 0.0), &Vector3::new(1.0, 1.0, 0.0));
        assert_abs_diff_eq!(normal, Vector3::up(), epsilon = EPSILON);
        assert_abs_diff_eq!(tangent, Vector3::right(), epsilon = EPSILON);
    }

    #[test]
    fn ortho_normalizing_three_vectors_gives_orthonormal_basis() {
        let (normal, tangent, binormal) = Vector3::ortho_normalize_with_binormal(
            &Vector3::new(1.0, 1.0, 0.0),
            &Vector3::new(0.0, 1.0, 1.0),
            &Vector3::new(1.0, 0.0, 1.0),
        );
        for v in [&normal, &tangent, &binormal] {
            assert_abs_diff_eq!(v.magnitude(), 1.0, epsilon = 1e-5);
        }
        assert_abs_diff_eq!(normal.dot(&tangent), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(normal.dot(&binormal), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(tangent.dot(&binormal), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(
            normal,
            Vector3::new(1.0, 1.0, 0.0).normalized(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn ortho_normalizing_parallel_tangent_gives_zero_tangent() {
        let (normal, tangent) =
            Vector3::ortho_normalize(&Vector3::front(), &Vector3::new(0.0, 0.0, -3.0));
        assert_eq!(normal, Vector3::front());
        assert_eq!(tangent, Vector3::zeros());
    }

    #[test]
    fn ordering_vector3_is_lexicographic() {
        assert!(Vector3::new(0.0, 9.0, 9.0) < Vector3::new(1.0, 0.0, 0.0));
        assert!(Vector3::new(1.0, 1.0, 0.0) > Vector3::new(1.0, 0.0, 5.0));
        assert!(Vector3::new(1.0, 1.0, 2.0) > Vector3::new(1.0, 1.0, 1.0));
        assert!(Vector3::new(1.0, 1.0, 1.0) <= Vector3::new(1.0, 1.0, 1.0));
        assert_ne!(Vector3::new(1.0, 1.0, 1.0), Vector3::new(1.0, 1.0, 1.000_001));
    }

    #[test]
    fn formatting_vector3_works() {
        assert_eq!(Vector3::new(0.0, 1.0, -2.5).to_string(), "( 0, 1, -2.5 )");
    }

    #[test]
    fn vector3_angle_with_itself_is_exactly_zero_when_cosine_rounds_above_one() {
        let v = Vector3::new(1.0, 1.0, 4.0);
        assert!(v.dot(&v) / (v.magnitude() * v.magnitude()) > 1.0);
        assert_eq!(v.angle(&v), Ok(Radians(0.0)));
    }

    #[test]
    fn vector3_with_large_finite_components_has_finite_magnitude() {
        let v = Vector3::new(2e19, 0.0, 0.0);
        assert_eq!(v.magnitude(), 2e19);
        assert_eq!(v.normalized(), Vector3::right());
        assert_abs_diff_eq!(v.normalized().magnitude(), 1.0, epsilon = EPSILON);
        assert_eq!(v.clamp_magnitude(1.0), Vector3::right());
        assert_eq!(v.angle(&v), Ok(Radians(0.0)));
        assert_abs_diff_eq!(
            v.angle(&Vector3::up()).unwrap(),
            Radians(FRAC_PI_2),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Vector3::new(1.0, 2.0, 3.0).project(&v),
            Vector3::right(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn normalizing_vector3_with_overflowing_magnitude_gives_unit_vector() {
        let v = Vector3::new(f32::MAX, -f32::MAX, f32::MAX);
        assert!(v.magnitude().is_infinite());
        assert_abs_diff_eq!(v.normalized().magnitude(), 1.0, epsilon = 1e-5);
        assert!(v.angle(&v).is_ok());
    }

    #[test]
    fn vector3_with_tiny_components_normalizes_to_unit_vector() {
        let v = Vector3::new(3e-30, 0.0, 4e-30);
        assert!(v.magnitude() > 0.0);
        assert_abs_diff_eq!(v.normalized(), Vector3::new(0.6, 0.0, 0.8), epsilon = 1e-5);
    }

    #[test]
    fn vector3_angle_with_non_finite_vector_is_undefined() {
        assert_eq!(
            Vector3::negative_infinity().angle(&Vector3::up()),
            Err(VectorError::UndefinedAngle)
        );
        assert_eq!(
            Vector3::new(f32::NAN, 0.0, 1.0).angle(&Vector3::up()),
            Err(VectorError::UndefinedAngle)
        );
    }

    #[test]
    fn clamping_vector3_to_negative_magnitude_gives_zero() {
        assert_eq!(
            Vector3::new(0.0, 3.0, 4.0).clamp_magnitude(-2.0),
            Vector3::zeros()
        );
    }

    proptest! {
        #[test]
        fn normalized_vector3_has_unit_magnitude(v in vector3_strategy(1e3)) {
            prop_assume!(v.magnitude() > 1e-3);
            prop_assert!(abs_diff_eq!(v.normalized().magnitude(), 1.0, epsilon = 1e-5));
        }

        #[test]
        fn vector3_magnitude_reflects_mutation(v in vector3_strategy(1e3), z in -1e3_f32..1e3) {
            let mut v = v;
            v.magnitude();
            v.set_z(z);
            let fresh = Vector3::new(v.x(), v.y(), z);
            prop_assert_eq!(v.magnitude().to_bits(), fresh.magnitude().to_bits());
        }

        #[test]
        fn normalized_large_vector3_has_unit_magnitude(v in vector3_strategy(1e30)) {
            prop_assume!(v.magnitude() > 0.0);
            prop_assert!(abs_diff_eq!(v.normalized().magnitude(), 1.0, epsilon = 1e-5));
        }

        #[test]
        fn vector3_dot_product_is_commutative(a in vector3_strategy(1e3), b in vector3_strategy(1e3)) {
            prop_assert_eq!(a.dot(&b), b.dot(&a));
        }

        #[test]
        fn vector3_cross_product_is_anticommutative(a in vector3_strategy(1e3), b in vector3_strategy(1e3)) {
            prop_assert_eq!(a.cross(&b), -b.cross(&a));
        }

        #[test]
        fn vector3_angle_is_clamped_for_parallel_vectors(v in vector3_strategy(1e3), scale in 0.1_f32..10.0) {
            prop_assume!(v.magnitude() > 1e-3);
            let parallel = v.angle(&v.scaled(scale)).unwrap();
            prop_assert!(!parallel.is_nan());
            prop_assert!(abs_diff_eq!(parallel.radians(), 0.0, epsilon = 2e-3));

            let antiparallel = v.angle(&v.scaled(-scale)).unwrap();
            prop_assert!(!antiparallel.is_nan());
            prop_assert!(abs_diff_eq!(antiparallel.radians(), PI, epsilon = 2e-3));
        }

        #[test]
        fn vector3_lerp_hits_endpoints_exactly(a in vector3_strategy(1e3), b in vector3_strategy(1e3)) {
            prop_assert_eq!(a.lerp(&b, 0.0), a.clone());
            prop_assert_eq!(a.lerp(&b, 1.0), b.clone());
        }
    }
}
