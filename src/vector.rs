//! Small fixed-size vector algebra used by the plane transform pipeline.
//!
//! [`Vector`] is generic over its component count, with [`Vec2`], [`Vec3`] and [`Vec4`]
//! aliases for the sizes the rest of the crate works with. Everything that can divide by
//! zero or index past the end returns a [`VectorError`] instead of panicking. The
//! perspective [`Vec3::project`] helpers are the exception: their denominator is clamped,
//! so they are total.
//!
//! # Examples
//!
//! ```
//! use quadplane::{Vec2, Vec3, VectorError};
//!
//! let a = Vec2::xy(3.0, 4.0);
//! assert_eq!(a.magnitude(), 5.0);
//! assert_eq!(a.checked_div(0.0), Err(VectorError::DivisionByZero));
//!
//! // A point one unit "behind" the screen is drawn at half size.
//! let projected = Vec3::xyz(10.0, 20.0, 1.0).project();
//! assert_eq!(projected, Vec2::xy(5.0, 10.0));
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use thiserror::Error;

/// Smallest denominator the perspective divide is allowed to use.
pub const PROJECTION_EPSILON: f32 = 0.001;

/// Errors produced by fallible vector operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    /// The divisor was zero, or contained a zero component.
    #[error("division by zero")]
    DivisionByZero,
    /// A component index past the end of the vector was requested.
    #[error("component index {index} is out of range for a vector of {len} components")]
    IndexOutOfRange { index: usize, len: usize },
}

/// An `N`-component `f32` vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<const N: usize>(pub [f32; N]);

pub type Vec2 = Vector<2>;
pub type Vec3 = Vector<3>;
pub type Vec4 = Vector<4>;

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> Vector<N> {
    pub const fn new(components: [f32; N]) -> Self {
        Self(components)
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self([value; N])
    }

    pub const fn zero() -> Self {
        Self::splat(0.0)
    }

    pub const fn one() -> Self {
        Self::splat(1.0)
    }

    pub fn components(&self) -> &[f32; N] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Result<f32, VectorError> {
        self.0
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange { index, len: N })
    }

    pub fn set(&mut self, index: usize, value: f32) -> Result<(), VectorError> {
        let slot = self
            .0
            .get_mut(index)
            .ok_or(VectorError::IndexOutOfRange { index, len: N })?;
        *slot = value;
        Ok(())
    }

    /// Applies `f` to every component.
    pub fn map(self, f: impl FnMut(f32) -> f32) -> Self {
        Self(self.0.map(f))
    }

    fn zip_with(self, other: Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
        let mut out = self.0;
        for (component, rhs) in out.iter_mut().zip(other.0) {
            *component = f(*component, rhs);
        }
        Self(out)
    }

    pub fn abs(self) -> Self {
        self.map(f32::abs)
    }

    pub fn min(self, other: Self) -> Self {
        self.zip_with(other, f32::min)
    }

    pub fn max(self, other: Self) -> Self {
        self.zip_with(other, f32::max)
    }

    /// Component-wise clamp. Bounds are not validated; `lo > hi` yields `hi`.
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    pub fn mul_components(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a * b)
    }

    pub fn checked_div(self, divisor: f32) -> Result<Self, VectorError> {
        if divisor == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(self.map(|component| component / divisor))
    }

    /// Component-wise divide. Fails if any component of `divisor` is zero.
    pub fn checked_div_components(self, divisor: Self) -> Result<Self, VectorError> {
        if divisor.0.iter().any(|component| *component == 0.0) {
            return Err(VectorError::DivisionByZero);
        }
        Ok(self.zip_with(divisor, |a, b| a / b))
    }

    pub fn dot(self, other: Self) -> f32 {
        self.0.iter().zip(other.0).map(|(a, b)| a * b).sum()
    }

    pub fn magnitude_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn magnitude(self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Unit vector in the same direction. A zero vector has no direction and fails.
    pub fn normalize(self) -> Result<Self, VectorError> {
        self.checked_div(self.magnitude())
    }

    /// Linear interpolation, `t = 0` gives `self` and `t = 1` gives `other`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Vec2 {
    pub const fn xy(x: f32, y: f32) -> Self {
        Self([x, y])
    }

    pub fn x(&self) -> f32 {
        self.0[0]
    }

    pub fn y(&self) -> f32 {
        self.0[1]
    }

    pub fn with_x(mut self, x: f32) -> Self {
        self.0[0] = x;
        self
    }

    pub fn with_y(mut self, y: f32) -> Self {
        self.0[1] = y;
        self
    }

    pub fn extend(self, z: f32) -> Vec3 {
        Vec3::xyz(self.x(), self.y(), z)
    }
}

impl Vec3 {
    pub const fn xyz(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }

    pub fn x(&self) -> f32 {
        self.0[0]
    }

    pub fn y(&self) -> f32 {
        self.0[1]
    }

    pub fn z(&self) -> f32 {
        self.0[2]
    }

    pub fn with_x(mut self, x: f32) -> Self {
        self.0[0] = x;
        self
    }

    pub fn with_y(mut self, y: f32) -> Self {
        self.0[1] = y;
        self
    }

    pub fn with_z(mut self, z: f32) -> Self {
        self.0[2] = z;
        self
    }

    /// Drops the z component.
    pub fn truncate(self) -> Vec2 {
        Vec2::xy(self.x(), self.y())
    }

    pub fn cross(self, other: Self) -> Self {
        Self::xyz(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }

    /// Weak perspective divide with an implicit focal length of 1.
    ///
    /// `(x, y)` is divided by `max(z + 1, PROJECTION_EPSILON)`, so points at `z = 0` are
    /// unchanged and no value of `z` can produce a zero or negative denominator.
    pub fn project(self) -> Vec2 {
        let depth = (self.z() + 1.0).max(PROJECTION_EPSILON);
        Vec2::xy(self.x() / depth, self.y() / depth)
    }

    /// Perspective divide with an explicit focal length.
    ///
    /// Depth is clamped to the near plane at `-focal_length + PROJECTION_EPSILON`.
    pub fn project_with_focal(self, focal_length: f32) -> Vec2 {
        let near = -focal_length + PROJECTION_EPSILON;
        let z = if self.z() <= near { near } else { self.z() };
        let scale = focal_length / (z + focal_length);
        Vec2::xy(self.x() * scale, self.y() * scale)
    }

    /// Rotates around X, then Y, then Z by the given angles in radians.
    ///
    /// The axes are applied one after another, each step reading the components written by
    /// the previous one.
    pub fn rotate(self, angles: Vec3) -> Self {
        let [mut x, mut y, mut z] = self.0;

        let (sin, cos) = angles.x().sin_cos();
        (y, z) = (y * cos - z * sin, y * sin + z * cos);

        let (sin, cos) = angles.y().sin_cos();
        (x, z) = (x * cos + z * sin, -x * sin + z * cos);

        let (sin, cos) = angles.z().sin_cos();
        (x, y) = (x * cos - y * sin, x * sin + y * cos);

        Self([x, y, z])
    }
}

impl Vec4 {
    pub const fn xyzw(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<const N: usize> AddAssign for Vector<N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<const N: usize> SubAssign for Vector<N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|component| -component)
    }
}

impl<const N: usize> Mul<f32> for Vector<N> {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        self.map(|component| component * rhs)
    }
}

impl<const N: usize> Mul<Vector<N>> for f32 {
    type Output = Vector<N>;

    fn mul(self, rhs: Vector<N>) -> Self::Output {
        rhs * self
    }
}

impl<const N: usize> Mul for Vector<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_components(rhs)
    }
}

impl<const N: usize> MulAssign<f32> for Vector<N> {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    fn from(value: [f32; N]) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<Vector<N>> for [f32; N] {
    fn from(value: Vector<N>) -> Self {
        value.0
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from(value: (f32, f32)) -> Self {
        Self::xy(value.0, value.1)
    }
}

impl From<(f32, f32, f32)> for Vec3 {
    fn from(value: (f32, f32, f32)) -> Self {
        Self::xyz(value.0, value.1, value.2)
    }
}

impl From<Vec2> for lyon::math::Point {
    fn from(value: Vec2) -> Self {
        lyon::math::point(value.x(), value.y())
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vec(")?;
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{component}")?;
        }
        write!(f, ")")
    }
}
