//! 2D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// 2D vector with x, y components
///
/// The kernel works in `f64` throughout. A vector is *valid* when both
/// components are finite (not NaN, not infinite) and *zero* when both
/// components are exactly `0.0`.
///
/// Two flavours of API are provided and both are part of the contract:
/// value-producing operations through the arithmetic operators and methods
/// like [`Vec2::normalized`], and in-place operations like
/// [`Vec2::normalize`] and [`Vec2::negate`] which mutate the receiver and
/// return `&mut Self` for chaining.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0 };

    /// Create a new Vec2
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Construct a unit direction vector from an angle in radians
    #[inline]
    pub fn from_angle(direction: f64) -> Self {
        Self::new(direction.cos(), direction.sin())
    }

    /// Overwrite both components in place
    #[inline]
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Overwrite this vector with another's components in place
    #[inline]
    pub fn set_vec(&mut self, v: Vec2) -> &mut Self {
        self.x = v.x;
        self.y = v.y;
        self
    }

    /// Negate both components in place
    ///
    /// The value-producing counterpart is the unary `-` operator.
    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Euclidean distance to another vector
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Squared distance to another vector
    #[inline]
    pub fn distance_squared(self, other: Self) -> f64 {
        (self - other).length_squared()
    }

    /// Normalize to unit length in place
    ///
    /// A zero vector is left unchanged: the divisor is treated as 1 rather
    /// than producing NaN. This is the documented degenerate-case policy,
    /// not an error.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let mut d = self.length();
        if d == 0.0 {
            d = 1.0;
        }
        self.x /= d;
        self.y /= d;
        self
    }

    /// Return a unit-length copy, leaving `self` untouched
    ///
    /// Shares the zero-vector policy of [`Vec2::normalize`].
    #[inline]
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    /// Scalar 2D cross product: `x * other.y - y * other.x`
    ///
    /// The sign is the signed parallelogram area, positive when `other` is
    /// counter-clockwise of `self`.
    #[inline]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Vector cross with a scalar: `normal() * s`
    ///
    /// Turns an angular quantity into a linear one.
    #[inline]
    pub fn cross_scalar(self, s: f64) -> Self {
        self.normal() * s
    }

    /// Perpendicular vector `(-y, x)`
    #[inline]
    pub fn normal(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Cross product of a vector and a scalar: `(s * a.y, -s * a.x)`
    ///
    /// Not symmetric with [`Vec2::cross_sv`]; the two sign conventions
    /// encode different physical conversions (torque to velocity vs
    /// velocity to torque) and solvers rely on both.
    #[inline]
    pub fn cross_vs(a: Vec2, s: f64) -> Self {
        Self::new(s * a.y, -s * a.x)
    }

    /// Cross product of a scalar and a vector: `(-s * a.y, s * a.x)`
    #[inline]
    pub fn cross_sv(s: f64, a: Vec2) -> Self {
        Self::new(-s * a.y, s * a.x)
    }

    /// True when both components are finite (not NaN, not infinite)
    #[inline]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// True when both components are exactly zero
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Allocate `n` independent zero vectors
    ///
    /// # Panics
    ///
    /// Panics when `n` is zero; an empty vector array is an invalid
    /// argument for every caller in the kernel.
    pub fn create_array(n: usize) -> Vec<Vec2> {
        assert!(n > 0, "vector array length must be positive");
        vec![Vec2::ZERO; n]
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    #[inline]
    fn mul(self, vec: Vec2) -> Vec2 {
        vec * self
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.x, self.y)
    }
}
