//! 2x2 rotation matrix

use crate::Vec2;
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 2x2 rotation matrix stored as two row vectors
///
/// The default value is the ZERO matrix, not identity; callers that need
/// the identity rotation construct with [`Mat2::from_angle`] at angle 0.
///
/// A matrix built from an angle `t` holds
/// `row1 = (cos t, -sin t)`, `row2 = (sin t, cos t)` and rotates column
/// vectors counter-clockwise by `t`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat2 {
    pub row1: Vec2,
    pub row2: Vec2,
}

impl Mat2 {
    pub const ZERO: Self = Self {
        row1: Vec2::ZERO,
        row2: Vec2::ZERO,
    };

    /// Create the zero matrix
    #[inline]
    pub const fn new() -> Self {
        Self::ZERO
    }

    /// Create a rotation matrix for an angle in radians
    #[inline]
    pub fn from_angle(radians: f64) -> Self {
        let mut m = Self::ZERO;
        m.set_angle(radians);
        m
    }

    /// Overwrite this matrix with the rotation for an angle in radians
    pub fn set_angle(&mut self, radians: f64) {
        let c = radians.cos();
        let s = radians.sin();
        self.row1.x = c;
        self.row1.y = -s;
        self.row2.x = s;
        self.row2.y = c;
    }

    /// Overwrite this matrix with another's rows
    #[inline]
    pub fn set(&mut self, m: &Mat2) {
        self.row1 = m.row1;
        self.row2 = m.row2;
    }

    /// Transposed copy
    ///
    /// For a proper rotation matrix (orthonormal rows) the transpose is the
    /// rotational inverse.
    pub fn transpose(&self) -> Mat2 {
        Mat2 {
            row1: Vec2::new(self.row1.x, self.row2.x),
            row2: Vec2::new(self.row1.y, self.row2.y),
        }
    }

    /// Apply the matrix to a vector, producing a new vector
    #[inline]
    pub fn mul(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.row1.x * v.x + self.row1.y * v.y,
            self.row2.x * v.x + self.row2.y * v.y,
        )
    }

    /// Apply the matrix to a vector in place
    ///
    /// The borrow rules make it impossible for `v` to alias the matrix's
    /// own row storage.
    #[inline]
    pub fn mul_in_place(&self, v: &mut Vec2) {
        *v = self.mul(*v);
    }
}

impl fmt::Display for Mat2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : {}\n{} : {}",
            self.row1.x, self.row1.y, self.row2.x, self.row2.y
        )
    }
}
