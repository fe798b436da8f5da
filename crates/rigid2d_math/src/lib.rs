//! 2D Mathematics Library
//!
//! This crate provides the small linear-algebra kernel the rigid2d physics
//! crate is built on.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components
//! - [`Mat2`] - 2x2 rotation matrix built from an angle

mod mat2;
mod vec2;

pub use mat2::Mat2;
pub use vec2::Vec2;
