//! 2D rigid-body physics kernel for rigid2d
//!
//! This crate provides the data model a stepping/solver layer consumes:
//! - Bounding volumes and the broad-phase overlap predicate
//! - Convex polygon geometry (hull generation, normals, mass, AABB)
//! - Rigid body state (position, velocity, mass properties, material)
//!
//! Integration, gravity, narrow-phase contacts and rendering live outside
//! this crate; they read and write [`Body`] state directly each step.

pub mod aabb;
pub mod body;
pub mod error;
pub mod material;
pub mod shapes;

// Re-export commonly used types
pub use aabb::Aabb;
pub use body::Body;
pub use error::GeometryError;
pub use material::Material;
pub use shapes::{MassData, Polygon, Shape, ShapeKind};
