//! Geometry error types
//!
//! Degenerate input is rejected up front rather than letting NaN state leak
//! into a body that downstream physics would silently misbehave on.

use std::fmt;

/// Error type for polygon and mass-property construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Fewer than 3 distinct points were supplied for a hull
    InsufficientVertices(usize),
    /// Hull generation collapsed below 3 vertices (collinear or duplicate
    /// input) or failed to terminate on pathological input
    DegenerateHull,
    /// Mass integration produced a non-positive area (clockwise winding or
    /// a self-intersecting polygon)
    NonPositiveArea(f64),
    /// A constructor argument was out of range
    InvalidArgument(&'static str),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InsufficientVertices(n) => {
                write!(f, "polygon needs at least 3 distinct vertices, got {}", n)
            }
            GeometryError::DegenerateHull => {
                write!(f, "convex hull is degenerate (collinear or duplicate input)")
            }
            GeometryError::NonPositiveArea(area) => {
                write!(f, "polygon area must be positive, got {}", area)
            }
            GeometryError::InvalidArgument(msg) => {
                write!(f, "invalid argument: {}", msg)
            }
        }
    }
}

impl std::error::Error for GeometryError {}
