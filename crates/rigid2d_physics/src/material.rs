//! Physical material properties for collision response

use serde::{Deserialize, Serialize};

/// Surface coefficients copied onto a [`Body`](crate::Body)
///
/// Restitution governs energy retention in collisions; the two friction
/// coefficients are consumed by the narrow-phase solver (static while
/// surfaces grip, dynamic once they slide).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub restitution: f64,
    pub static_friction: f64,
    pub dynamic_friction: f64,
}

impl Default for Material {
    /// The body defaults: bouncy and moderately rough
    fn default() -> Self {
        Self {
            restitution: 0.8,
            static_friction: 0.5,
            dynamic_friction: 0.2,
        }
    }
}

impl Material {
    /// Rubber-like: very bouncy, high grip
    pub const RUBBER: Self = Self {
        restitution: 0.8,
        static_friction: 0.9,
        dynamic_friction: 0.6,
    };

    /// Wood-like: low bounce, moderate grip
    pub const WOOD: Self = Self {
        restitution: 0.2,
        static_friction: 0.5,
        dynamic_friction: 0.3,
    };

    /// Metal-like: some bounce, slick once sliding
    pub const METAL: Self = Self {
        restitution: 0.3,
        static_friction: 0.3,
        dynamic_friction: 0.15,
    };

    /// Ice-like: almost frictionless
    pub const ICE: Self = Self {
        restitution: 0.1,
        static_friction: 0.05,
        dynamic_friction: 0.02,
    };

    /// Create a material with custom coefficients, clamped to `[0, 1]`
    pub fn new(restitution: f64, static_friction: f64, dynamic_friction: f64) -> Self {
        Self {
            restitution: restitution.clamp(0.0, 1.0),
            static_friction: static_friction.clamp(0.0, 1.0),
            dynamic_friction: dynamic_friction.clamp(0.0, 1.0),
        }
    }
}
