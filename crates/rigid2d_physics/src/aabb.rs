//! Axis-aligned bounding boxes and the broad-phase overlap predicate

use crate::body::Body;
use rigid2d_math::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned bounding box
///
/// `min` is the lower-left vertex, `max` the upper-right. The box stored on
/// a [`Body`] is in body-local (object-rotated) space; world placement is
/// obtained by offsetting with the body's position. Value semantics mean
/// construction always deep-copies the corner vectors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Lower-left vertex
    pub min: Vec2,
    /// Upper-right vertex
    pub max: Vec2,
}

impl Aabb {
    /// Create an AABB from its lower and upper bounds
    #[inline]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Overwrite this box's coordinates from another's
    #[inline]
    pub fn set(&mut self, other: &Aabb) {
        self.min = other.min;
        self.max = other.max;
    }

    /// Check the box invariant
    ///
    /// False when either axis is inverted (`max < min`); otherwise true iff
    /// both vertices are individually valid vectors. A degenerate box whose
    /// corners coincide is valid.
    pub fn is_valid(&self) -> bool {
        if self.max.x - self.min.x < 0.0 {
            return false;
        }
        if self.max.y - self.min.y < 0.0 {
            return false;
        }
        self.min.is_valid() && self.max.is_valid()
    }

    /// Check whether a point lies inside the box, bounds included
    ///
    /// The point must be in the same space as the box.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Translate both vertices in place
    ///
    /// Used to move an object-space box into world space. The component-wise
    /// sums must stay finite.
    pub fn add_offset(&mut self, offset: Vec2) {
        self.min += offset;
        self.max += offset;
        debug_assert!(self.is_valid(), "AABB offset produced non-finite bounds");
    }

    /// Translated copy, leaving `self` untouched
    #[inline]
    pub fn offset(self, delta: Vec2) -> Self {
        let mut out = self;
        out.add_offset(delta);
        out
    }

    /// Closed-interval overlap test between two boxes
    ///
    /// Boxes that merely touch along an edge or corner count as overlapping.
    pub fn overlap(a: &Aabb, b: &Aabb) -> bool {
        a.min.x <= b.max.x && a.max.x >= b.min.x && a.min.y <= b.max.y && a.max.y >= b.min.y
    }

    /// Broad-phase predicate: do two bodies' AABBs overlap in world space?
    ///
    /// Each body's object-space box is copied and translated by that body's
    /// position before testing; neither body's stored box is mutated.
    pub fn bodies_overlap(a: &Body, b: &Body) -> bool {
        let a_world = a.aabb.offset(a.position);
        let b_world = b.aabb.offset(b.position);
        Aabb::overlap(&a_world, &b_world)
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AABB[{} . {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_degenerate_origin_box() {
        let b = Aabb::default();
        assert_eq!(b.min, Vec2::ZERO);
        assert_eq!(b.max, Vec2::ZERO);
        assert!(b.is_valid());
    }

    #[test]
    fn test_set_overwrites_bounds() {
        let src = Aabb::new(Vec2::new(-1.0, -2.0), Vec2::new(3.0, 4.0));
        let mut dst = Aabb::default();
        dst.set(&src);
        assert_eq!(dst, src);
    }

    #[test]
    fn test_validity() {
        assert!(Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)).is_valid());
        // inverted x axis
        assert!(!Aabb::new(Vec2::new(2.0, 0.0), Vec2::new(1.0, 1.0)).is_valid());
        // inverted y axis
        assert!(!Aabb::new(Vec2::new(0.0, 2.0), Vec2::new(1.0, 1.0)).is_valid());
        // non-finite corner
        assert!(!Aabb::new(Vec2::new(f64::NAN, 0.0), Vec2::new(1.0, 1.0)).is_valid());
    }

    #[test]
    fn test_contains_point_both_axes() {
        let b = Aabb::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 2.0));
        assert!(b.contains_point(Vec2::new(0.0, 0.0)));
        assert!(b.contains_point(Vec2::new(-1.0, 2.0))); // corner counts
        assert!(!b.contains_point(Vec2::new(1.5, 0.0)));
        assert!(!b.contains_point(Vec2::new(0.0, -1.5)));
        assert!(!b.contains_point(Vec2::new(0.0, 2.5)));
    }

    #[test]
    fn test_add_offset_translates_both_corners() {
        let mut b = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        b.add_offset(Vec2::new(2.0, -3.0));
        assert_eq!(b.min, Vec2::new(2.0, -3.0));
        assert_eq!(b.max, Vec2::new(3.0, -2.0));
    }

    #[test]
    fn test_offset_leaves_original_untouched() {
        let b = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let moved = b.offset(Vec2::new(5.0, 5.0));
        assert_eq!(b.min, Vec2::ZERO);
        assert_eq!(moved.min, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_overlap_symmetry() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0));
        let b = Aabb::new(Vec2::new(1.0, 1.0), Vec2::new(3.0, 3.0));
        let c = Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(6.0, 6.0));
        assert_eq!(Aabb::overlap(&a, &b), Aabb::overlap(&b, &a));
        assert!(Aabb::overlap(&a, &b));
        assert_eq!(Aabb::overlap(&a, &c), Aabb::overlap(&c, &a));
        assert!(!Aabb::overlap(&a, &c));
    }

    #[test]
    fn test_touching_boxes_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        // shares the x = 1 edge
        let edge = Aabb::new(Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0));
        // shares only the (1, 1) corner
        let corner = Aabb::new(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0));
        assert!(Aabb::overlap(&a, &edge));
        assert!(Aabb::overlap(&a, &corner));

        let separated = Aabb::new(Vec2::new(1.001, 0.0), Vec2::new(2.0, 1.0));
        assert!(!Aabb::overlap(&a, &separated));
    }

    #[test]
    fn test_display() {
        let b = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0));
        assert_eq!(b.to_string(), "AABB[0 : 0 . 1 : 2]");
    }
}
