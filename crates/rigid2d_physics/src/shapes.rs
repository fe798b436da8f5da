//! Collision shapes
//!
//! A [`Shape`] pairs a shape variant with its orientation matrix. The only
//! variant implemented today is the convex [`Polygon`]; the closed enum is
//! the extension point for future variants (circle, capsule, ...).

use crate::aabb::Aabb;
use crate::error::GeometryError;
use rigid2d_math::{Mat2, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Mass properties produced by a shape's mass integration
///
/// `inv_mass` and `inv_inertia` are exactly zero when the corresponding
/// quantity is zero (the static-body convention for infinite effective
/// mass).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MassData {
    pub mass: f64,
    pub inv_mass: f64,
    pub inertia: f64,
    pub inv_inertia: f64,
}

impl MassData {
    /// Mass data of a static body: everything exactly zero
    pub const STATIC: Self = Self {
        mass: 0.0,
        inv_mass: 0.0,
        inertia: 0.0,
        inv_inertia: 0.0,
    };

    /// Build mass data from raw mass and area moment, deriving the inverses
    pub fn new(mass: f64, inertia: f64) -> Self {
        Self {
            mass,
            inv_mass: if mass != 0.0 { 1.0 / mass } else { 0.0 },
            inertia,
            inv_inertia: if inertia != 0.0 { 1.0 / inertia } else { 0.0 },
        }
    }
}

/// Convex polygon in object space
///
/// Vertices are wound counter-clockwise with one outward unit normal per
/// edge; `normals[i]` belongs to the edge from `vertices[i]` to
/// `vertices[(i + 1) % n]`. Both arrays always hold at least 3 entries.
///
/// Vertices are only guaranteed to be centroid-relative after a mass
/// computation has run: [`Polygon::recenter`] relocates the local origin to
/// the centre of mass found by [`Polygon::mass_data`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Vec2>,
    pub normals: Vec<Vec2>,
}

impl Polygon {
    /// Build a polygon as the convex hull of the supplied points
    ///
    /// Interior points are discarded. Fails when fewer than 3 points are
    /// supplied or the hull degenerates (collinear or duplicate input).
    pub fn from_vertices(points: &[Vec2]) -> Result<Self, GeometryError> {
        let vertices = generate_hull(points)?;
        let mut poly = Self {
            vertices,
            normals: Vec::new(),
        };
        poly.calc_normals();
        Ok(poly)
    }

    /// Build a rectangle from half-extents
    ///
    /// The four vertices are `(±half_width, ±half_height)` with
    /// axis-aligned normals; no hull step is needed.
    pub fn rectangle(half_width: f64, half_height: f64) -> Result<Self, GeometryError> {
        if half_width <= 0.0 || half_height <= 0.0 {
            return Err(GeometryError::InvalidArgument(
                "rectangle extents must be positive",
            ));
        }
        Ok(Self {
            vertices: vec![
                Vec2::new(-half_width, -half_height),
                Vec2::new(half_width, -half_height),
                Vec2::new(half_width, half_height),
                Vec2::new(-half_width, half_height),
            ],
            normals: vec![
                Vec2::new(0.0, -1.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(0.0, 1.0),
                Vec2::new(-1.0, 0.0),
            ],
        })
    }

    /// Build a regular polygon with `sides` vertices on a circle of
    /// `radius` around the origin
    ///
    /// Vertices sit at equal angular steps with a fixed starting offset of
    /// 0.75 of one step, which keeps demo scenes visually stable across
    /// regenerations.
    pub fn regular(radius: f64, sides: usize) -> Result<Self, GeometryError> {
        if sides < 3 {
            return Err(GeometryError::InvalidArgument(
                "regular polygon needs at least 3 sides",
            ));
        }
        if radius <= 0.0 {
            return Err(GeometryError::InvalidArgument("radius must be positive"));
        }
        let step = 2.0 * PI / sides as f64;
        let vertices: Vec<Vec2> = (0..sides)
            .map(|i| {
                let angle = step * (i as f64 + 0.75);
                Vec2::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        let mut poly = Self {
            vertices,
            normals: Vec::new(),
        };
        poly.calc_normals();
        Ok(poly)
    }

    /// Number of vertices (equals the number of edges and normals)
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Recompute the outward unit normal of every edge
    ///
    /// For counter-clockwise winding the perpendicular of an edge direction
    /// points into the polygon, so it is negated to face outward. The sign
    /// is load-bearing: a flipped normal reverses collision response in the
    /// narrow phase.
    pub fn calc_normals(&mut self) {
        let n = self.vertices.len();
        self.normals.clear();
        self.normals.reserve(n);
        for i in 0..n {
            let face = self.vertices[(i + 1) % n] - self.vertices[i];
            let mut normal = face.normal();
            normal.normalize().negate();
            self.normals.push(normal);
        }
    }

    /// Integrate mass properties for a uniform density
    ///
    /// The polygon is decomposed into triangles fanned from the local
    /// origin; each edge contributes a signed triangle area, a weighted
    /// centroid term and a second-moment term. Returns the mass data and
    /// the centroid the vertices must be re-expressed against; callers go
    /// through [`Shape::calc_mass`] which also performs the recentering.
    ///
    /// Fails when the accumulated area is not positive, which means the
    /// winding is clockwise or the polygon is degenerate. Densities `<= 0`
    /// must never reach this formula; static bodies are zeroed instead.
    pub fn mass_data(&self, density: f64) -> Result<(MassData, Vec2), GeometryError> {
        debug_assert!(density > 0.0, "non-positive density takes the static path");

        let n = self.vertices.len();
        let k = 1.0 / 3.0;
        let mut centroid = Vec2::ZERO;
        let mut area = 0.0;
        let mut second_moment = 0.0;

        for i in 0..n {
            let p1 = self.vertices[i];
            let p2 = self.vertices[(i + 1) % n];

            let parallelogram_area = p1.cross(p2);
            let triangle_area = 0.5 * parallelogram_area;
            area += triangle_area;

            // Each triangle's centroid is (p1 + p2 + origin) / 3, weighted
            // by its signed area.
            let weight = triangle_area * k;
            centroid += p1 * weight;
            centroid += p2 * weight;

            let int_x2 = p1.x * p1.x + p2.x * p1.x + p2.x * p2.x;
            let int_y2 = p1.y * p1.y + p2.y * p1.y + p2.y * p2.y;
            second_moment += (0.25 * k * parallelogram_area) * (int_x2 + int_y2);
        }

        if area <= 0.0 {
            return Err(GeometryError::NonPositiveArea(area));
        }

        let centroid = centroid * (1.0 / area);
        Ok((MassData::new(density * area, density * second_moment), centroid))
    }

    /// Translate every vertex so the given centroid becomes the local origin
    pub fn recenter(&mut self, centroid: Vec2) {
        for v in &mut self.vertices {
            *v -= centroid;
        }
    }

    /// Compute a bounding box for the polygon under the given orientation
    ///
    /// Rotation only; translation into world space is the body's job at
    /// broad-phase time.
    pub fn create_aabb(&self, orient: &Mat2) -> Aabb {
        let first = orient.mul(self.vertices[0]);
        let mut min = first;
        let mut max = first;
        for v in &self.vertices[1..] {
            let p = orient.mul(*v);
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Aabb::new(min, max)
    }
}

/// The closed set of shape variants
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    Polygon(Polygon),
}

/// A shape variant together with its orientation
///
/// The orientation starts as the zero matrix; binding the shape to a
/// [`Body`](crate::Body) orients it before any mass or AABB computation.
/// Mass and bounding-box results are returned to the caller rather than
/// written through a back-pointer, so shape and body form a plain
/// ownership chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub orient: Mat2,
    pub kind: ShapeKind,
}

impl Shape {
    /// Wrap a polygon in a shape with an unset (zero) orientation
    pub fn polygon(polygon: Polygon) -> Self {
        Self {
            orient: Mat2::new(),
            kind: ShapeKind::Polygon(polygon),
        }
    }

    /// Point the orientation matrix at an angle in radians
    #[inline]
    pub fn set_orientation(&mut self, radians: f64) {
        self.orient.set_angle(radians);
    }

    /// Compute mass properties at the given density
    ///
    /// Side effect: the shape's vertices are re-expressed relative to the
    /// computed centroid, so they are centroid-relative from here on.
    pub fn calc_mass(&mut self, density: f64) -> Result<MassData, GeometryError> {
        match &mut self.kind {
            ShapeKind::Polygon(poly) => {
                let (mass_data, centroid) = poly.mass_data(density)?;
                poly.recenter(centroid);
                Ok(mass_data)
            }
        }
    }

    /// Compute a fresh object-space bounding box under the current
    /// orientation
    pub fn create_aabb(&self) -> Aabb {
        match &self.kind {
            ShapeKind::Polygon(poly) => poly.create_aabb(&self.orient),
        }
    }
}

/// Gift-wrapping (Jarvis march) convex hull
///
/// Anchors at the minimum-x vertex and repeatedly advances to the most
/// counter-clockwise candidate until the anchor is revisited, yielding the
/// counter-clockwise boundary starting from the anchor. O(n * h) for h
/// hull vertices, which is fine at the vertex counts bodies carry.
fn generate_hull(points: &[Vec2]) -> Result<Vec<Vec2>, GeometryError> {
    if points.len() < 3 {
        return Err(GeometryError::InsufficientVertices(points.len()));
    }

    let mut first = 0;
    let mut min_x = f64::MAX;
    for (i, p) in points.iter().enumerate() {
        if p.x < min_x {
            min_x = p.x;
            first = i;
        }
    }

    let mut hull = Vec::new();
    let mut point = first;
    loop {
        hull.push(points[point]);
        // Guards duplicate-heavy input that would otherwise cycle forever.
        if hull.len() > points.len() {
            return Err(GeometryError::DegenerateHull);
        }

        let mut candidate = (point + 1) % points.len();
        for i in 0..points.len() {
            if side_of_line(points[point], points[i], points[candidate]) < 0.0 {
                candidate = i;
            }
        }
        point = candidate;
        if point == first {
            break;
        }
    }

    if hull.len() < 3 {
        return Err(GeometryError::DegenerateHull);
    }

    // Collinear input walks every point without a left turn, producing a
    // zero-area boundary; the signed area check rejects it.
    let mut doubled_area = 0.0;
    for i in 0..hull.len() {
        doubled_area += hull[i].cross(hull[(i + 1) % hull.len()]);
    }
    if doubled_area <= 0.0 {
        return Err(GeometryError::DegenerateHull);
    }
    Ok(hull)
}

/// Orientation test: positive when `point` is right of the line `p1 -> p2`,
/// negative when left, zero when collinear
fn side_of_line(p1: Vec2, p2: Vec2, point: Vec2) -> f64 {
    (p2.y - p1.y) * (point.x - p2.x) - (p2.x - p1.x) * (point.y - p2.y)
}
