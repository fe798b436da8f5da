//! Rigid body state

use crate::aabb::Aabb;
use crate::error::GeometryError;
use crate::material::Material;
use crate::shapes::{MassData, Shape};
use log::debug;
use rigid2d_math::Vec2;

/// A 2D rigid body: the unit the rest of a simulation operates on
///
/// Fields are public by design; the stepping layer reads and writes them
/// directly each step (apply gravity, integrate, clear forces). The methods
/// below are the sanctioned mutation entry points beyond that.
///
/// Mass invariant: `mass`, `inertia` and their inverses are non-negative,
/// and the inverses are exactly zero when the body is static (infinite
/// effective mass).
#[derive(Clone, Debug)]
pub struct Body {
    /// Position in world space
    pub position: Vec2,
    /// Linear velocity (units per second)
    pub velocity: Vec2,
    /// Force accumulated since the last integration step; the integrator
    /// clears it
    pub force: Vec2,

    /// Angular velocity (radians per second)
    pub angular_velocity: f64,
    /// Torque accumulated since the last integration step
    pub torque: f64,
    /// Orientation in radians
    pub orientation: f64,

    pub mass: f64,
    pub inv_mass: f64,
    /// Moment of inertia about the centre of mass
    pub inertia: f64,
    pub inv_inertia: f64,

    /// Bounce coefficient consumed by the narrow-phase solver
    pub restitution: f64,
    pub static_friction: f64,
    pub dynamic_friction: f64,
    pub linear_dampening: f64,
    pub angular_dampening: f64,

    pub affected_by_gravity: bool,
    /// Particles skip rotational response in the solver
    pub particle: bool,

    /// The collision shape, in centroid-relative object space once bound
    pub shape: Shape,
    /// Object-space bounding box; world placement adds `position`
    pub aabb: Aabb,
}

impl Body {
    /// Bind a shape to a new body at a world position
    ///
    /// Zeroes all kinematic state, applies the default material, orients
    /// the shape at angle 0, computes mass properties at density 1 (which
    /// recenters the shape's vertices onto its centroid) and the initial
    /// bounding box.
    pub fn new(shape: Shape, x: f64, y: f64) -> Result<Self, GeometryError> {
        let mut shape = shape;
        shape.set_orientation(0.0);
        let mass_data = shape.calc_mass(1.0)?;
        let aabb = shape.create_aabb();

        let material = Material::default();
        Ok(Self {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            angular_velocity: 0.0,
            torque: 0.0,
            orientation: 0.0,
            mass: mass_data.mass,
            inv_mass: mass_data.inv_mass,
            inertia: mass_data.inertia,
            inv_inertia: mass_data.inv_inertia,
            restitution: material.restitution,
            static_friction: material.static_friction,
            dynamic_friction: material.dynamic_friction,
            linear_dampening: 0.0,
            angular_dampening: 0.0,
            affected_by_gravity: true,
            particle: false,
            shape,
            aabb,
        })
    }

    /// Set the velocity of this body
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the material of this body
    pub fn with_material(mut self, material: Material) -> Self {
        self.set_material(&material);
        self
    }

    /// Set whether this body is affected by gravity
    pub fn with_gravity(mut self, affected: bool) -> Self {
        self.affected_by_gravity = affected;
        self
    }

    /// Mark this body as a particle
    pub fn with_particle(mut self, particle: bool) -> Self {
        self.particle = particle;
        self
    }

    /// Recompute mass at the given density (builder form of
    /// [`Body::set_density`])
    pub fn with_density(mut self, density: f64) -> Result<Self, GeometryError> {
        self.set_density(density)?;
        Ok(self)
    }

    /// Accumulate a force applied at a contact point relative to the centre
    /// of mass, in object space
    ///
    /// The off-centre application also accumulates torque.
    pub fn apply_force(&mut self, force: Vec2, contact_point: Vec2) {
        self.force += force;
        self.torque += contact_point.cross(force);
    }

    /// Accumulate a force through the centre of mass (no torque)
    pub fn apply_force_to_centre(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Instantaneously change velocity by an impulse applied at a contact
    /// point relative to the centre of mass
    pub fn apply_linear_impulse(&mut self, impulse: Vec2, contact_point: Vec2) {
        self.velocity += impulse * self.inv_mass;
        self.angular_velocity += self.inv_inertia * contact_point.cross(impulse);
    }

    /// Instantaneously change velocity by an impulse through the centre of
    /// mass; angular velocity is untouched
    pub fn apply_linear_impulse_to_centre(&mut self, impulse: Vec2) {
        self.velocity += impulse * self.inv_mass;
    }

    /// Rewrite the orientation, re-orient the shape and regenerate the
    /// object-space bounding box
    pub fn set_orientation(&mut self, radians: f64) {
        self.orientation = radians;
        self.shape.set_orientation(radians);
        self.aabb = self.shape.create_aabb();
    }

    /// Recompute mass properties at the given density
    ///
    /// A density of zero or below forces a static body instead of reaching
    /// the mass formula.
    pub fn set_density(&mut self, density: f64) -> Result<(), GeometryError> {
        if density > 0.0 {
            let mass_data = self.shape.calc_mass(density)?;
            self.set_mass_data(mass_data);
        } else {
            debug!("non-positive density {density}, forcing static body");
            self.set_static();
        }
        Ok(())
    }

    /// Zero all mass and inertia terms; the body can no longer be moved by
    /// forces or impulses
    pub fn set_static(&mut self) {
        self.set_mass_data(MassData::STATIC);
    }

    /// True when the body has infinite effective mass
    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0 && self.inv_inertia == 0.0
    }

    /// Copy a material's coefficients onto this body
    pub fn set_material(&mut self, material: &Material) {
        self.restitution = material.restitution;
        self.static_friction = material.static_friction;
        self.dynamic_friction = material.dynamic_friction;
    }

    fn set_mass_data(&mut self, mass_data: MassData) {
        self.mass = mass_data.mass;
        self.inv_mass = mass_data.inv_mass;
        self.inertia = mass_data.inertia;
        self.inv_inertia = mass_data.inv_inertia;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Polygon;

    const EPSILON: f64 = 1e-9;

    fn rect_body(half_width: f64, half_height: f64, x: f64, y: f64) -> Body {
        let poly = Polygon::rectangle(half_width, half_height).unwrap();
        Body::new(Shape::polygon(poly), x, y).unwrap()
    }

    #[test]
    fn test_new_body_defaults() {
        let body = rect_body(2.0, 1.0, 3.0, -4.0);

        assert_eq!(body.position, Vec2::new(3.0, -4.0));
        assert!(body.velocity.is_zero());
        assert!(body.force.is_zero());
        assert_eq!(body.angular_velocity, 0.0);
        assert_eq!(body.torque, 0.0);
        assert_eq!(body.orientation, 0.0);

        assert_eq!(body.restitution, 0.8);
        assert_eq!(body.static_friction, 0.5);
        assert_eq!(body.dynamic_friction, 0.2);
        assert_eq!(body.linear_dampening, 0.0);
        assert_eq!(body.angular_dampening, 0.0);

        assert!(body.affected_by_gravity);
        assert!(!body.particle);
        assert!(!body.is_static());

        // Density 1: 2x1 half-extent rectangle has area 8.
        assert!((body.mass - 8.0).abs() < EPSILON);
        assert!((body.inv_mass - 1.0 / 8.0).abs() < EPSILON);
        assert!(body.inertia > 0.0);

        // Initial AABB covers the unrotated rectangle in object space.
        assert!((body.aabb.min.x + 2.0).abs() < EPSILON);
        assert!((body.aabb.max.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_apply_force_accumulates() {
        let mut body = rect_body(1.0, 1.0, 0.0, 0.0);
        body.apply_force_to_centre(Vec2::new(1.0, 2.0));
        body.apply_force_to_centre(Vec2::new(0.5, -1.0));
        assert_eq!(body.force, Vec2::new(1.5, 1.0));
        assert_eq!(body.torque, 0.0);

        // Off-centre force adds torque = r x F.
        let r = Vec2::new(0.0, 1.0);
        let f = Vec2::new(3.0, 0.0);
        body.apply_force(f, r);
        assert_eq!(body.force, Vec2::new(4.5, 1.0));
        assert!((body.torque - r.cross(f)).abs() < EPSILON);
        assert!((body.torque + 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_impulse_to_centre_scales_by_inv_mass() {
        let mut body = rect_body(2.0, 1.0, 0.0, 0.0); // mass 8
        let impulse = Vec2::new(16.0, -8.0);
        body.apply_linear_impulse_to_centre(impulse);
        assert!((body.velocity.x - 2.0).abs() < EPSILON);
        assert!((body.velocity.y + 1.0).abs() < EPSILON);
        assert_eq!(body.angular_velocity, 0.0);
    }

    #[test]
    fn test_offset_impulse_spins_body() {
        let mut body = rect_body(1.0, 1.0, 0.0, 0.0);
        let impulse = Vec2::new(1.0, 0.0);
        let contact = Vec2::new(0.0, 1.0);
        body.apply_linear_impulse(impulse, contact);
        assert!((body.velocity.x - impulse.x * body.inv_mass).abs() < EPSILON);
        let expected_spin = body.inv_inertia * contact.cross(impulse);
        assert!((body.angular_velocity - expected_spin).abs() < EPSILON);
        assert!(body.angular_velocity < 0.0);
    }

    #[test]
    fn test_impulses_ignored_on_static_body() {
        let mut body = rect_body(1.0, 1.0, 0.0, 0.0);
        body.set_static();
        body.apply_linear_impulse(Vec2::new(100.0, 100.0), Vec2::new(0.0, 1.0));
        assert!(body.velocity.is_zero());
        assert_eq!(body.angular_velocity, 0.0);
    }

    #[test]
    fn test_set_orientation_regenerates_aabb() {
        let mut body = rect_body(2.0, 1.0, 0.0, 0.0);
        body.set_orientation(std::f64::consts::FRAC_PI_2);
        assert_eq!(body.orientation, std::f64::consts::FRAC_PI_2);
        // Quarter turn swaps the box extents.
        assert!((body.aabb.min.x + 1.0).abs() < EPSILON);
        assert!((body.aabb.min.y + 2.0).abs() < EPSILON);
        assert!((body.aabb.max.x - 1.0).abs() < EPSILON);
        assert!((body.aabb.max.y - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_set_density_rescales_mass() {
        let mut body = rect_body(2.0, 1.0, 0.0, 0.0);
        body.set_density(3.0).unwrap();
        assert!((body.mass - 24.0).abs() < EPSILON);
        assert!((body.inv_mass - 1.0 / 24.0).abs() < EPSILON);
        assert!(!body.is_static());
    }

    #[test]
    fn test_non_positive_density_forces_static() {
        for density in [0.0, -1.0, -100.0] {
            let mut body = rect_body(1.0, 1.0, 0.0, 0.0);
            body.set_density(density).unwrap();
            assert_eq!(body.mass, 0.0);
            assert_eq!(body.inv_mass, 0.0);
            assert_eq!(body.inertia, 0.0);
            assert_eq!(body.inv_inertia, 0.0);
            assert!(body.is_static());
        }
    }

    #[test]
    fn test_builder_methods() {
        let poly = Polygon::regular(1.0, 5).unwrap();
        let body = Body::new(Shape::polygon(poly), 0.0, 0.0)
            .unwrap()
            .with_velocity(Vec2::new(1.0, 2.0))
            .with_gravity(false)
            .with_particle(true)
            .with_material(Material::RUBBER);

        assert_eq!(body.velocity, Vec2::new(1.0, 2.0));
        assert!(!body.affected_by_gravity);
        assert!(body.particle);
        assert_eq!(body.restitution, Material::RUBBER.restitution);
    }

    #[test]
    fn test_set_material() {
        let mut body = rect_body(1.0, 1.0, 0.0, 0.0);
        body.set_material(&Material::ICE);
        assert_eq!(body.static_friction, Material::ICE.static_friction);
        assert_eq!(body.dynamic_friction, Material::ICE.dynamic_friction);
        assert_eq!(body.restitution, Material::ICE.restitution);
    }
}
