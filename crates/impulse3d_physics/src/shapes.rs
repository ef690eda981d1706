//! Collision shapes
//!
//! Shapes are pure geometry. They never store a world position; the owning
//! body supplies it at query time.

use crate::collision::{box_vs_box, sphere_vs_box, sphere_vs_sphere, Aabb};
use crate::error::PhysicsError;
use impulse3d_math::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Which kind of primitive a shape is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Box,
    Sphere,
}

/// A box described by its half-extents
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxShape {
    half_extents: Vec3,
}

impl BoxShape {
    /// Create a box; every half-extent must be finite and positive
    pub fn new(half_extents: Vec3) -> Result<Self, PhysicsError> {
        validate_half_extents(half_extents)?;
        Ok(Self { half_extents })
    }

    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    /// Full edge lengths
    pub fn size(&self) -> Vec3 {
        self.half_extents * 2.0
    }

    /// Resize the box
    pub fn set_half_extents(&mut self, half_extents: Vec3) -> Result<(), PhysicsError> {
        validate_half_extents(half_extents)?;
        self.half_extents = half_extents;
        Ok(())
    }

    /// Volume: `8 * hx * hy * hz`
    pub fn volume(&self) -> f32 {
        let h = self.half_extents;
        8.0 * h.x * h.y * h.z
    }

    /// Diagonal inertia of a solid cuboid
    ///
    /// Each axis uses the squares of the other two full extents:
    /// `I_x = m/12 * (h^2 + d^2)` and so on.
    pub fn inertia(&self, mass: f32) -> Vec3 {
        let s = self.size();
        let k = mass / 12.0;
        Vec3::new(
            k * (s.y * s.y + s.z * s.z),
            k * (s.x * s.x + s.z * s.z),
            k * (s.x * s.x + s.y * s.y),
        )
    }
}

/// A sphere described by its radius
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereShape {
    radius: f32,
}

impl SphereShape {
    /// Create a sphere; the radius must be finite and positive
    pub fn new(radius: f32) -> Result<Self, PhysicsError> {
        validate_radius(radius)?;
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Resize the sphere
    pub fn set_radius(&mut self, radius: f32) -> Result<(), PhysicsError> {
        validate_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    /// Volume: `4/3 * pi * r^3`
    pub fn volume(&self) -> f32 {
        4.0 / 3.0 * PI * self.radius.powi(3)
    }

    /// Solid sphere inertia `2/5 * m * r^2` on every axis
    pub fn inertia(&self, mass: f32) -> Vec3 {
        Vec3::splat(0.4 * mass * self.radius * self.radius)
    }
}

fn validate_half_extents(half_extents: Vec3) -> Result<(), PhysicsError> {
    if half_extents.is_finite() && half_extents.min_element() > 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::InvalidShape(format!(
            "box half-extents {:?} must all be > 0",
            half_extents
        )))
    }
}

fn validate_radius(radius: f32) -> Result<(), PhysicsError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::InvalidShape(format!(
            "sphere radius {} must be > 0",
            radius
        )))
    }
}

/// Collision shape owned by a rigid body
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Box(BoxShape),
    Sphere(SphereShape),
}

impl Shape {
    /// Box shape from half-extents
    pub fn cuboid(half_extents: Vec3) -> Result<Self, PhysicsError> {
        BoxShape::new(half_extents).map(Shape::Box)
    }

    /// Sphere shape from a radius
    pub fn sphere(radius: f32) -> Result<Self, PhysicsError> {
        SphereShape::new(radius).map(Shape::Sphere)
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Box(_) => ShapeKind::Box,
            Shape::Sphere(_) => ShapeKind::Sphere,
        }
    }

    pub fn volume(&self) -> f32 {
        match self {
            Shape::Box(b) => b.volume(),
            Shape::Sphere(s) => s.volume(),
        }
    }

    /// Diagonal inertia tensor approximation for the given mass
    pub fn inertia(&self, mass: f32) -> Vec3 {
        match self {
            Shape::Box(b) => b.inertia(mass),
            Shape::Sphere(s) => s.inertia(mass),
        }
    }

    /// Full extent along each axis
    pub fn extents(&self) -> Vec3 {
        match self {
            Shape::Box(b) => b.size(),
            Shape::Sphere(s) => Vec3::splat(s.radius() * 2.0),
        }
    }

    /// World-space bounds when placed at `position`
    pub fn aabb(&self, position: Vec3) -> Aabb {
        Aabb::from_center_half_extents(position, self.extents() * 0.5)
    }

    /// Overlap test against another shape
    ///
    /// Symmetric: `a.intersects(b, pa, pb) == b.intersects(a, pb, pa)`.
    /// The box/sphere case is implemented once and reused for both orders.
    pub fn intersects(&self, other: &Shape, pos_self: Vec3, pos_other: Vec3) -> bool {
        match (self, other) {
            (Shape::Box(a), Shape::Box(b)) => {
                box_vs_box(a.half_extents(), pos_self, b.half_extents(), pos_other)
            }
            (Shape::Sphere(a), Shape::Sphere(b)) => {
                sphere_vs_sphere(a.radius(), pos_self, b.radius(), pos_other)
            }
            (Shape::Sphere(s), Shape::Box(b)) => {
                sphere_vs_box(s.radius(), pos_self, b.half_extents(), pos_other)
            }
            (Shape::Box(_), Shape::Sphere(_)) => other.intersects(self, pos_other, pos_self),
        }
    }
}

impl From<BoxShape> for Shape {
    fn from(shape: BoxShape) -> Self {
        Shape::Box(shape)
    }
}

impl From<SphereShape> for Shape {
    fn from(shape: SphereShape) -> Self {
        Shape::Sphere(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.0001
    }

    #[test]
    fn test_box_volume() {
        let shape = Shape::cuboid(Vec3::new(0.5, 1.0, 2.0)).unwrap();
        // 8 * 0.5 * 1 * 2
        assert!(approx(shape.volume(), 8.0));
    }

    #[test]
    fn test_sphere_volume() {
        let shape = Shape::sphere(2.0).unwrap();
        assert!(approx(shape.volume(), 4.0 / 3.0 * PI * 8.0));
    }

    #[test]
    fn test_box_inertia_uses_full_extents() {
        // Full extents 1 x 2 x 4
        let shape = BoxShape::new(Vec3::new(0.5, 1.0, 2.0)).unwrap();
        let inertia = shape.inertia(12.0);
        assert!(approx(inertia.x, 4.0 + 16.0));
        assert!(approx(inertia.y, 1.0 + 16.0));
        assert!(approx(inertia.z, 1.0 + 4.0));
    }

    #[test]
    fn test_sphere_inertia() {
        let inertia = Shape::sphere(2.0).unwrap().inertia(5.0);
        // 2/5 * 5 * 4 = 8
        assert!(approx(inertia.x, 8.0));
        assert_eq!(inertia.x, inertia.y);
        assert_eq!(inertia.y, inertia.z);
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        assert!(Shape::sphere(0.0).is_err());
        assert!(Shape::sphere(-1.0).is_err());
        assert!(Shape::sphere(f32::NAN).is_err());
        assert!(Shape::cuboid(Vec3::new(1.0, 0.0, 1.0)).is_err());
        assert!(Shape::cuboid(Vec3::new(1.0, 1.0, -1.0)).is_err());
    }

    #[test]
    fn test_resize_setters() {
        let mut sphere = SphereShape::new(1.0).unwrap();
        sphere.set_radius(3.0).unwrap();
        assert_eq!(sphere.radius(), 3.0);
        assert!(sphere.set_radius(0.0).is_err());
        assert_eq!(sphere.radius(), 3.0);

        let mut cuboid = BoxShape::new(Vec3::ONE).unwrap();
        cuboid.set_half_extents(Vec3::new(2.0, 1.0, 0.5)).unwrap();
        assert_eq!(cuboid.size(), Vec3::new(4.0, 2.0, 1.0));
        assert!(cuboid.set_half_extents(Vec3::ZERO).is_err());
    }

    #[test]
    fn test_kind_and_extents() {
        let sphere = Shape::sphere(0.5).unwrap();
        assert_eq!(sphere.kind(), ShapeKind::Sphere);
        assert_eq!(sphere.extents(), Vec3::ONE);

        let cuboid = Shape::cuboid(Vec3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(cuboid.kind(), ShapeKind::Box);
        assert_eq!(cuboid.aabb(Vec3::ZERO).max, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_box_box_intersects() {
        let unit = Shape::cuboid(Vec3::splat(0.5)).unwrap();
        assert!(unit.intersects(&unit, Vec3::ZERO, Vec3::new(0.5, 0.0, 0.0)));
        assert!(!unit.intersects(&unit, Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn test_sphere_sphere_inclusive_boundary() {
        let unit = Shape::sphere(1.0).unwrap();
        assert!(unit.intersects(&unit, Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)));
        assert!(!unit.intersects(&unit, Vec3::ZERO, Vec3::new(2.0001, 0.0, 0.0)));
    }

    #[test]
    fn test_box_sphere_symmetric() {
        let cuboid = Shape::cuboid(Vec3::splat(1.0)).unwrap();
        let sphere = Shape::sphere(0.5).unwrap();
        let box_pos = Vec3::ZERO;

        for sphere_pos in [
            Vec3::new(1.4, 0.0, 0.0),
            Vec3::new(1.6, 0.0, 0.0),
            Vec3::new(0.0, -1.5, 0.0),
            Vec3::splat(1.3),
        ] {
            assert_eq!(
                sphere.intersects(&cuboid, sphere_pos, box_pos),
                cuboid.intersects(&sphere, box_pos, sphere_pos),
                "asymmetric result at {:?}",
                sphere_pos
            );
        }

        assert!(cuboid.intersects(&sphere, box_pos, Vec3::new(1.4, 0.0, 0.0)));
        assert!(!cuboid.intersects(&sphere, box_pos, Vec3::new(1.6, 0.0, 0.0)));
    }
}
