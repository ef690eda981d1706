//! Overlap tests between collision primitives
//!
//! Shapes never store a world position, so every test here takes the
//! positions of both participants explicitly. Boxes are always treated as
//! axis-aligned; body orientation is ignored. All comparisons are inclusive:
//! touching counts as overlapping.

use crate::body::BodyKey;
use impulse3d_math::Vec3;

/// An axis-aligned bounding box in world space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum corner (all components are minimums)
    pub min: Vec3,
    /// Maximum corner (all components are maximums)
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a position with given half-extents
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Check whether two boxes overlap on all three axes
    ///
    /// Per axis: `min_a <= max_b && max_a >= min_b`.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Check if a point is inside or on the AABB
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Get the closest point inside or on the AABB to a given point
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp_components(self.min, self.max)
    }
}

/// A pair of bodies whose shapes overlap, in sweep order (`a` was added first)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactPair {
    pub a: BodyKey,
    pub b: BodyKey,
}

/// Test box vs box overlap
pub fn box_vs_box(half_a: Vec3, pos_a: Vec3, half_b: Vec3, pos_b: Vec3) -> bool {
    let a = Aabb::from_center_half_extents(pos_a, half_a);
    let b = Aabb::from_center_half_extents(pos_b, half_b);
    a.overlaps(&b)
}

/// Test sphere vs sphere overlap
///
/// Spheres whose centers are exactly `r_a + r_b` apart are overlapping.
pub fn sphere_vs_sphere(r_a: f32, pos_a: Vec3, r_b: f32, pos_b: Vec3) -> bool {
    pos_a.distance(pos_b) <= r_a + r_b
}

/// Test sphere vs box overlap
///
/// Clamps the sphere center into the box to find the closest point on the
/// box, then compares that distance against the radius.
pub fn sphere_vs_box(radius: f32, sphere_pos: Vec3, half_extents: Vec3, box_pos: Vec3) -> bool {
    let aabb = Aabb::from_center_half_extents(box_pos, half_extents);
    let closest = aabb.closest_point(sphere_pos);
    sphere_pos.distance(closest) <= radius
}
