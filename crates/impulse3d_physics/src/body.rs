//! Rigid body types

use crate::error::PhysicsError;
use crate::material::Material;
use crate::shapes::Shape;
use impulse3d_math::Vec3;
use slotmap::new_key_type;

// Define generational key type for rigid bodies
new_key_type! {
    /// Key to a rigid body in the physics world
    ///
    /// Uses generational indexing to prevent the ABA problem where a handle
    /// could point to a reused slot. If a body is removed and its slot reused,
    /// old keys will return None instead of pointing to the wrong body.
    pub struct BodyKey;
}

/// A rigid body with linear motion state and an exclusively owned shape
///
/// A body with mass 0 is static: its inverse mass is 0 and forces, impulses
/// and integration never move it.
#[derive(Clone, Debug)]
pub struct RigidBody {
    shape: Shape,
    position: Vec3,
    velocity: Vec3,
    /// Per-step force accumulator, cleared by `update`
    acceleration: Vec3,
    /// Orientation proxy (Euler angles, radians); not integrated
    rotation: Vec3,
    /// Stored for callers; never integrated
    angular_velocity: Vec3,
    mass: f32,
    inverse_mass: f32,
    material: Material,
}

impl RigidBody {
    /// Create a body at `position`
    ///
    /// Fails if `mass` is negative, not finite, or too small to invert.
    pub fn new(shape: Shape, position: Vec3, mass: f32) -> Result<Self, PhysicsError> {
        let inverse_mass = inverse_mass_for(mass)?;
        Ok(Self {
            shape,
            position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            rotation: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            mass,
            inverse_mass,
            material: Material::default(),
        })
    }

    /// Create a static (immovable) body
    pub fn new_static(shape: Shape, position: Vec3) -> Self {
        Self {
            shape,
            position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            rotation: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            mass: 0.0,
            inverse_mass: 0.0,
            material: Material::default(),
        }
    }

    /// Set the velocity of this body. Ignored for static bodies.
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.set_velocity(velocity);
        self
    }

    /// Set the restitution (bounciness) of this body
    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.set_restitution(restitution);
        self
    }

    /// Set the friction of this body
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.set_friction(friction);
        self
    }

    /// Set the render color tag of this body
    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.material.color = color;
        self
    }

    /// Replace the whole material of this body
    pub fn with_material(mut self, material: Material) -> Self {
        self.set_material(material);
        self
    }

    // --- Dynamics ---

    /// Accumulate a force for the current step
    ///
    /// `acceleration += force * inverse_mass`. No-op for static bodies.
    pub fn apply_force(&mut self, force: Vec3) {
        if self.is_static() {
            return;
        }
        self.acceleration += force * self.inverse_mass;
    }

    /// Apply an instantaneous impulse
    ///
    /// `velocity += impulse * inverse_mass`, not scaled by time. No-op for
    /// static bodies.
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        if self.is_static() {
            return;
        }
        self.velocity += impulse * self.inverse_mass;
    }

    /// Integrate one step with semi-implicit Euler
    ///
    /// Velocity is updated first, then position from the new velocity; the
    /// force accumulator is cleared afterwards. No-op for static bodies.
    pub fn update(&mut self, dt: f32) {
        if self.is_static() {
            return;
        }
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
        self.acceleration = Vec3::ZERO;
    }

    /// Move the body by `delta` (positional correction). No-op for static bodies.
    pub fn translate(&mut self, delta: Vec3) {
        if self.is_static() {
            return;
        }
        self.position += delta;
    }

    /// Overlap test against another body
    pub fn intersects(&self, other: &RigidBody) -> bool {
        self.shape.intersects(&other.shape, self.position, other.position)
    }

    // --- Accessors ---

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Mutable access to the shape for resizing
    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Set the velocity. No-op for static bodies, which always stay at rest.
    pub fn set_velocity(&mut self, velocity: Vec3) {
        if self.is_static() {
            return;
        }
        self.velocity = velocity;
    }

    /// Acceleration accumulated so far this step
    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    pub fn angular_velocity(&self) -> Vec3 {
        self.angular_velocity
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: Vec3) {
        self.angular_velocity = angular_velocity;
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Change the mass, updating inverse mass and the static flag
    ///
    /// A body made static loses any velocity and pending forces.
    pub fn set_mass(&mut self, mass: f32) -> Result<(), PhysicsError> {
        self.inverse_mass = inverse_mass_for(mass)?;
        self.mass = mass;
        if self.is_static() {
            self.velocity = Vec3::ZERO;
            self.acceleration = Vec3::ZERO;
        }
        Ok(())
    }

    pub fn inverse_mass(&self) -> f32 {
        self.inverse_mass
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.mass == 0.0
    }

    /// Diagonal inertia derived from the shape and mass
    pub fn inertia(&self) -> Vec3 {
        self.shape.inertia(self.mass)
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Replace the material (restitution and friction are clamped to [0, 1])
    pub fn set_material(&mut self, material: Material) {
        self.material = Material::new(material.restitution, material.friction)
            .with_color(material.color);
    }

    pub fn restitution(&self) -> f32 {
        self.material.restitution
    }

    pub fn set_restitution(&mut self, restitution: f32) {
        self.material.restitution = restitution.clamp(0.0, 1.0);
    }

    pub fn friction(&self) -> f32 {
        self.material.friction
    }

    pub fn set_friction(&mut self, friction: f32) {
        self.material.friction = friction.clamp(0.0, 1.0);
    }

    pub fn color(&self) -> [f32; 3] {
        self.material.color
    }

    pub fn set_color(&mut self, color: [f32; 3]) {
        self.material.color = color;
    }
}

fn inverse_mass_for(mass: f32) -> Result<f32, PhysicsError> {
    if !mass.is_finite() || mass < 0.0 {
        return Err(PhysicsError::InvalidMass(mass));
    }
    if mass == 0.0 {
        return Ok(0.0);
    }
    let inverse_mass = 1.0 / mass;
    if !inverse_mass.is_finite() {
        return Err(PhysicsError::InvalidMass(mass));
    }
    Ok(inverse_mass)
}
