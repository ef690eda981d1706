//! Physics world and simulation step

use crate::body::{BodyKey, RigidBody};
use crate::collision::ContactPair;
use impulse3d_math::Vec3;
use slotmap::SlotMap;

/// Default gravity acceleration (Earth, Y-down)
pub const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);
/// Default per-step velocity damping factor
pub const DEFAULT_DAMPING: f32 = 0.98;
/// Default distance two colliding bodies are pushed apart per resolution
pub const DEFAULT_SEPARATION: f32 = 0.01;

/// Configuration for the physics simulation
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsConfig {
    /// Gravity acceleration applied to every dynamic body
    pub gravity: Vec3,
    /// Multiplier applied to dynamic body velocity after integration (0.0-1.0)
    pub damping: f32,
    /// Fixed positional correction applied to each colliding pair.
    /// Constant, not proportional to overlap depth.
    pub separation: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            damping: DEFAULT_DAMPING,
            separation: DEFAULT_SEPARATION,
        }
    }
}

impl PhysicsConfig {
    /// Create a new physics config with the given gravity and damping
    pub fn new(gravity: Vec3, damping: f32) -> Self {
        Self {
            gravity,
            damping: damping.clamp(0.0, 1.0),
            ..Self::default()
        }
    }

    /// Set the positional correction distance
    pub fn with_separation(mut self, separation: f32) -> Self {
        self.separation = separation.max(0.0);
        self
    }
}

/// Velocity and position changes computed for one colliding pair
#[derive(Clone, Copy, Debug)]
struct PairResolution {
    /// Impulse applied to A; B receives the negation
    impulse: Vec3,
    correction_a: Vec3,
    correction_b: Vec3,
}

/// The physics world owning all rigid bodies
///
/// Bodies are iterated in insertion order, which makes the pairwise
/// collision sweep deterministic.
pub struct PhysicsWorld {
    /// All rigid bodies in the world (using generational keys)
    bodies: SlotMap<BodyKey, RigidBody>,
    /// Keys in insertion order
    order: Vec<BodyKey>,
    /// Physics configuration
    config: PhysicsConfig,
}

impl PhysicsWorld {
    /// Create a new physics world with default configuration
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    /// Create a new physics world with custom configuration
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self {
            bodies: SlotMap::with_key(),
            order: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn gravity(&self) -> Vec3 {
        self.config.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.config.gravity = gravity;
    }

    pub fn damping(&self) -> f32 {
        self.config.damping
    }

    /// Set the velocity damping factor (clamped to [0, 1])
    pub fn set_damping(&mut self, damping: f32) {
        self.config.damping = damping.clamp(0.0, 1.0);
    }

    /// Add a body to the world and return its key
    ///
    /// Bodies must be added between steps.
    pub fn add_body(&mut self, body: RigidBody) -> BodyKey {
        let key = self.bodies.insert(body);
        self.order.push(key);
        log::debug!("Added body {:?} ({} total)", key, self.bodies.len());
        key
    }

    /// Remove a body from the world and return it
    ///
    /// The remaining bodies keep their relative order.
    pub fn remove_body(&mut self, key: BodyKey) -> Option<RigidBody> {
        let body = self.bodies.remove(key)?;
        self.order.retain(|k| *k != key);
        log::debug!("Removed body {:?} ({} left)", key, self.bodies.len());
        Some(body)
    }

    /// Get an immutable reference to a body by key
    pub fn get_body(&self, key: BodyKey) -> Option<&RigidBody> {
        self.bodies.get(key)
    }

    /// Get a mutable reference to a body by key
    pub fn get_body_mut(&mut self, key: BodyKey) -> Option<&mut RigidBody> {
        self.bodies.get_mut(key)
    }

    /// Get the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterate over all body keys in insertion order
    pub fn body_keys(&self) -> impl Iterator<Item = BodyKey> + '_ {
        self.order.iter().copied()
    }

    /// Iterate over keys and bodies in insertion order
    pub fn bodies(&self) -> impl Iterator<Item = (BodyKey, &RigidBody)> + '_ {
        self.order.iter().map(move |&key| (key, &self.bodies[key]))
    }

    /// Remove every body
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.order.clear();
    }

    /// All pairs whose shapes currently overlap, in sweep order
    pub fn overlapping_pairs(&self) -> Vec<ContactPair> {
        let mut pairs = Vec::new();
        for (i, &a) in self.order.iter().enumerate() {
            for &b in &self.order[i + 1..] {
                if self.bodies[a].intersects(&self.bodies[b]) {
                    pairs.push(ContactPair { a, b });
                }
            }
        }
        pairs
    }

    /// Step the physics simulation forward by dt seconds
    ///
    /// This performs, in order:
    /// 1. Gravity: `apply_force(gravity * mass)` on every dynamic body
    /// 2. Collisions: every pair (i < j) is tested and resolved immediately
    /// 3. Integration of every body, then damping of dynamic velocities
    ///
    /// A non-positive or non-finite `dt` leaves the world untouched.
    /// Returns whether the step ran.
    pub fn step(&mut self, dt: f32) -> bool {
        if !(dt > 0.0 && dt.is_finite()) {
            log::warn!("Ignoring physics step with invalid dt {}", dt);
            return false;
        }

        self.apply_gravity();
        self.resolve_collisions();
        self.integrate(dt);
        true
    }

    /// Phase 1: accumulate gravity on dynamic bodies
    fn apply_gravity(&mut self) {
        let gravity = self.config.gravity;
        for &key in &self.order {
            let body = &mut self.bodies[key];
            if body.is_static() {
                continue;
            }
            let force = gravity * body.mass();
            body.apply_force(force);
        }
    }

    /// Phase 2: O(n²) sweep over every unordered pair in insertion order
    fn resolve_collisions(&mut self) {
        let count = self.order.len();
        for i in 0..count {
            for j in (i + 1)..count {
                let key_a = self.order[i];
                let key_b = self.order[j];

                let resolution = {
                    let body_a = &self.bodies[key_a];
                    let body_b = &self.bodies[key_b];
                    if !body_a.intersects(body_b) {
                        continue;
                    }
                    Self::compute_resolution(body_a, body_b, self.config.separation)
                };

                match resolution {
                    Some(r) => {
                        let body_a = &mut self.bodies[key_a];
                        body_a.apply_impulse(r.impulse);
                        body_a.translate(r.correction_a);

                        let body_b = &mut self.bodies[key_b];
                        body_b.apply_impulse(-r.impulse);
                        body_b.translate(r.correction_b);
                    }
                    None => log::trace!("No response for pair {:?} / {:?}", key_a, key_b),
                }
            }
        }
    }

    /// Compute the impulse and positional correction for an overlapping pair
    ///
    /// Returns `None` when no response applies: both bodies static, centers
    /// coincident (no normal), or the bodies already separating.
    fn compute_resolution(a: &RigidBody, b: &RigidBody, separation: f32) -> Option<PairResolution> {
        let inv_mass_sum = a.inverse_mass() + b.inverse_mass();
        if inv_mass_sum <= 0.0 {
            return None;
        }

        // Points from B toward A
        let normal = (a.position() - b.position()).try_normalized()?;
        let relative_velocity = a.velocity() - b.velocity();
        let vel_along_normal = relative_velocity.dot(normal);
        if vel_along_normal > 0.0 {
            return None;
        }

        let restitution = a.material().combined_restitution(b.material());
        let impulse_scalar = -(1.0 + restitution) * vel_along_normal / inv_mass_sum;
        let impulse = normal * impulse_scalar;

        let (correction_a, correction_b) = match (a.is_static(), b.is_static()) {
            (false, false) => (normal * (separation * 0.5), -normal * (separation * 0.5)),
            (false, true) => (normal * separation, Vec3::ZERO),
            (true, false) => (Vec3::ZERO, -normal * separation),
            (true, true) => return None,
        };

        Some(PairResolution {
            impulse,
            correction_a,
            correction_b,
        })
    }

    /// Phase 3: integrate every body, then damp dynamic velocities
    fn integrate(&mut self, dt: f32) {
        let damping = self.config.damping;
        for &key in &self.order {
            let body = &mut self.bodies[key];
            body.update(dt);
            if !body.is_static() {
                let damped = body.velocity() * damping;
                body.set_velocity(damped);
            }
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
