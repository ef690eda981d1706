//! Simulation system
//!
//! The façade the host loop talks to:
//! - `init` seeds the physics world from the scene config
//! - `update(dt)` steps physics once per frame
//! - `render` reports body state to a renderer-side collector
//! - `cleanup` tears the world down
//!
//! The world is the single owner of every body; callers hold [`BodyKey`]s.

use impulse3d_physics::{BodyKey, PhysicsError, PhysicsWorld, RigidBody};

use super::render::{RenderCollector, RenderItem};
use crate::config::{AppConfig, PhysicsConfig, SceneConfig};
use crate::scene::SceneBuilder;

/// Simulation error types
#[derive(Debug)]
pub enum SimulationError {
    /// `init` has not completed (or `cleanup` was called)
    NotInitialized,
    /// The key does not refer to a body in the world
    UnknownBody(BodyKey),
    /// A body in the scene config had invalid parameters
    Physics(PhysicsError),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::NotInitialized => write!(f, "Simulation is not initialized"),
            SimulationError::UnknownBody(key) => write!(f, "Unknown body {:?}", key),
            SimulationError::Physics(err) => write!(f, "Physics error: {}", err),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Physics(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PhysicsError> for SimulationError {
    fn from(err: PhysicsError) -> Self {
        SimulationError::Physics(err)
    }
}

/// Owns the physics world and forwards host-loop calls to it
pub struct Simulation {
    physics_config: PhysicsConfig,
    scene: SceneConfig,
    /// `None` until `init` completes
    world: Option<PhysicsWorld>,
    frame: u64,
}

impl Simulation {
    /// Create an uninitialized simulation
    pub fn new(physics_config: PhysicsConfig, scene: SceneConfig) -> Self {
        Self {
            physics_config,
            scene,
            world: None,
            frame: 0,
        }
    }

    /// Create an uninitialized simulation from application config
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.physics.clone(), config.scene.clone())
    }

    /// Build the world and seed the scene
    ///
    /// Calling `init` again discards the current world and re-seeds it.
    /// On failure the simulation is left uninitialized.
    pub fn init(&mut self) -> Result<(), SimulationError> {
        self.world = None;
        self.frame = 0;
        let builder = SceneBuilder::from_config(self.physics_config.to_physics_config(), &self.scene)?;
        let world = builder.build();
        log::info!("Simulation initialized with {} bodies", world.body_count());
        self.world = Some(world);
        self.frame = 0;
        Ok(())
    }

    /// Whether `init` has completed
    pub fn is_ready(&self) -> bool {
        self.world.is_some()
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// No-op before `init` or when the world rejects `dt`.
    pub fn update(&mut self, dt: f32) {
        if let Some(world) = self.world.as_mut() {
            if world.step(dt) {
                self.frame += 1;
            }
        }
    }

    /// Number of physics steps taken since `init`
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Add a body between updates
    pub fn add_rigid_body(&mut self, body: RigidBody) -> Result<BodyKey, SimulationError> {
        let world = self.world.as_mut().ok_or(SimulationError::NotInitialized)?;
        Ok(world.add_body(body))
    }

    /// Remove a body between updates, returning it
    pub fn remove_rigid_body(&mut self, key: BodyKey) -> Result<RigidBody, SimulationError> {
        let world = self.world.as_mut().ok_or(SimulationError::NotInitialized)?;
        world.remove_body(key).ok_or(SimulationError::UnknownBody(key))
    }

    pub fn world(&self) -> Option<&PhysicsWorld> {
        self.world.as_ref()
    }

    pub fn world_mut(&mut self) -> Option<&mut PhysicsWorld> {
        self.world.as_mut()
    }

    /// Look up a body by key
    pub fn body(&self, key: BodyKey) -> Option<&RigidBody> {
        self.world.as_ref().and_then(|w| w.get_body(key))
    }

    pub fn body_count(&self) -> usize {
        self.world.as_ref().map(|w| w.body_count()).unwrap_or(0)
    }

    /// Report every body, in insertion order, to the collector
    pub fn render<C: RenderCollector + ?Sized>(&self, collector: &mut C) {
        if let Some(world) = self.world.as_ref() {
            for (key, body) in world.bodies() {
                collector.submit(RenderItem::from_body(key, body));
            }
        }
    }

    /// Drop every body and return to the uninitialized state
    pub fn cleanup(&mut self) {
        if let Some(mut world) = self.world.take() {
            log::info!("Simulation cleanup after {} frames ({} bodies)", self.frame, world.body_count());
            world.clear();
        }
        self.frame = 0;
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(PhysicsConfig::default(), SceneConfig::default())
    }
}
