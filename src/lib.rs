//! impulse3d - discrete-time rigid body physics
//!
//! The library side of the application: configuration loading, scene
//! seeding, and the simulation façade a host loop drives. The physics core
//! itself lives in `impulse3d_physics`.

pub mod config;
pub mod scene;
pub mod systems;

pub use impulse3d_math::Vec3;
pub use impulse3d_physics::{BodyKey, PhysicsWorld, RigidBody, Shape, ShapeKind};
