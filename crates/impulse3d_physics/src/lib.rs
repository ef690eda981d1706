//! Rigid body physics for impulse3d
//!
//! This crate provides a small discrete-time rigid body simulation:
//! - Collision shapes (axis-aligned boxes and spheres)
//! - Pairwise overlap tests
//! - Rigid body state with semi-implicit Euler integration
//! - A physics world that applies gravity, resolves collisions with
//!   impulses plus a fixed positional correction, and applies damping

pub mod body;
pub mod collision;
pub mod error;
pub mod material;
pub mod shapes;
pub mod world;

// Re-export commonly used types
pub use body::{BodyKey, RigidBody};
pub use collision::{box_vs_box, sphere_vs_box, sphere_vs_sphere, Aabb, ContactPair};
pub use error::PhysicsError;
pub use material::Material;
pub use shapes::{BoxShape, Shape, ShapeKind, SphereShape};
pub use world::{PhysicsConfig, PhysicsWorld, DEFAULT_DAMPING, DEFAULT_GRAVITY, DEFAULT_SEPARATION};
