//! 3D Mathematics Library
//!
//! Vector math shared by the impulse3d physics core and its host.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components

mod vec3;

pub use vec3::Vec3;
