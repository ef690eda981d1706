//! Scene construction utilities
//!
//! This module provides a declarative API for seeding a physics world.

mod scene_builder;

pub use scene_builder::SceneBuilder;
