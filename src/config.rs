//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`IMP3D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use impulse3d_math::Vec3;
use impulse3d_physics::{
    Material, PhysicsError, RigidBody, Shape, ShapeKind, DEFAULT_DAMPING, DEFAULT_GRAVITY,
    DEFAULT_SEPARATION,
};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Physics configuration
    #[serde(default)]
    pub physics: PhysicsConfig,
    /// Host loop configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Bodies seeded into the world on init
    #[serde(default)]
    pub scene: SceneConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`IMP3D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // IMP3D_PHYSICS__DAMPING=1.0 -> physics.damping = 1.0
        figment = figment.merge(Env::prefixed("IMP3D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Physics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity acceleration [x, y, z]
    pub gravity: [f32; 3],
    /// Velocity damping applied after each step (1.0 = none)
    pub damping: f32,
    /// Distance colliding bodies are pushed apart per contact
    pub separation: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY.to_array(),
            damping: DEFAULT_DAMPING,
            separation: DEFAULT_SEPARATION,
        }
    }
}

impl PhysicsConfig {
    /// Convert to the physics engine's config type
    pub fn to_physics_config(&self) -> impulse3d_physics::PhysicsConfig {
        impulse3d_physics::PhysicsConfig::new(Vec3::from(self.gravity), self.damping)
            .with_separation(self.separation)
    }
}

/// Host loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed time step in seconds
    pub timestep: f32,
    /// Number of frames the headless host runs
    pub frames: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 60.0,
            frames: 600,
        }
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Bodies in insertion order
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl Default for SceneConfig {
    /// The reference scene: static ground, a falling box and a falling ball
    fn default() -> Self {
        Self {
            bodies: vec![
                BodyConfig {
                    name: "ground".to_string(),
                    shape: ShapeKind::Box,
                    size: [5.0, 0.1, 5.0],
                    position: [0.0, -1.0, 0.0],
                    mass: 0.0,
                    color: [0.4, 0.4, 0.4],
                    ..BodyConfig::default()
                },
                BodyConfig {
                    name: "box".to_string(),
                    shape: ShapeKind::Box,
                    size: [0.5, 0.5, 0.5],
                    position: [0.0, 5.0, 0.0],
                    mass: 2.0,
                    restitution: Some(0.7),
                    color: [0.9, 0.3, 0.2],
                    ..BodyConfig::default()
                },
                BodyConfig {
                    name: "ball".to_string(),
                    shape: ShapeKind::Sphere,
                    size: [0.4, 0.4, 0.4],
                    position: [0.0, 8.0, 0.0],
                    mass: 1.0,
                    color: [0.2, 0.5, 0.9],
                    ..BodyConfig::default()
                },
            ],
        }
    }
}

/// One body of the scene
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    /// Name used in log output
    pub name: String,
    /// Primitive kind
    pub shape: ShapeKind,
    /// Half-extents for boxes; spheres use `size[0]` as the radius
    pub size: [f32; 3],
    /// Initial position [x, y, z]
    pub position: [f32; 3],
    /// Initial velocity [x, y, z]
    pub velocity: [f32; 3],
    /// Mass (0 = static)
    pub mass: f32,
    /// Restitution override (material default when absent)
    pub restitution: Option<f32>,
    /// Friction override (material default when absent)
    pub friction: Option<f32>,
    /// Render color [r, g, b]
    pub color: [f32; 3],
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            name: "body".to_string(),
            shape: ShapeKind::Box,
            size: [0.5, 0.5, 0.5],
            position: [0.0, 0.0, 0.0],
            velocity: [0.0, 0.0, 0.0],
            mass: 1.0,
            restitution: None,
            friction: None,
            color: [1.0, 1.0, 1.0],
        }
    }
}

impl BodyConfig {
    /// Build the collision shape described by this entry
    pub fn to_shape(&self) -> Result<Shape, PhysicsError> {
        match self.shape {
            ShapeKind::Box => Shape::cuboid(Vec3::from(self.size)),
            ShapeKind::Sphere => Shape::sphere(self.size[0]),
        }
    }

    /// Build the rigid body described by this entry
    pub fn to_body(&self) -> Result<RigidBody, PhysicsError> {
        let defaults = Material::default();
        let material = Material::new(
            self.restitution.unwrap_or(defaults.restitution),
            self.friction.unwrap_or(defaults.friction),
        )
        .with_color(self.color);

        let body = RigidBody::new(self.to_shape()?, Vec3::from(self.position), self.mass)?
            .with_material(material)
            .with_velocity(Vec3::from(self.velocity));
        Ok(body)
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log every body every N frames in the headless host (0 = never)
    pub report_interval: u32,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            report_interval: 60,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.physics.gravity, [0.0, -9.81, 0.0]);
        assert_eq!(config.physics.damping, 0.98);
        assert_eq!(config.simulation.frames, 600);
        assert_eq!(config.scene.bodies.len(), 3);
    }

    #[test]
    fn test_default_scene_matches_reference() {
        let scene = SceneConfig::default();
        let ground = &scene.bodies[0];
        assert_eq!(ground.mass, 0.0);
        assert_eq!(ground.size, [5.0, 0.1, 5.0]);
        assert_eq!(ground.position, [0.0, -1.0, 0.0]);

        let falling = &scene.bodies[1];
        assert_eq!(falling.mass, 2.0);
        assert_eq!(falling.restitution, Some(0.7));
        assert_eq!(falling.position, [0.0, 5.0, 0.0]);
    }

    #[test]
    fn test_to_physics_config() {
        let config = PhysicsConfig {
            gravity: [0.0, -1.62, 0.0],
            damping: 1.0,
            separation: 0.02,
        };
        let physics = config.to_physics_config();
        assert_eq!(physics.gravity, Vec3::new(0.0, -1.62, 0.0));
        assert_eq!(physics.damping, 1.0);
        assert_eq!(physics.separation, 0.02);
    }

    #[test]
    fn test_body_config_to_body() {
        let config = BodyConfig {
            shape: ShapeKind::Sphere,
            size: [0.25, 0.0, 0.0],
            position: [1.0, 2.0, 3.0],
            velocity: [0.0, 1.0, 0.0],
            mass: 4.0,
            restitution: Some(0.9),
            color: [0.0, 1.0, 0.0],
            ..BodyConfig::default()
        };
        let body = config.to_body().unwrap();
        assert_eq!(body.shape().kind(), ShapeKind::Sphere);
        assert_eq!(body.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(body.velocity(), Vec3::Y);
        assert_eq!(body.inverse_mass(), 0.25);
        assert_eq!(body.restitution(), 0.9);
        assert_eq!(body.friction(), 0.3);
        assert_eq!(body.color(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_static_body_config_ignores_velocity() {
        let config = BodyConfig {
            mass: 0.0,
            velocity: [0.0, 10.0, 0.0],
            ..BodyConfig::default()
        };
        let body = config.to_body().unwrap();
        assert!(body.is_static());
        assert_eq!(body.velocity(), Vec3::ZERO);
    }

    #[test]
    fn test_body_config_rejects_invalid_values() {
        let negative_mass = BodyConfig { mass: -1.0, ..BodyConfig::default() };
        assert!(matches!(negative_mass.to_body(), Err(PhysicsError::InvalidMass(_))));

        let flat_box = BodyConfig { size: [1.0, 0.0, 1.0], ..BodyConfig::default() };
        assert!(matches!(flat_box.to_body(), Err(PhysicsError::InvalidShape(_))));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("gravity"));
        assert!(toml.contains("timestep"));
        assert!(toml.contains("[[scene.bodies]]"));
    }

    #[test]
    fn test_config_parses_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [physics]
            damping = 1.0

            [[scene.bodies]]
            name = "ball"
            shape = "sphere"
            size = [1.0, 1.0, 1.0]
            "#,
        )
        .unwrap();

        assert_eq!(config.physics.damping, 1.0);
        assert_eq!(config.physics.gravity, [0.0, -9.81, 0.0]);
        assert_eq!(config.scene.bodies.len(), 1);
        assert_eq!(config.scene.bodies[0].shape, ShapeKind::Sphere);
        assert_eq!(config.scene.bodies[0].mass, 1.0);
    }
}
