//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use impulse3d::config::AppConfig;
use impulse3d::ShapeKind;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("IMP3D_PHYSICS__DAMPING", "0.5");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("IMP3D_PHYSICS__DAMPING");

    assert_eq!(config.physics.damping, 0.5);
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("IMP3D_PHYSICS__DAMPING");

    let config = AppConfig::load().unwrap();

    // Scene from config/default.toml
    let names: Vec<&str> = config.scene.bodies.iter().map(|b| b.name.as_str()).collect();
    assert!(names.contains(&"ground"));
    let ground = config.scene.bodies.iter().find(|b| b.name == "ground").unwrap();
    assert_eq!(ground.shape, ShapeKind::Box);
    assert_eq!(ground.mass, 0.0);
    assert!(config.simulation.timestep > 0.0);
}

#[test]
#[serial]
fn test_missing_config_dir_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.physics.gravity, [0.0, -9.81, 0.0]);
    assert_eq!(config.scene.bodies.len(), 3);
}
