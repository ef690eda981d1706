//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for seeding a [`PhysicsWorld`] with bodies.

use impulse3d_math::Vec3;
use impulse3d_physics::{
    BodyKey, Material, PhysicsConfig, PhysicsError, PhysicsWorld, RigidBody, Shape,
};

use crate::config::{BodyConfig, SceneConfig};

/// Builder for seeding a physics world
///
/// # Example
/// ```ignore
/// let world = SceneBuilder::new(PhysicsConfig::default())
///     .add_ground(Vec3::new(0.0, -1.0, 0.0), Vec3::new(5.0, 0.1, 5.0), Material::CONCRETE)?
///     .add_box(Vec3::new(0.0, 5.0, 0.0), Vec3::splat(0.5), 2.0, Material::WOOD)?
///     .build();
/// ```
pub struct SceneBuilder {
    world: PhysicsWorld,
    last_key: Option<BodyKey>,
}

impl SceneBuilder {
    /// Create a scene builder around an empty world
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            world: PhysicsWorld::with_config(config),
            last_key: None,
        }
    }

    /// Seed a world from configuration, bodies in listed order
    pub fn from_config(config: PhysicsConfig, scene: &SceneConfig) -> Result<Self, PhysicsError> {
        scene
            .bodies
            .iter()
            .try_fold(Self::new(config), |builder, body| builder.add_body_config(body))
    }

    /// Add a static ground box
    pub fn add_ground(
        self,
        position: Vec3,
        half_extents: Vec3,
        material: Material,
    ) -> Result<Self, PhysicsError> {
        let body = RigidBody::new_static(Shape::cuboid(half_extents)?, position).with_material(material);
        Ok(self.add_body(body))
    }

    /// Add a box (static when `mass` is 0)
    pub fn add_box(
        self,
        position: Vec3,
        half_extents: Vec3,
        mass: f32,
        material: Material,
    ) -> Result<Self, PhysicsError> {
        let body = RigidBody::new(Shape::cuboid(half_extents)?, position, mass)?.with_material(material);
        Ok(self.add_body(body))
    }

    /// Add a sphere (static when `mass` is 0)
    pub fn add_sphere(
        self,
        position: Vec3,
        radius: f32,
        mass: f32,
        material: Material,
    ) -> Result<Self, PhysicsError> {
        let body = RigidBody::new(Shape::sphere(radius)?, position, mass)?.with_material(material);
        Ok(self.add_body(body))
    }

    /// Add a body described by a config entry
    pub fn add_body_config(self, config: &BodyConfig) -> Result<Self, PhysicsError> {
        let body = config.to_body()?;
        let builder = self.add_body(body);
        log::debug!("Seeded '{}' as {:?}", config.name, builder.last_key);
        Ok(builder)
    }

    /// Add a pre-built body
    pub fn add_body(mut self, body: RigidBody) -> Self {
        self.last_key = Some(self.world.add_body(body));
        self
    }

    /// Key of the most recently added body
    pub fn last_key(&self) -> Option<BodyKey> {
        self.last_key
    }

    /// Build the scene and return the seeded world
    pub fn build(self) -> PhysicsWorld {
        self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use impulse3d_physics::ShapeKind;

    #[test]
    fn test_empty_scene() {
        let world = SceneBuilder::new(PhysicsConfig::default()).build();
        assert!(world.is_empty());
        assert_eq!(world.gravity(), Vec3::new(0.0, -9.81, 0.0));
    }

    #[test]
    fn test_scene_with_ground_and_box() {
        let builder = SceneBuilder::new(PhysicsConfig::default())
            .add_ground(Vec3::new(0.0, -1.0, 0.0), Vec3::new(5.0, 0.1, 5.0), Material::CONCRETE)
            .unwrap()
            .add_box(Vec3::new(0.0, 5.0, 0.0), Vec3::splat(0.5), 2.0, Material::WOOD)
            .unwrap();
        let box_key = builder.last_key().unwrap();
        let world = builder.build();

        assert_eq!(world.body_count(), 2);
        let (_, ground) = world.bodies().next().unwrap();
        assert!(ground.is_static());
        assert_eq!(ground.restitution(), Material::CONCRETE.restitution);

        let falling = world.get_body(box_key).unwrap();
        assert!(!falling.is_static());
        assert_eq!(falling.mass(), 2.0);
    }

    #[test]
    fn test_scene_with_sphere() {
        let world = SceneBuilder::new(PhysicsConfig::default())
            .add_sphere(Vec3::ZERO, 0.5, 1.0, Material::RUBBER)
            .unwrap()
            .build();

        let (_, ball) = world.bodies().next().unwrap();
        assert_eq!(ball.shape().kind(), ShapeKind::Sphere);
        assert_eq!(ball.restitution(), Material::RUBBER.restitution);
    }

    #[test]
    fn test_invalid_body_rejected() {
        let result = SceneBuilder::new(PhysicsConfig::default())
            .add_sphere(Vec3::ZERO, -0.5, 1.0, Material::default());
        assert!(result.is_err());

        let result = SceneBuilder::new(PhysicsConfig::default())
            .add_box(Vec3::ZERO, Vec3::ONE, -2.0, Material::default());
        assert!(matches!(result, Err(PhysicsError::InvalidMass(_))));
    }

    #[test]
    fn test_from_default_config() {
        let world = SceneBuilder::from_config(PhysicsConfig::default(), &SceneConfig::default())
            .unwrap()
            .build();

        let bodies: Vec<_> = world.bodies().map(|(_, b)| b).collect();
        assert_eq!(bodies.len(), 3);
        assert!(bodies[0].is_static());
        assert_eq!(bodies[1].shape().kind(), ShapeKind::Box);
        assert_eq!(bodies[1].restitution(), 0.7);
        assert_eq!(bodies[2].shape().kind(), ShapeKind::Sphere);
    }
}
