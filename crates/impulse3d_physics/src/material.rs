//! Surface material of a rigid body

/// Material properties carried by every rigid body
///
/// Restitution drives collision response. Friction is stored for callers but
/// the single-pass impulse solver does not use it yet. The color tag is only
/// passed through to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Restitution/bounciness (0.0 = bodies stick, 1.0 = perfectly elastic)
    pub restitution: f32,
    /// Friction coefficient (0.0 = ice, 1.0 = rubber)
    pub friction: f32,
    /// RGB color tag for rendering (each component 0.0-1.0)
    pub color: [f32; 3],
}

impl Default for Material {
    fn default() -> Self {
        Self {
            restitution: 0.6,
            friction: 0.3,
            color: [1.0, 1.0, 1.0],
        }
    }
}

impl Material {
    /// Rubber-like material: very bouncy, high friction
    pub const RUBBER: Self = Self {
        restitution: 0.8,
        friction: 0.9,
        color: [0.15, 0.15, 0.15],
    };

    /// Wood-like material: low bounce, moderate friction
    pub const WOOD: Self = Self {
        restitution: 0.2,
        friction: 0.5,
        color: [0.6, 0.4, 0.2],
    };

    /// Metal-like material: moderate bounce and friction
    pub const METAL: Self = Self {
        restitution: 0.3,
        friction: 0.3,
        color: [0.7, 0.7, 0.75],
    };

    /// Ice-like material: slight bounce, almost no friction
    pub const ICE: Self = Self {
        restitution: 0.1,
        friction: 0.05,
        color: [0.8, 0.9, 1.0],
    };

    /// Concrete-like material: very low bounce, high friction
    pub const CONCRETE: Self = Self {
        restitution: 0.1,
        friction: 0.7,
        color: [0.5, 0.5, 0.5],
    };

    /// Create a material with custom restitution and friction
    ///
    /// Values are clamped to the range [0.0, 1.0].
    pub fn new(restitution: f32, friction: f32) -> Self {
        Self {
            restitution: restitution.clamp(0.0, 1.0),
            friction: friction.clamp(0.0, 1.0),
            ..Self::default()
        }
    }

    /// Set the render color tag
    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    /// Restitution used when two materials collide: the less bouncy one wins
    pub fn combined_restitution(&self, other: &Self) -> f32 {
        self.restitution.min(other.restitution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material() {
        let material = Material::default();
        assert_eq!(material.restitution, 0.6);
        assert_eq!(material.friction, 0.3);
        assert_eq!(material.color, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_new_clamps_values() {
        let material = Material::new(1.5, -0.5);
        assert_eq!(material.restitution, 1.0);
        assert_eq!(material.friction, 0.0);

        let material = Material::new(-1.0, 2.0);
        assert_eq!(material.restitution, 0.0);
        assert_eq!(material.friction, 1.0);
    }

    #[test]
    fn test_preset_constants() {
        assert!(Material::ICE.friction < 0.1);
        assert!(Material::RUBBER.restitution > 0.7);
        assert!(Material::CONCRETE.restitution < 0.2);
    }

    #[test]
    fn test_combined_restitution_takes_minimum() {
        let bouncy = Material::new(0.9, 0.5);
        let dull = Material::new(0.2, 0.5);
        assert_eq!(bouncy.combined_restitution(&dull), 0.2);
        assert_eq!(dull.combined_restitution(&bouncy), 0.2);
    }

    #[test]
    fn test_with_color() {
        let material = Material::WOOD.with_color([1.0, 0.0, 0.0]);
        assert_eq!(material.color, [1.0, 0.0, 0.0]);
        assert_eq!(material.restitution, Material::WOOD.restitution);
    }
}
