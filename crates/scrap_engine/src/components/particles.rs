//! Particle system component
//!
//! Holds authored emitter descriptions; simulation and drawing are external.

use std::any::Any;

use crate::assets::TextureHandle;
use crate::foundation::math::{Vec3, Vec4};
use crate::scene::Component;

/// How an emitter spawns particles
#[derive(Debug, Clone, PartialEq)]
pub enum EmitterKind {
    /// Spawn on the surface of a sphere around the emitter position
    Sphere {
        /// Sphere radius
        radius: f32,
        /// Initial particle speed
        velocity: f32,
        /// Seconds between spawns
        spawn_interval: f32,
        /// Min/max particle lifetime in seconds
        life_range: [f32; 2],
        /// Min/max particle size
        size_range: [f32; 2],
    },
}

/// A single authored particle emitter
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleEmitter {
    /// Spawn behavior
    pub kind: EmitterKind,

    /// Atlas layer index used for the particle sprite
    pub tex_id: u32,

    /// Emitter position relative to the owning object
    pub position: Vec3,

    /// Particle tint
    pub color: Vec4,

    /// Emitter warm-up time in seconds
    pub lifetime: f32,
}

/// Particle system capability on a game object
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    /// Sprite atlas shared by all emitters
    pub atlas: Option<TextureHandle>,

    /// Gravity applied to spawned particles
    pub gravity: Vec3,

    emitters: Vec<ParticleEmitter>,
}

impl ParticleSystem {
    /// Create an empty particle system
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an emitter description
    pub fn add_emitter(&mut self, emitter: ParticleEmitter) {
        self.emitters.push(emitter);
    }

    /// Authored emitters
    pub fn emitters(&self) -> &[ParticleEmitter] {
        &self.emitters
    }
}

impl Component for ParticleSystem {
    fn type_name(&self) -> &'static str {
        "ParticleSystem"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_emitter() {
        let mut system = ParticleSystem::new();
        system.gravity = Vec3::zeros();
        system.add_emitter(ParticleEmitter {
            kind: EmitterKind::Sphere {
                radius: 0.5,
                velocity: 0.5,
                spawn_interval: 0.1,
                life_range: [1.0, 1.5],
                size_range: [0.25, 0.5],
            },
            tex_id: 2,
            position: Vec3::zeros(),
            color: Vec4::new(0.966, 0.878, 0.767, 1.0),
            lifetime: 0.02,
        });

        assert_eq!(system.emitters().len(), 1);
    }
}
