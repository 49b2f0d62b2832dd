//! Rigid body capability: impulse-accepting physics state
//!
//! This component holds the physics state other components branch on. It
//! accepts impulses and integrates its own velocity into the owning object's
//! transform; forces, gravity, and collision response belong to an external
//! physics backend.

use std::any::Any;

use crate::foundation::math::Vec3;
use crate::scene::{Component, UpdateContext};

use super::collider::Collider;

/// How a rigid body participates in physics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigidBodyType {
    /// Never moves; ignores impulses
    Static,

    /// Moves in response to impulses
    Dynamic,

    /// Moved by gameplay code; ignores impulses but keeps its velocity
    Kinematic,
}

/// Physics capability on a game object
#[derive(Debug, Clone)]
pub struct RigidBody {
    body_type: RigidBodyType,
    mass: f32,
    velocity: Vec3,
    linear_damping: f32,
    colliders: Vec<Collider>,
}

impl RigidBody {
    /// Create a rigid body of the given type with unit mass
    pub fn new(body_type: RigidBodyType) -> Self {
        Self {
            body_type,
            mass: 1.0,
            velocity: Vec3::zeros(),
            linear_damping: 0.0,
            colliders: Vec::new(),
        }
    }

    /// Body type
    pub fn body_type(&self) -> RigidBodyType {
        self.body_type
    }

    /// Body mass in kilograms
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Set the mass; non-positive values are rejected
    pub fn set_mass(&mut self, mass: f32) {
        if mass > 0.0 {
            self.mass = mass;
        } else {
            log::warn!("ignoring non-positive rigid body mass {}", mass);
        }
    }

    /// Builder-style mass setter
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.set_mass(mass);
        self
    }

    /// Set velocity damping (0 = none, 1 = instant stop per second)
    pub fn set_linear_damping(&mut self, damping: f32) {
        self.linear_damping = damping.clamp(0.0, 1.0);
    }

    /// Current linear velocity
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Overwrite the linear velocity
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Attach a collider shape
    pub fn add_collider(&mut self, collider: Collider) {
        self.colliders.push(collider);
    }

    /// Attached collider shapes
    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    /// Apply an instantaneous impulse
    ///
    /// Dynamic bodies gain `impulse / mass` of velocity; static and kinematic
    /// bodies ignore the call.
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        if self.body_type == RigidBodyType::Dynamic {
            self.velocity += impulse / self.mass;
        }
    }
}

impl Component for RigidBody {
    fn type_name(&self) -> &'static str {
        "RigidBody"
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>, delta_time: f32) {
        if self.body_type != RigidBodyType::Static {
            ctx.transform.position += self.velocity * delta_time;
            if self.linear_damping > 0.0 {
                self.velocity *= (1.0 - self.linear_damping * delta_time).max(0.0);
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
