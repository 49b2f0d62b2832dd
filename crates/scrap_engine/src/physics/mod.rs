//! Physics capabilities: rigid body state, colliders, trigger volumes
//!
//! Simulation (forces, detection, resolution) is out of scope; these types
//! carry the state gameplay code authors and branches on.

mod collider;
mod collision_layers;
mod rigid_body;
mod trigger_volume;

pub use collider::{Collider, ColliderShape};
pub use collision_layers::CollisionLayers;
pub use rigid_body::{RigidBody, RigidBodyType};
pub use trigger_volume::{TriggerEvent, TriggerVolume};
