//! Scene graph and component model
//!
//! A [`Scene`] owns a hierarchy of [`GameObject`]s, each carrying an open set
//! of [`Component`]s that are stepped once per frame in creation order.

mod component;
mod game_object;
#[allow(clippy::module_inception)]
mod scene;

pub use component::{Component, UpdateContext};
pub use game_object::{GameObject, GameObjectKey};
pub use scene::{Scene, SceneError, Skybox};
