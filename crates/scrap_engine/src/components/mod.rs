//! Built-in components shared by most games

mod camera;
mod light;
mod particles;
mod render;

pub use camera::{Camera, ShadowCamera};
pub use light::Light;
pub use particles::{EmitterKind, ParticleEmitter, ParticleSystem};
pub use render::RenderComponent;
