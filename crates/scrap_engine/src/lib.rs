//! # Scrap Engine
//!
//! A small component-based scene engine with a headless frame loop.
//!
//! Games are built by composing [`scene::GameObject`]s out of
//! [`scene::Component`]s: a component receives a per-frame update and can
//! branch on the optional presence of sibling capabilities such as
//! [`physics::RigidBody`]. Rendering, physics simulation, and asset decoding
//! are external; the engine carries the descriptors and state gameplay code
//! is written against.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scrap_engine::prelude::*;
//!
//! struct MyGame;
//!
//! impl Application for MyGame {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         engine.scene.create_game_object("player");
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, _engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut game = MyGame;
//!     Engine::run(EngineConfig::default(), &mut game)?;
//!     Ok(())
//! }
//! ```

pub mod assets;
pub mod components;
pub mod foundation;
pub mod input;
pub mod physics;
pub mod scene;

mod application;
mod engine;

pub use application::{AppError, AppEvent, Application};
pub use engine::{Engine, EngineConfig, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{
            Material, MaterialHandle, MaterialParam, MeshBuilderParam, MeshHandle, MeshResource,
            ResourceError, ResourceManager, ShaderHandle, ShaderProgram, ShaderStage, Texture,
            TextureHandle, TextureKind,
        },
        components::{
            Camera, EmitterKind, Light, ParticleEmitter, ParticleSystem, RenderComponent,
            ShadowCamera,
        },
        foundation::{
            math::{Mat4, Quat, Transform, Vec2, Vec3, Vec4},
            time::Timer,
        },
        input::{InputState, KeyCode, MouseButton},
        physics::{
            Collider, ColliderShape, CollisionLayers, RigidBody, RigidBodyType, TriggerEvent,
            TriggerVolume,
        },
        scene::{Component, GameObject, GameObjectKey, Scene, SceneError, Skybox, UpdateContext},
        AppError, AppEvent, Application, Engine, EngineConfig, EngineError,
    };
}
