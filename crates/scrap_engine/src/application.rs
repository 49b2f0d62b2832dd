//! Application trait and lifecycle management

use thiserror::Error;

use crate::assets::ResourceError;
use crate::engine::{Engine, EngineError};
use crate::input::{KeyCode, MouseButton};
use crate::scene::SceneError;

/// Application lifecycle trait
///
/// Implement this trait to create a game using the engine.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once after the engine is initialized. Build your scene and
    /// register assets here.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame before the scene is stepped.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `delta_time` - Time since last frame in seconds
    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError>;

    /// Handle application events
    ///
    /// Called when the application receives events (focus, input, shutdown).
    fn handle_event(&mut self, engine: &mut Engine, event: AppEvent) -> Result<(), AppError> {
        // Default implementation forwards to engine
        engine.handle_event(event);
        Ok(())
    }

    /// Cleanup the application
    ///
    /// Called when the application is shutting down.
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Resource registry error
    #[error("resource error: {0}")]
    Resource(#[from] ResourceError),

    /// Scene graph error
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// Custom application error
    #[error("application error: {0}")]
    Custom(String),
}

/// Application events
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    /// Window close requested
    CloseRequested,

    /// Window gained focus
    FocusGained,

    /// Window lost focus
    FocusLost,

    /// Key input event
    KeyInput {
        /// The key that was pressed/released
        key: KeyCode,
        /// Whether the key was pressed (true) or released (false)
        pressed: bool,
    },

    /// Mouse button event
    MouseButton {
        /// The mouse button that was pressed/released
        button: MouseButton,
        /// Whether the button was pressed (true) or released (false)
        pressed: bool,
    },

    /// Mouse movement
    MouseMoved {
        /// New X coordinate
        x: f64,
        /// New Y coordinate
        y: f64,
    },
}
