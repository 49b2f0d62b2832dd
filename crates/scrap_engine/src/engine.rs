//! Core engine implementation

use thiserror::Error;

use crate::application::{AppEvent, Application};
use crate::assets::ResourceManager;
use crate::foundation::time::Timer;
use crate::input::InputState;
use crate::scene::Scene;

/// Main engine struct
///
/// The engine coordinates the scene, resources, and input, and drives the
/// frame loop. It is headless: event sources and rendering live outside.
pub struct Engine {
    /// Scene containing all game objects
    pub scene: Scene,

    /// Asset registry
    pub resources: ResourceManager,

    /// Input snapshot fed by host events
    pub input: InputState,

    /// Frame timing
    timer: Timer,

    /// Engine configuration
    config: EngineConfig,

    /// Whether the engine should continue running
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig) -> Self {
        log::info!("initializing engine");
        Self {
            scene: Scene::new(),
            resources: ResourceManager::new(),
            input: InputState::new(),
            timer: Timer::new(),
            config,
            running: true,
        }
    }

    /// Run the engine main loop with the given application
    pub fn run<T: Application>(config: EngineConfig, app: &mut T) -> Result<(), EngineError> {
        let mut engine = Self::new(config);

        app.initialize(&mut engine)
            .map_err(|e| EngineError::Application(format!("initialization: {}", e)))?;

        log::info!("starting main loop");
        while engine.running {
            engine.timer.update();
            let delta_time = engine
                .config
                .fixed_timestep
                .unwrap_or_else(|| engine.timer.delta_time());

            app.update(&mut engine, delta_time)
                .map_err(|e| EngineError::Application(format!("update: {}", e)))?;

            engine.step(delta_time);

            if let Some(max_frames) = engine.config.max_frames {
                if engine.timer.frame_count() >= max_frames {
                    log::info!("reached frame cap ({}), shutting down", max_frames);
                    engine.running = false;
                }
            }
        }

        app.cleanup(&mut engine);
        log::info!("engine shutdown complete");
        Ok(())
    }

    /// Step the scene one frame and roll the input edge sets over
    pub fn step(&mut self, delta_time: f32) {
        self.scene.update(&self.input, delta_time);
        self.input.begin_frame();
    }

    /// Handle an application event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::CloseRequested => {
                self.running = false;
            }
            AppEvent::FocusGained => self.input.set_focused(true),
            AppEvent::FocusLost => self.input.set_focused(false),
            AppEvent::KeyInput { key, pressed } => self.input.handle_key(key, pressed),
            AppEvent::MouseButton { button, pressed } => {
                self.input.handle_mouse_button(button, pressed);
            }
            AppEvent::MouseMoved { x, y } => self.input.handle_cursor_move(x, y),
        }
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("engine shutdown requested");
        self.running = false;
    }

    /// Whether the main loop will keep running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Get the scene
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Get mutable access to the scene
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Get the resource registry
    pub fn resources(&self) -> &ResourceManager {
        &self.resources
    }

    /// Get mutable access to the resource registry
    pub fn resources_mut(&mut self) -> &mut ResourceManager {
        &mut self.resources
    }

    /// Get the input snapshot
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Total simulated time since engine start
    pub fn total_time(&self) -> f32 {
        self.timer.total_time()
    }
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Use a fixed timestep instead of wall-clock deltas
    pub fixed_timestep: Option<f32>,

    /// Stop after this many frames (None = run until quit)
    pub max_frames: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fixed_timestep: Some(1.0 / 60.0),
            max_frames: None,
        }
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Initialization error
    #[error("engine initialization failed: {0}")]
    Initialization(String),

    /// Application error
    #[error("application error: {0}")]
    Application(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AppError;
    use crate::input::KeyCode;

    struct CountingApp {
        updates: u32,
        cleaned_up: bool,
    }

    impl Application for CountingApp {
        fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
            Ok(())
        }

        fn update(&mut self, _engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
            self.updates += 1;
            Ok(())
        }

        fn cleanup(&mut self, _engine: &mut Engine) {
            self.cleaned_up = true;
        }
    }

    #[test]
    fn test_frame_cap_stops_loop() {
        let mut app = CountingApp {
            updates: 0,
            cleaned_up: false,
        };
        let config = EngineConfig {
            fixed_timestep: Some(1.0 / 60.0),
            max_frames: Some(3),
        };

        Engine::run(config, &mut app).expect("run");
        assert_eq!(app.updates, 3);
        assert!(app.cleaned_up);
    }

    #[test]
    fn test_events_reach_input_state() {
        let mut engine = Engine::new(EngineConfig::default());
        engine.handle_event(AppEvent::KeyInput {
            key: KeyCode::A,
            pressed: true,
        });
        engine.handle_event(AppEvent::FocusLost);

        assert!(engine.input().is_key_down(KeyCode::A));
        assert!(!engine.input().is_focused());
    }

    #[test]
    fn test_close_request_stops_engine() {
        let mut engine = Engine::new(EngineConfig::default());
        assert!(engine.is_running());
        engine.handle_event(AppEvent::CloseRequested);
        assert!(!engine.is_running());
    }
}
