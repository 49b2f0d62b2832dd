//! Trashy: a small platformer built on scrap_engine
//!
//! Without a windowing host the binary runs a scripted demo: it builds the
//! level, feeds a canned stretch of input through the engine's event path,
//! and shuts down after a fixed number of frames.

mod assets;
mod components;
mod config;
mod scene_builder;

use scrap_engine::prelude::*;

use crate::assets::LevelAssets;
use crate::config::GameConfig;
use crate::scene_builder::build_scene;

const DEMO_FRAMES: u64 = 300;

struct TrashyApp {
    config: GameConfig,
    player: Option<GameObjectKey>,
    frame: u64,
}

impl TrashyApp {
    fn new(config: GameConfig) -> Self {
        Self {
            config,
            player: None,
            frame: 0,
        }
    }

    /// Canned input: walk left, walk back right, jump at the end
    fn scripted_event(&self) -> Option<AppEvent> {
        match self.frame {
            0 => Some(AppEvent::KeyInput {
                key: self.config.controls.move_left,
                pressed: true,
            }),
            120 => Some(AppEvent::KeyInput {
                key: self.config.controls.move_left,
                pressed: false,
            }),
            121 => Some(AppEvent::KeyInput {
                key: self.config.controls.move_right,
                pressed: true,
            }),
            240 => Some(AppEvent::KeyInput {
                key: self.config.controls.move_right,
                pressed: false,
            }),
            241 => Some(AppEvent::KeyInput {
                key: self.config.controls.jump,
                pressed: true,
            }),
            _ => None,
        }
    }
}

impl Application for TrashyApp {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        let assets = LevelAssets::load(&mut engine.resources)?;
        let player = build_scene(&mut engine.scene, &assets, &self.config)?;
        self.player = Some(player);
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
        if let Some(event) = self.scripted_event() {
            self.handle_event(engine, event)?;
        }
        self.frame += 1;
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        if let Some(object) = self.player.and_then(|key| engine.scene.object(key)) {
            log::info!(
                "demo finished with '{}' at {:?}",
                object.name(),
                object.transform.position
            );
        }
    }
}

fn run() -> Result<(), EngineError> {
    let config = GameConfig::load_or_default("config/trashy.ron");
    let mut app = TrashyApp::new(config);

    let engine_config = EngineConfig {
        fixed_timestep: Some(1.0 / 60.0),
        max_frames: Some(DEMO_FRAMES),
    };
    Engine::run(engine_config, &mut app)
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_run_moves_the_player() {
        let mut app = TrashyApp::new(GameConfig::default());
        let engine_config = EngineConfig {
            fixed_timestep: Some(1.0 / 60.0),
            max_frames: Some(30),
        };

        let mut engine = Engine::new(engine_config);
        app.initialize(&mut engine).expect("initialize");
        let player = app.player.expect("player key");
        let start = engine.scene.object(player).expect("player").transform.position;

        for _ in 0..30 {
            app.update(&mut engine, 1.0 / 60.0).expect("update");
            engine.step(1.0 / 60.0);
        }

        let end = engine.scene.object(player).expect("player").transform.position;
        assert!(end.x > start.x, "holding the left key moves toward +X");
    }
}
