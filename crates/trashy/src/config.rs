//! Game configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use scrap_engine::input::KeyCode;

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Gameplay settings
    pub gameplay: GameplayConfig,

    /// Controls settings
    pub controls: ControlsConfig,
}

/// Gameplay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Horizontal move speed in units per second
    pub move_speed: f32,

    /// Upward impulse applied on jump
    pub jump_impulse: f32,
}

/// Controls configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Move left key
    pub move_left: KeyCode,

    /// Move right key
    pub move_right: KeyCode,

    /// Jump key
    pub jump: KeyCode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gameplay: GameplayConfig::default(),
            controls: ControlsConfig::default(),
        }
    }
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            move_speed: 3.0,
            jump_impulse: 6.0,
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            move_left: KeyCode::A,
            move_right: KeyCode::D,
            jump: KeyCode::Space,
        }
    }
}

impl GameConfig {
    /// Load configuration from a RON file, falling back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => match ron::from_str(&text) {
                Ok(config) => {
                    log::info!("loaded config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("failed to parse {}: {}; using defaults", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save configuration to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        std::fs::write(path.as_ref(), text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.gameplay.move_speed, 3.0);
        assert_eq!(config.controls.move_left, KeyCode::A);
        assert_eq!(config.controls.move_right, KeyCode::D);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: GameConfig =
            ron::from_str("(gameplay: (move_speed: 5.0))").expect("parse config");
        assert_eq!(config.gameplay.move_speed, 5.0);
        // Unspecified fields fall back to defaults
        assert_eq!(config.controls.jump, KeyCode::Space);
    }

    #[test]
    fn test_ron_roundtrip() {
        let config = GameConfig::default();
        let text = ron::ser::to_string(&config).expect("serialize");
        let restored: GameConfig = ron::from_str(&text).expect("deserialize");
        assert_eq!(restored.gameplay.jump_impulse, config.gameplay.jump_impulse);
    }
}
