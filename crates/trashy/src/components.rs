//! Game-specific components

use std::any::Any;

use serde::{Deserialize, Serialize};

use scrap_engine::input::KeyCode;
use scrap_engine::physics::RigidBody;
use scrap_engine::prelude::{Component, GameObjectKey, UpdateContext, Vec3};

use crate::config::GameConfig;

/// Allow the player to move left/right with the bound keys
///
/// Once per frame this reads the input snapshot and produces a horizontal
/// displacement: the two bound keys map to equal-and-opposite fixed-speed
/// vectors combined by addition (both held cancel out), the z component is
/// forced to zero, and the result is scaled by elapsed time. If the owning
/// object carries a `RigidBody` the displacement is submitted as an impulse;
/// otherwise the position is mutated directly. No state is kept between
/// frames, and nothing is processed while the window is unfocused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerControl {
    move_speed: f32,
    move_left: KeyCode,
    move_right: KeyCode,

    /// Camera to follow the player, if any
    #[serde(skip)]
    camera: Option<GameObjectKey>,
}

impl Default for PlayerControl {
    fn default() -> Self {
        Self::new(3.0)
    }
}

impl PlayerControl {
    /// Player control with the given move speed and A/D bindings
    pub fn new(move_speed: f32) -> Self {
        Self {
            move_speed,
            move_left: KeyCode::A,
            move_right: KeyCode::D,
            camera: None,
        }
    }

    /// Player control configured from the game config
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            move_speed: config.gameplay.move_speed,
            move_left: config.controls.move_left,
            move_right: config.controls.move_right,
            camera: None,
        }
    }

    /// Attach a camera object to follow the player
    pub fn set_camera(&mut self, camera: GameObjectKey) {
        self.camera = Some(camera);
    }

    /// Camera attached to follow the player, if any
    pub fn camera(&self) -> Option<GameObjectKey> {
        self.camera
    }

    /// Configured move speed in units per second
    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// Deserialize from a RON document
    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }
}

impl Component for PlayerControl {
    fn type_name(&self) -> &'static str {
        "PlayerControl"
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>, delta_time: f32) {
        if !ctx.input.is_focused() {
            return;
        }

        let mut movement = Vec3::zeros();
        if ctx.input.is_key_down(self.move_left) {
            movement += Vec3::new(self.move_speed, 0.0, 0.0);
        }
        if ctx.input.is_key_down(self.move_right) {
            movement -= Vec3::new(self.move_speed, 0.0, 0.0);
        }

        // Horizontal movement only
        movement.z = 0.0;
        movement *= delta_time;

        if let Some(body) = ctx.sibling_mut::<RigidBody>() {
            body.apply_impulse(movement);
        } else {
            ctx.transform.position += movement;
        }
    }

    fn to_ron(&self) -> Option<String> {
        ron::ser::to_string(self).ok()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Jump on key press by applying an upward impulse
///
/// Does nothing without a `RigidBody` sibling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JumpBehaviour {
    impulse: f32,
    jump_key: KeyCode,
}

impl Default for JumpBehaviour {
    fn default() -> Self {
        Self {
            impulse: 6.0,
            jump_key: KeyCode::Space,
        }
    }
}

impl JumpBehaviour {
    /// Jump behavior with the given impulse strength
    pub fn new(impulse: f32) -> Self {
        Self {
            impulse,
            ..Default::default()
        }
    }

    /// Jump behavior configured from the game config
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            impulse: config.gameplay.jump_impulse,
            jump_key: config.controls.jump,
        }
    }
}

impl Component for JumpBehaviour {
    fn type_name(&self) -> &'static str {
        "JumpBehaviour"
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>, _delta_time: f32) {
        if !ctx.input.is_focused() || !ctx.input.was_key_pressed(self.jump_key) {
            return;
        }
        let impulse = Vec3::new(0.0, 0.0, self.impulse);
        if let Some(body) = ctx.sibling_mut::<RigidBody>() {
            body.apply_impulse(impulse);
        }
    }

    fn to_ron(&self) -> Option<String> {
        ron::ser::to_string(self).ok()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
