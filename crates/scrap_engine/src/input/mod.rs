//! Input state tracking
//!
//! The host feeds device events into [`InputState`]; gameplay components read
//! the resulting per-frame snapshot. Components are expected to skip all input
//! processing while the window is unfocused.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// Snapshot of the input devices, updated by host events once per frame
pub struct InputState {
    held: HashSet<KeyCode>,
    pressed: HashSet<KeyCode>,
    released: HashSet<KeyCode>,
    mouse_held: HashSet<MouseButton>,
    cursor: (f64, f64),
    focused: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Create a new input state with window focus assumed
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            pressed: HashSet::new(),
            released: HashSet::new(),
            mouse_held: HashSet::new(),
            cursor: (0.0, 0.0),
            focused: true,
        }
    }

    /// Clear the per-frame edge sets; called by the host at frame boundaries
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    /// Record a key transition
    pub fn handle_key(&mut self, key: KeyCode, down: bool) {
        if down {
            if self.held.insert(key) {
                self.pressed.insert(key);
            }
        } else if self.held.remove(&key) {
            self.released.insert(key);
        }
    }

    /// Record a mouse button transition
    pub fn handle_mouse_button(&mut self, button: MouseButton, down: bool) {
        if down {
            self.mouse_held.insert(button);
        } else {
            self.mouse_held.remove(&button);
        }
    }

    /// Record cursor movement
    pub fn handle_cursor_move(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);
    }

    /// Record a window focus change
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            log::debug!("window focus changed: {}", focused);
        }
        self.focused = focused;
    }

    /// Whether the window currently has input focus
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether a key is currently held down
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Whether a key went down this frame
    pub fn was_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Whether a key went up this frame
    pub fn was_key_released(&self, key: KeyCode) -> bool {
        self.released.contains(&key)
    }

    /// Whether a mouse button is currently held down
    pub fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.mouse_held.contains(&button)
    }

    /// Current cursor position in window coordinates
    pub fn cursor_position(&self) -> (f64, f64) {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_down_and_up() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::A, true);
        assert!(input.is_key_down(KeyCode::A));
        assert!(input.was_key_pressed(KeyCode::A));

        input.handle_key(KeyCode::A, false);
        assert!(!input.is_key_down(KeyCode::A));
        assert!(input.was_key_released(KeyCode::A));
    }

    #[test]
    fn test_pressed_edge_is_single_frame() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::Space, true);
        assert!(input.was_key_pressed(KeyCode::Space));

        input.begin_frame();
        assert!(!input.was_key_pressed(KeyCode::Space));
        // Still held across the frame boundary
        assert!(input.is_key_down(KeyCode::Space));
    }

    #[test]
    fn test_repeated_down_events_do_not_retrigger_press() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::D, true);
        input.begin_frame();
        input.handle_key(KeyCode::D, true);
        assert!(!input.was_key_pressed(KeyCode::D));
    }

    #[test]
    fn test_focus_flag() {
        let mut input = InputState::new();
        assert!(input.is_focused());
        input.set_focused(false);
        assert!(!input.is_focused());
    }
}
