//! Input state management
//!
//! Polls keyboard (macroquad) and gamepad once per frame and produces an
//! [`InputState`] snapshot for the simulation.

use macroquad::prelude::{is_key_down, KeyCode};
use super::gamepad::{Gamepad, PadDirections};
use super::Action;

/// Which directions are held this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub const IDLE: InputState = InputState { left: false, right: false };
    #[cfg(test)]
    pub const LEFT: InputState = InputState { left: true, right: false };
    #[cfg(test)]
    pub const RIGHT: InputState = InputState { left: false, right: true };

    /// Build a snapshot from an action query
    pub fn from_actions(down: impl Fn(Action) -> bool) -> Self {
        Self {
            left: down(Action::MoveLeft),
            right: down(Action::MoveRight),
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::IDLE
    }
}

/// Live input devices
pub struct InputSource {
    gamepad: Gamepad,
    pad: PadDirections,
}

impl InputSource {
    pub fn new() -> Self {
        Self {
            gamepad: Gamepad::new(),
            pad: PadDirections::default(),
        }
    }

    /// Call once per frame before reading actions
    pub fn poll(&mut self) {
        self.gamepad.poll();
        self.pad = self.gamepad.directions();
    }

    /// Check if an action is currently held on any device
    pub fn action_down(&self, action: Action) -> bool {
        self.keyboard_down(action) || self.gamepad_down(action)
    }

    /// Snapshot for the simulation
    pub fn snapshot(&self) -> InputState {
        InputState::from_actions(|action| self.action_down(action))
    }

    fn keyboard_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_down(KeyCode::Left),
            Action::MoveRight => is_key_down(KeyCode::Right),
            // Closing the tab is the only way out on the web
            Action::Quit => cfg!(not(target_arch = "wasm32")) && is_key_down(KeyCode::Escape),
        }
    }

    fn gamepad_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.pad.left,
            Action::MoveRight => self.pad.right,
            Action::Quit => cfg!(not(target_arch = "wasm32")) && self.pad.start,
        }
    }
}

impl Default for InputSource {
    fn default() -> Self {
        Self::new()
    }
}
