//! Input handling
//!
//! Keyboard arrows plus, on native builds, the first connected gamepad.
//! Everything is folded into a plain [`InputState`] snapshot once per frame
//! so the simulation never talks to the platform directly.

mod actions;
mod gamepad;
mod state;

pub use actions::Action;
pub use state::{InputSource, InputState};
