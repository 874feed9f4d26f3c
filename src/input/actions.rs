//! Action definitions

/// Everything the player can ask for
///
/// Keyboard: Left/Right arrows move, Escape quits (native only).
/// Gamepad: D-pad or left stick moves, Start quits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Quit,
}
