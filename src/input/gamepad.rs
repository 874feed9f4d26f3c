//! Gamepad support
//!
//! Native: gilrs, first connected pad only.
//! WASM: no gamepad bindings are shipped, so the pad always reads as idle.

/// Left stick X beyond this counts as a held direction
pub const STICK_THRESHOLD: f32 = 0.5;

/// Directional state of a pad for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PadDirections {
    pub left: bool,
    pub right: bool,
    pub start: bool,
}

impl PadDirections {
    /// Combine D-pad buttons with the analog stick
    pub fn from_raw(dpad_left: bool, dpad_right: bool, stick_x: f32, start: bool) -> Self {
        Self {
            left: dpad_left || stick_x <= -STICK_THRESHOLD,
            right: dpad_right || stick_x >= STICK_THRESHOLD,
            start,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::PadDirections;
    use gilrs::{Axis, Button, Gilrs};

    pub struct Gamepad {
        gilrs: Option<Gilrs>,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => Some(gilrs),
                Err(e) => {
                    eprintln!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self { gilrs }
        }

        pub fn poll(&mut self) {
            let Some(gilrs) = self.gilrs.as_mut() else { return };
            // Drain events so gilrs updates its cached button/axis state
            while gilrs.next_event().is_some() {}
        }

        pub fn directions(&self) -> PadDirections {
            let Some(gilrs) = self.gilrs.as_ref() else { return PadDirections::default() };
            let Some((_, gp)) = gilrs.gamepads().next() else { return PadDirections::default() };

            PadDirections::from_raw(
                gp.is_pressed(Button::DPadLeft),
                gp.is_pressed(Button::DPadRight),
                gp.value(Axis::LeftStickX),
                gp.is_pressed(Button::Start),
            )
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::PadDirections;

    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn directions(&self) -> PadDirections {
            PadDirections::default()
        }
    }
}

pub use platform::Gamepad;

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}
