//! Game core
//!
//! The whole game is one loop: [`GameLoop::advance`] steps the simulation by
//! a fixed tick and [`render`] composes the frame from the resulting state.
//! Neither talks to the window directly; input arrives as an
//! [`InputState`](crate::input::InputState) snapshot and drawing goes
//! through a [`Canvas`].

pub mod render;
pub mod simulation;
pub mod state;
pub mod transform;

pub use render::{render, Canvas};
pub use simulation::GameLoop;
