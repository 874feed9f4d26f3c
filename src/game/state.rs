//! Simulation state
//!
//! Plain value data owned by the game loop. Nothing here references
//! anything else: platforms are just positions in one owned sequence.

use crate::config::{Tuning, SCREEN_WIDTH};

/// The bouncing character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Top-left corner, screen space
    pub x: f64,
    pub y: f64,
    /// Vertical speed in px/tick (positive = falling)
    pub velocity_y: f64,
    /// Controls horizontal mirroring when drawn
    pub facing_right: bool,
}

impl Player {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            velocity_y: 0.0,
            facing_right: true,
        }
    }
}

/// A platform to land on. All platforms share the platform sprite's size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub x: f64,
    pub y: f64,
}

impl Platform {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Platforms present when a game starts
pub const STARTING_PLATFORMS: [Platform; 4] = [
    Platform::new(SCREEN_WIDTH / 2.0, 550.0),
    Platform::new(0.0, 500.0),
    Platform::new(200.0, 400.0),
    Platform::new(300.0, 300.0),
];

/// Everything that changes from one tick to the next
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub player: Player,
    /// Insertion order only; also the draw order
    pub platforms: Vec<Platform>,
    /// Pre-scroll Y of the topmost generated row. Rows are added above it
    /// while it is still below the top of the screen.
    pub highest_platform_y: f64,
}

impl GameState {
    /// Fresh game: player standing on the floor line, four hand-placed platforms
    pub fn new(tuning: &Tuning) -> Self {
        let highest_platform_y = STARTING_PLATFORMS
            .iter()
            .map(|p| p.y)
            .fold(f64::INFINITY, f64::min);

        Self {
            player: Player::new(SCREEN_WIDTH / 2.0, tuning.floor_line()),
            platforms: STARTING_PLATFORMS.to_vec(),
            highest_platform_y,
        }
    }
}
