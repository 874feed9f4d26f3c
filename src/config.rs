//! Game configuration
//!
//! The logical canvas is fixed; everything that shapes the feel of the game
//! lives in [`Tuning`], which can be overridden by an optional RON file.
//! Any field left out of the file keeps its default.

use crate::assets;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Logical canvas width (the host letterboxes to this)
pub const SCREEN_WIDTH: f64 = 480.0;
/// Logical canvas height
pub const SCREEN_HEIGHT: f64 = 640.0;

pub const WINDOW_TITLE: &str = "Doodle Jump";

/// Optional tuning file, looked up through the same paths as the sprites
pub const TUNING_FILE: &str = "tuning.ron";

/// Physics and generation constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Added to vertical velocity every tick (px/tick²)
    pub gravity: f64,
    /// Vertical velocity after any bounce (negative = up)
    pub jump_speed: f64,
    /// Uniform scale applied to the player sprite
    pub player_scale: f64,
    /// Horizontal step per tick while a direction is held
    pub move_speed: f64,
    /// Distance of the floor line from the bottom of the canvas
    pub floor_margin: f64,
    /// Moving left past this X wraps to the right edge.
    /// Tied to the reference art, not to the live sprite width.
    pub wrap_left: f64,
    /// Moving right past this X wraps to 0
    pub wrap_right: f64,
    /// Vertical distance between generated platform rows
    pub platform_spacing: f64,
    /// Fixed simulation rate
    pub ticks_per_second: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.4,
            jump_speed: -18.0,
            player_scale: 0.25,
            move_speed: 5.0,
            floor_margin: 60.0,
            wrap_left: -40.0,
            wrap_right: 520.0,
            platform_spacing: 100.0,
            ticks_per_second: 60.0,
        }
    }
}

impl Tuning {
    /// Y coordinate the player can never fall below
    pub fn floor_line(&self) -> f64 {
        SCREEN_HEIGHT - self.floor_margin
    }

    /// Climbing above this line scrolls the camera
    pub fn midline(&self) -> f64 {
        SCREEN_HEIGHT / 2.0
    }

    /// Length of one simulation step in seconds
    pub fn tick_duration(&self) -> f64 {
        1.0 / self.ticks_per_second
    }

    /// Parse tuning from a RON string
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = ron::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a RON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Load the tuning file from the first asset search path that has one,
    /// falling back to defaults when none does. A file that exists but
    /// cannot be read or parsed is still an error.
    pub fn locate(exe_dir: Option<&Path>, cwd: &Path) -> Result<(Self, Option<PathBuf>), ConfigError> {
        match assets::resolve(TUNING_FILE, exe_dir, cwd) {
            Ok(path) => Ok((Self::load(&path)?, Some(path))),
            Err(_) => Ok((Self::default(), None)),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.ticks_per_second > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "ticks_per_second must be positive, got {}",
                self.ticks_per_second
            )));
        }
        if !(self.platform_spacing >= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "platform_spacing must be at least 1, got {}",
                self.platform_spacing
            )));
        }
        if !(self.player_scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "player_scale must be positive, got {}",
                self.player_scale
            )));
        }
        Ok(())
    }
}

/// Error type for configuration loading
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// File could not be read
    Io(String),
    /// File is not valid RON for [`Tuning`]
    Parse(String),
    /// Values parsed but make no sense (e.g. zero tick rate)
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "I/O error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid tuning: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e.to_string())
    }
}
