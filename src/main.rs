//! Doodle Jump
//!
//! Bounce up an endless column of platforms. Left/Right arrows steer,
//! falling to the floor just bounces you back up.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod config;
mod game;
mod host;
mod input;

use macroquad::prelude::*;
use assets::Assets;
use config::{Tuning, SCREEN_HEIGHT, SCREEN_WIDTH, TUNING_FILE, WINDOW_TITLE};
use game::GameLoop;
use host::{Driver, MacroquadHost};

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Seed for platform placement; differs every launch
fn launch_seed() -> u64 {
    let millis = (macroquad::miniquad::date::now() * 1000.0) as u64;
    millis ^ ((macroquad::rand::rand() as u64) << 32)
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    println!("=== Doodle Jump v{} ===", VERSION);

    let (exe_dir, cwd) = assets::search_roots();
    let tuning = match Tuning::locate(exe_dir.as_deref(), &cwd) {
        Ok((tuning, Some(path))) => {
            println!("Loaded {}", path.display());
            tuning
        }
        Ok((tuning, None)) => tuning,
        Err(e) => {
            eprintln!("Ignoring {}: {}", TUNING_FILE, e);
            Tuning::default()
        }
    };

    let assets = match Assets::load().await {
        Ok(assets) => assets,
        Err(e) => {
            eprintln!("Failed to load assets: {}", e);
            std::process::exit(1);
        }
    };

    let game = GameLoop::new(tuning, assets.sizes(), launch_seed());
    let mut driver = Driver::new(game);
    let mut host = MacroquadHost::new(&assets);

    host::run(&mut driver, &mut host).await;
}
