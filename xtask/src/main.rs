//! Build automation tasks for Doodle Jump
//!
//! Usage:
//!   cargo xtask build-web       # Build WASM + page into dist/web
//!   cargo xtask package-itch    # Zip dist/web for itch.io upload
//!   cargo xtask bundle-macos    # Build "Doodle Jump.app" into dist/macos

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const BIN_NAME: &str = "doodle-jump";
const APP_NAME: &str = "Doodle Jump";
const SPRITES: [&str; 3] = ["background.png", "player2.png", "platform.png"];

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for Doodle Jump")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build WASM for web deployment
    BuildWeb,
    /// Create zip file ready for itch.io upload
    PackageItch,
    /// Build a macOS .app bundle with the sprites under Contents/Resources
    BundleMacos,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb => build_web(),
        Commands::PackageItch => package_itch(),
        Commands::BundleMacos => bundle_macos(),
    }
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live one level below the project root")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Download a file from URL to destination
fn download_file(url: &str, dest: &Path) -> Result<()> {
    println!("Downloading {}...", url);
    run_cmd(
        Command::new("curl")
            .args(["-L", "-o"])
            .arg(dest)
            .arg(url),
    )
}

/// Copy the three sprites (and the tuning file, if present) into `dst`
fn copy_assets(root: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    let assets = root.join("assets");
    for file in SPRITES {
        std::fs::copy(assets.join(file), dst.join(file))
            .with_context(|| format!("Missing asset {}", file))?;
    }
    let tuning = assets.join("tuning.ron");
    if tuning.exists() {
        std::fs::copy(&tuning, dst.join("tuning.ron"))?;
    }
    Ok(())
}

/// Build WASM for web deployment
fn build_web() -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist/web");

    println!("Building WASM...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--target", "wasm32-unknown-unknown"]),
    )?;

    // Clean and create dist folder
    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    println!("Copying files to dist/web...");
    let wasm = format!("{}.wasm", BIN_NAME);
    std::fs::copy(
        root.join("target/wasm32-unknown-unknown/release").join(&wasm),
        dist.join(&wasm),
    )
    .context("WASM binary not found after build")?;
    std::fs::copy(root.join("web/index.html"), dist.join("index.html"))?;

    // Download macroquad JS bundle
    let mq_js = dist.join("mq_js_bundle.js");
    if !mq_js.exists() {
        download_file(
            "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js",
            &mq_js,
        )?;
    }

    copy_assets(&root, &dist.join("assets"))?;

    println!("Web build complete: dist/web/");
    Ok(())
}

/// Create zip for itch.io
fn package_itch() -> Result<()> {
    build_web()?;

    let root = project_root()?;
    let dist = root.join("dist");
    let zip_name = format!("{}-itch.zip", BIN_NAME);
    let zip_path = dist.join(&zip_name);

    // Remove old zip if exists
    if zip_path.exists() {
        std::fs::remove_file(&zip_path)?;
    }

    println!("Creating itch.io zip...");
    run_cmd(
        Command::new("zip")
            .current_dir(dist.join("web"))
            .args(["-r", &format!("../{}", zip_name), "."]),
    )?;

    println!("itch.io package ready: dist/{}", zip_name);
    Ok(())
}

/// Minimal Info.plist for a windowed game bundle
fn info_plist() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleName</key>
    <string>{app}</string>
    <key>CFBundleExecutable</key>
    <string>{bin}</string>
    <key>CFBundleIdentifier</key>
    <string>io.itch.{bin}</string>
    <key>CFBundlePackageType</key>
    <string>APPL</string>
    <key>CFBundleShortVersionString</key>
    <string>{version}</string>
    <key>NSHighResolutionCapable</key>
    <true/>
</dict>
</plist>
"#,
        app = APP_NAME,
        bin = BIN_NAME,
        version = env!("CARGO_PKG_VERSION"),
    )
}

/// Build a macOS app bundle. The game looks for its sprites in
/// `../Resources` relative to the executable, which is exactly
/// `Contents/Resources` here.
fn bundle_macos() -> Result<()> {
    let root = project_root()?;
    let app = root.join(format!("dist/macos/{}.app", APP_NAME));
    let contents = app.join("Contents");

    println!("Building native release...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--bin", BIN_NAME]),
    )?;

    if app.exists() {
        std::fs::remove_dir_all(&app)?;
    }
    std::fs::create_dir_all(contents.join("MacOS"))?;

    std::fs::copy(
        root.join("target/release").join(BIN_NAME),
        contents.join("MacOS").join(BIN_NAME),
    )
    .context("Native binary not found after build")?;
    copy_assets(&root, &contents.join("Resources"))?;
    std::fs::write(contents.join("Info.plist"), info_plist())?;

    println!("macOS bundle ready: {}", app.display());
    Ok(())
}
