//! Asset loading
//!
//! Three static images, loaded once at startup. Native builds look next to
//! the executable first (`../Resources`, the macOS app bundle layout) and
//! then under `assets/`. The web build only has `assets/`.

use macroquad::prelude::{load_texture, FilterMode, Texture2D};
use std::path::{Path, PathBuf};

pub const BACKGROUND_FILE: &str = "background.png";
pub const PLAYER_FILE: &str = "player2.png";
pub const PLATFORM_FILE: &str = "platform.png";

/// Directory searched relative to the working directory
pub const ASSETS_DIR: &str = "assets";
/// Directory searched relative to the executable
pub const BUNDLE_RESOURCES_DIR: &str = "../Resources";

/// The images the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background,
    Player,
    Platform,
}

impl Sprite {
    pub fn file_name(&self) -> &'static str {
        match self {
            Sprite::Background => BACKGROUND_FILE,
            Sprite::Player => PLAYER_FILE,
            Sprite::Platform => PLATFORM_FILE,
        }
    }
}

/// Native pixel size of an image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSize {
    pub width: f64,
    pub height: f64,
}

impl SpriteSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// The sprite dimensions the simulation depends on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSizes {
    pub player: SpriteSize,
    pub platform: SpriteSize,
}

/// Error type for asset loading
#[derive(Debug, Clone, PartialEq)]
pub enum AssetError {
    /// File was not found in any search location
    NotFound { file: String, searched: Vec<PathBuf> },
    /// File exists but could not be loaded as an image
    Decode { path: String, message: String },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::NotFound { file, searched } => {
                write!(f, "asset not found: {} (searched", file)?;
                for path in searched {
                    write!(f, " {}", path.display())?;
                }
                write!(f, ")")
            }
            AssetError::Decode { path, message } => {
                write!(f, "failed to load image {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for AssetError {}

/// Candidate locations for an asset, in lookup order
pub fn search_paths(file: &str, exe_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);
    if let Some(dir) = exe_dir {
        paths.push(dir.join(BUNDLE_RESOURCES_DIR).join(file));
    }
    paths.push(Path::new(ASSETS_DIR).join(file));
    paths
}

/// Resolve an asset to the first search location that exists
pub fn resolve(file: &str, exe_dir: Option<&Path>, cwd: &Path) -> Result<PathBuf, AssetError> {
    let searched = search_paths(file, exe_dir);
    searched
        .iter()
        .map(|p| cwd.join(p))
        .find(|p| p.is_file())
        .ok_or_else(|| AssetError::NotFound {
            file: file.to_string(),
            searched,
        })
}

/// Directory of the running executable and the working directory.
/// Either may be unavailable (always on the web); lookups then find nothing there.
pub fn search_roots() -> (Option<PathBuf>, PathBuf) {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    (exe_dir, cwd)
}

#[cfg(not(target_arch = "wasm32"))]
fn locate(file: &str) -> Result<String, AssetError> {
    let (exe_dir, cwd) = search_roots();
    let path = resolve(file, exe_dir.as_deref(), &cwd)?;
    Ok(path.to_string_lossy().into_owned())
}

#[cfg(target_arch = "wasm32")]
fn locate(file: &str) -> Result<String, AssetError> {
    Ok(format!("{}/{}", ASSETS_DIR, file))
}

async fn load_sprite(sprite: Sprite) -> Result<Texture2D, AssetError> {
    let path = locate(sprite.file_name())?;
    let texture = load_texture(&path).await.map_err(|e| AssetError::Decode {
        path: path.clone(),
        message: e.to_string(),
    })?;
    texture.set_filter(FilterMode::Nearest);
    println!("Loaded {} ({}x{})", path, texture.width(), texture.height());
    Ok(texture)
}

/// GPU textures for every sprite
pub struct Assets {
    pub background: Texture2D,
    pub player: Texture2D,
    pub platform: Texture2D,
}

impl Assets {
    /// Load all three images. Any failure is fatal for the caller.
    pub async fn load() -> Result<Self, AssetError> {
        Ok(Self {
            background: load_sprite(Sprite::Background).await?,
            player: load_sprite(Sprite::Player).await?,
            platform: load_sprite(Sprite::Platform).await?,
        })
    }

    pub fn texture(&self, sprite: Sprite) -> &Texture2D {
        match sprite {
            Sprite::Background => &self.background,
            Sprite::Player => &self.player,
            Sprite::Platform => &self.platform,
        }
    }

    pub fn size(&self, sprite: Sprite) -> SpriteSize {
        let texture = self.texture(sprite);
        SpriteSize::new(texture.width() as f64, texture.height() as f64)
    }

    pub fn sizes(&self) -> SpriteSizes {
        SpriteSizes {
            player: self.size(Sprite::Player),
            platform: self.size(Sprite::Platform),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_bundle_resources_searched_first() {
        let paths = search_paths(PLAYER_FILE, Some(Path::new("/app/Contents/MacOS")));
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/app/Contents/MacOS/../Resources/player2.png"),
                PathBuf::from("assets/player2.png"),
            ]
        );
    }

    #[test]
    fn test_resolve_prefers_bundle() {
        let root = TempDir::new().unwrap();
        let exe_dir = root.path().join("Contents/MacOS");
        let resources = root.path().join("Contents/Resources");
        std::fs::create_dir_all(&exe_dir).unwrap();
        std::fs::create_dir_all(&resources).unwrap();
        std::fs::create_dir_all(root.path().join(ASSETS_DIR)).unwrap();
        std::fs::write(resources.join(PLATFORM_FILE), b"png").unwrap();
        std::fs::write(root.path().join(ASSETS_DIR).join(PLATFORM_FILE), b"png").unwrap();

        let found = resolve(PLATFORM_FILE, Some(&exe_dir), root.path()).unwrap();
        assert_eq!(found, exe_dir.join("../Resources").join(PLATFORM_FILE));
    }

    #[test]
    fn test_resolve_falls_back_to_assets_dir() {
        let root = TempDir::new().unwrap();
        std::fs::create_dir_all(root.path().join(ASSETS_DIR)).unwrap();
        std::fs::write(root.path().join(ASSETS_DIR).join(BACKGROUND_FILE), b"png").unwrap();

        let found = resolve(BACKGROUND_FILE, Some(&root.path().join("bin")), root.path()).unwrap();
        assert_eq!(found, root.path().join("assets/background.png"));
    }

    #[test]
    fn test_missing_asset_reports_search_paths() {
        let root = TempDir::new().unwrap();
        let err = resolve(PLAYER_FILE, None, root.path()).unwrap_err();
        match &err {
            AssetError::NotFound { file, searched } => {
                assert_eq!(file, PLAYER_FILE);
                assert_eq!(searched.len(), 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().contains("assets/player2.png"));
    }

    #[test]
    fn test_sprite_size_scaling() {
        let size = SpriteSize::new(160.0, 200.0).scaled(0.25);
        assert_eq!(size, SpriteSize::new(40.0, 50.0));
    }
}
