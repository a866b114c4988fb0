use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use glam::Vec2;
use serde::Deserialize;

/// Smallest background tile edge accepted, in logical pixels.
pub const MIN_TILE_SIZE: f32 = 1.0;

/// Game settings, read from a RON file. Missing fields fall back to
/// [`GameConfig::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub assets: AssetConfig,
    pub tile_size: f32,
    pub player: Placement,
    pub canova: Placement,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            assets: AssetConfig::default(),
            tile_size: 64.0,
            player: Placement::new([0.0, 0.0], [64.0, 64.0]),
            canova: Placement::new([600.0, 400.0], [64.0, 64.0]),
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(source: &str) -> Result<Self> {
        let config: Self = ron::from_str(source).context("failed to parse RON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.tile_size.is_finite() && self.tile_size >= MIN_TILE_SIZE,
            "tile_size must be a finite value of at least {MIN_TILE_SIZE}, got {}",
            self.tile_size
        );
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Canova".to_string(),
            width: 1280,
            height: 720,
            resizable: true,
            fullscreen: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub background: PathBuf,
    pub player: PathBuf,
    pub scalpel: PathBuf,
    pub canova: Option<PathBuf>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            background: PathBuf::from("assets/background.png"),
            player: PathBuf::from("assets/ProtagonistFront.png"),
            scalpel: PathBuf::from("assets/CanovaScalpello.png"),
            canova: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Placement {
    pub pos: [f32; 2],
    pub size: [f32; 2],
}

impl Placement {
    pub const fn new(pos: [f32; 2], size: [f32; 2]) -> Self {
        Self { pos, size }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::from_array(self.pos)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::from_array(self.size)
    }
}
