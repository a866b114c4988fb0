use anyhow::Result;
use glam::Vec2;

use crate::engine::draw::{Canvas, Layer, Rect};
use crate::engine::resources::{TextureId, TextureLoader};

use super::config::{GameConfig, MIN_TILE_SIZE};
use super::level::Level;
use super::object::GameObject;
use super::player;
use super::{Frame, Game, GameWindowDescriptor};

/// The playable prototype: a tiled floor, a player on WASD and Canova
/// tracking the player.
#[derive(Debug)]
pub struct CanovaGame {
    config: GameConfig,
    level: Level,
    background: Option<TextureId>,
}

impl CanovaGame {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            level: Level::new(),
            background: None,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    fn draw_background(&self, screen_size: Vec2, canvas: &mut dyn Canvas) {
        let Some(texture) = self.background else {
            return;
        };
        let tile = self.config.tile_size;
        if !(tile.is_finite() && tile >= MIN_TILE_SIZE) {
            tracing::trace!(target: "canova", tile, "tile size out of range, background skipped");
            return;
        }

        let size = Vec2::splat(tile);
        let cols = (screen_size.x.max(0.0) / tile).ceil() as u32;
        let rows = (screen_size.y.max(0.0) / tile).ceil() as u32;
        for row in 0..rows {
            for col in 0..cols {
                let pos = Vec2::new(col as f32 * tile, row as f32 * tile);
                canvas.image(Layer::Background, texture, Rect::from_pos_size(pos, size));
            }
        }
    }
}

impl Default for CanovaGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game for CanovaGame {
    fn name(&self) -> &str {
        "Canova"
    }

    fn load(&mut self, textures: &mut dyn TextureLoader) -> Result<()> {
        let assets = &self.config.assets;
        let background = textures.load_texture("background", &assets.background)?;
        let player_texture = textures.load_texture("player", &assets.player)?;
        // Registered for later use, nothing spawns a scalpel yet.
        textures.load_texture("scalpel", &assets.scalpel)?;
        let canova_texture = assets
            .canova
            .as_deref()
            .map(|path| textures.load_texture("canova", path))
            .transpose()?;

        let mut level = Level::new();
        let placement = self.config.player;
        level.spawn_player(
            GameObject::player(placement.pos(), placement.size()).with_texture(player_texture),
        )?;

        let placement = self.config.canova;
        let mut canova = GameObject::canova(placement.pos(), placement.size());
        canova.texture = canova_texture;
        level.spawn(canova);

        tracing::info!(target: "canova", objects = level.len(), "level ready");
        self.level = level;
        self.background = Some(background);
        Ok(())
    }

    fn frame(&mut self, frame: &mut Frame<'_>) {
        if let Some(player) = self.level.player_object_mut() {
            player::apply_controls(player, frame.controls);
        }
        self.draw_background(frame.screen_size, frame.canvas);
        self.level.dispatch(frame.canvas);
    }

    fn window_descriptor(&self) -> GameWindowDescriptor {
        let window = &self.config.window;
        GameWindowDescriptor {
            title: Some(window.title.clone()),
            width: Some(window.width),
            height: Some(window.height),
            resizable: window.resizable,
            fullscreen: window.fullscreen,
        }
    }
}
