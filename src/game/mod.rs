pub mod config;
pub mod enemy;
pub mod level;
pub mod object;
pub mod player;
pub mod prototype;

use anyhow::Result;
use glam::Vec2;

use crate::engine::draw::Canvas;
use crate::engine::input::Controls;
use crate::engine::resources::TextureLoader;

#[derive(Debug, Clone)]
pub struct GameWindowDescriptor {
    pub title: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub resizable: bool,
    pub fullscreen: bool,
}

impl Default for GameWindowDescriptor {
    fn default() -> Self {
        Self {
            title: None,
            width: None,
            height: None,
            resizable: true,
            fullscreen: false,
        }
    }
}

/// Everything a game sees of the host during one frame.
pub struct Frame<'a> {
    pub controls: Controls,
    /// Logical size of the drawable area.
    pub screen_size: Vec2,
    pub canvas: &'a mut dyn Canvas,
}

pub trait Game {
    fn name(&self) -> &str;

    /// Called once, after the renderer exists and before the first frame.
    fn load(&mut self, textures: &mut dyn TextureLoader) -> Result<()>;

    fn frame(&mut self, frame: &mut Frame<'_>);

    fn window_descriptor(&self) -> GameWindowDescriptor {
        GameWindowDescriptor::default()
    }
}

pub use prototype::CanovaGame;
