use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

/// Non-owning handle to a texture held by a [`TextureTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(u32);

impl TextureId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

pub trait TextureLoader {
    /// Loads the image at `path` and registers it under `name`. Loading a
    /// name twice returns the first id without touching the disk again.
    fn load_texture(&mut self, name: &str, path: &Path) -> Result<TextureId>;
}

/// Owns every GPU texture for the session, keyed by name.
pub struct TextureTable {
    ctx: egui::Context,
    handles: Vec<egui::TextureHandle>,
    by_name: HashMap<String, TextureId>,
}

impl TextureTable {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            handles: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    pub fn id(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    pub fn egui_id(&self, id: TextureId) -> Option<egui::TextureId> {
        self.handles.get(id.index()).map(|handle| handle.id())
    }

    pub fn texture_count(&self) -> usize {
        self.handles.len()
    }
}

impl TextureLoader for TextureTable {
    fn load_texture(&mut self, name: &str, path: &Path) -> Result<TextureId> {
        if let Some(id) = self.id(name) {
            tracing::debug!(target: "engine", name, "texture already registered");
            return Ok(id);
        }

        let image = load_image(path)?;
        let [width, height] = image.size;
        let handle = self
            .ctx
            .load_texture(name, image, egui::TextureOptions::LINEAR);

        let id = TextureId::new(self.handles.len() as u32);
        self.handles.push(handle);
        self.by_name.insert(name.to_string(), id);

        tracing::info!(
            target: "engine",
            name,
            path = %path.display(),
            width,
            height,
            "texture loaded"
        );
        Ok(id)
    }
}

pub fn load_image(path: &Path) -> Result<egui::ColorImage> {
    let image = image::open(path)
        .with_context(|| format!("unable to load image {}", path.display()))?
        .to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        image.as_raw(),
    ))
}
