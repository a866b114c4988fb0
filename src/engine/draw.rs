use glam::Vec2;

use super::resources::TextureId;

/// Axis-aligned screen rectangle, `min` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Background holds tiles and sprites, foreground holds transient overlays
/// drawn on top of everything else in the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Background,
    Foreground,
}

/// Sink for the draw primitives a frame emits.
pub trait Canvas {
    fn image(&mut self, layer: Layer, texture: TextureId, rect: Rect);
    fn line(&mut self, layer: Layer, from: Vec2, to: Vec2, stroke: Stroke);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Image {
        layer: Layer,
        texture: TextureId,
        rect: Rect,
    },
    Line {
        layer: Layer,
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
    },
}

/// Canvas that keeps every command in submission order instead of painting.
#[derive(Debug, Default)]
pub struct DrawRecorder {
    commands: Vec<DrawCommand>,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn images(&self) -> impl Iterator<Item = (Layer, TextureId, Rect)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Image {
                layer,
                texture,
                rect,
            } => Some((*layer, *texture, *rect)),
            DrawCommand::Line { .. } => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Layer, Vec2, Vec2, Stroke)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Line {
                layer,
                from,
                to,
                stroke,
            } => Some((*layer, *from, *to, *stroke)),
            DrawCommand::Image { .. } => None,
        })
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for DrawRecorder {
    fn image(&mut self, layer: Layer, texture: TextureId, rect: Rect) {
        self.commands.push(DrawCommand::Image {
            layer,
            texture,
            rect,
        });
    }

    fn line(&mut self, layer: Layer, from: Vec2, to: Vec2, stroke: Stroke) {
        self.commands.push(DrawCommand::Line {
            layer,
            from,
            to,
            stroke,
        });
    }
}
