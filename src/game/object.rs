use glam::Vec2;

use crate::engine::draw::{Canvas, Layer, Rect};
use crate::engine::resources::TextureId;

/// Stable index into a [`Level`](super::level::Level). Objects are never
/// removed, so an id stays valid for the life of its level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) usize);

impl ObjectId {
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Canova,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub movement: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActorKind {
    Player,
    Enemy(EnemyKind),
    Projectile(Projectile),
    Obstacle,
}

/// A positioned, sized sprite. Per-variant behavior is dispatched by the
/// level, which is what lets actors look at each other.
#[derive(Debug, Clone, PartialEq)]
pub struct GameObject {
    pub pos: Vec2,
    size: Vec2,
    pub texture: Option<TextureId>,
    pub kind: ActorKind,
}

impl GameObject {
    pub fn new(kind: ActorKind, pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size: size.max(Vec2::ZERO),
            texture: None,
            kind,
        }
    }

    pub fn player(pos: Vec2, size: Vec2) -> Self {
        Self::new(ActorKind::Player, pos, size)
    }

    pub fn canova(pos: Vec2, size: Vec2) -> Self {
        Self::new(ActorKind::Enemy(EnemyKind::Canova), pos, size)
    }

    pub fn projectile(pos: Vec2, size: Vec2, movement: Vec2) -> Self {
        Self::new(ActorKind::Projectile(Projectile { movement }), pos, size)
    }

    pub fn obstacle(pos: Vec2, size: Vec2) -> Self {
        Self::new(ActorKind::Obstacle, pos, size)
    }

    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Negative components are clamped to zero.
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size.max(Vec2::ZERO);
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, ActorKind::Player)
    }

    /// Places the bound texture over `[pos, pos + size]`. Objects without a
    /// texture emit nothing.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if let Some(texture) = self.texture {
            canvas.image(Layer::Background, texture, self.rect());
        }
    }
}
