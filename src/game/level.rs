use anyhow::{Result, bail, ensure};

use crate::engine::draw::Canvas;

use super::enemy;
use super::object::{ActorKind, EnemyKind, GameObject, ObjectId};

/// Every active object of a play session, in insertion order, plus the one
/// designated as the player.
#[derive(Debug, Default)]
pub struct Level {
    objects: Vec<GameObject>,
    player: Option<ObjectId>,
}

impl Level {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, object: GameObject) -> ObjectId {
        let id = ObjectId(self.objects.len());
        tracing::debug!(target: "canova", id = id.index(), kind = ?object.kind, "spawning object");
        self.objects.push(object);
        id
    }

    pub fn spawn_player(&mut self, object: GameObject) -> Result<ObjectId> {
        ensure!(object.is_player(), "cannot designate {:?} as the player", object.kind);
        let id = self.spawn(object);
        self.set_player(id)?;
        Ok(id)
    }

    pub fn set_player(&mut self, id: ObjectId) -> Result<()> {
        let Some(object) = self.objects.get(id.index()) else {
            bail!("object {} is not in this level", id.index());
        };
        ensure!(object.is_player(), "object {} is not a player", id.index());
        self.player = Some(id);
        Ok(())
    }

    pub fn player(&self) -> Option<ObjectId> {
        self.player
    }

    pub fn player_object(&self) -> Option<&GameObject> {
        self.player.and_then(|id| self.get(id))
    }

    pub fn player_object_mut(&mut self) -> Option<&mut GameObject> {
        let id = self.player?;
        self.get_mut(id)
    }

    pub fn get(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.get(id.index())
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &GameObject)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, object)| (ObjectId(index), object))
    }

    /// One act-then-draw pass over every object in insertion order. Changes
    /// made by an object's act are already visible to the objects after it.
    /// Returns how many objects were processed.
    pub fn dispatch(&mut self, canvas: &mut dyn Canvas) -> usize {
        for index in 0..self.objects.len() {
            let id = ObjectId(index);
            self.act(id, canvas);
            self.objects[index].draw(canvas);
        }
        tracing::trace!(target: "canova", objects = self.objects.len(), "level dispatched");
        self.objects.len()
    }

    fn act(&mut self, id: ObjectId, canvas: &mut dyn Canvas) {
        let Some(object) = self.objects.get(id.index()) else {
            return;
        };
        match object.kind {
            ActorKind::Enemy(EnemyKind::Canova) => {
                enemy::canova_act(object, self.player_object(), canvas);
            }
            // Projectiles carry a movement vector but do not move yet.
            ActorKind::Player | ActorKind::Projectile(_) | ActorKind::Obstacle => {}
        }
    }
}
