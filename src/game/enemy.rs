use glam::Vec2;

use crate::engine::draw::{Canvas, Color, Layer, Stroke};

use super::object::GameObject;

pub const INDICATOR_LENGTH: f32 = 50.0;
pub const INDICATOR_STROKE: Stroke = Stroke::new(10.0, Color::RED);

/// Point `INDICATOR_LENGTH` away from `from` in the direction of `target`.
/// `None` when the two points coincide and there is no direction.
pub fn indicator_endpoint(from: Vec2, target: Vec2) -> Option<Vec2> {
    (target - from)
        .try_normalize()
        .map(|dir| from + dir * INDICATOR_LENGTH)
}

/// Canova aims a line from its center at the player's center. The line is
/// redrawn every frame and leaves no state behind.
pub fn canova_act(canova: &GameObject, player: Option<&GameObject>, canvas: &mut dyn Canvas) {
    let Some(player) = player else {
        tracing::trace!(target: "canova", "no player in level, nothing to aim at");
        return;
    };

    let center = canova.center();
    match indicator_endpoint(center, player.center()) {
        Some(end) => canvas.line(Layer::Foreground, center, end, INDICATOR_STROKE),
        None => {
            tracing::trace!(target: "canova", ?center, "player centered on canova, indicator skipped");
        }
    }
}
