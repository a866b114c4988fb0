use crate::engine::input::Controls;

use super::object::GameObject;

/// Distance covered per frame while a direction key is held.
pub const STEP: f32 = 5.0;

/// Moves the player for one frame. Opposite keys cancel out and nothing keeps
/// the player on screen.
pub fn apply_controls(player: &mut GameObject, controls: Controls) {
    if controls.up {
        player.pos.y -= STEP;
    }
    if controls.down {
        player.pos.y += STEP;
    }
    if controls.left {
        player.pos.x -= STEP;
    }
    if controls.right {
        player.pos.x += STEP;
    }
}
