use canova::engine::draw::{DrawCommand, DrawRecorder, Layer, Rect};
use canova::engine::resources::TextureId;
use canova::game::level::Level;
use canova::game::object::{ActorKind, GameObject, ObjectId};
use glam::Vec2;

#[test]
fn test_draw_places_image_at_pos_and_size() {
    let object = GameObject::obstacle(Vec2::new(-12.5, 300.0), Vec2::new(64.0, 32.0))
        .with_texture(TextureId::new(3));
    let mut recorder = DrawRecorder::new();

    object.draw(&mut recorder);

    assert_eq!(
        recorder.commands(),
        &[DrawCommand::Image {
            layer: Layer::Background,
            texture: TextureId::new(3),
            rect: Rect {
                min: Vec2::new(-12.5, 300.0),
                max: Vec2::new(51.5, 332.0),
            },
        }]
    );
}

#[test]
fn test_draw_follows_current_position() {
    let mut object =
        GameObject::player(Vec2::ZERO, Vec2::splat(64.0)).with_texture(TextureId::new(0));
    object.pos = Vec2::new(10.0, -5.0);

    let mut recorder = DrawRecorder::new();
    object.draw(&mut recorder);

    let (_, _, rect) = recorder.images().next().expect("one image");
    assert_eq!(rect.min, Vec2::new(10.0, -5.0));
    assert_eq!(rect.max, Vec2::new(74.0, 59.0));
    assert_eq!(rect.size(), object.size());
}

#[test]
fn test_draw_without_texture_emits_nothing() {
    let object = GameObject::canova(Vec2::new(600.0, 400.0), Vec2::splat(64.0));
    let mut recorder = DrawRecorder::new();

    object.draw(&mut recorder);

    assert!(recorder.is_empty());
}

#[test]
fn test_negative_size_is_clamped() {
    let mut object = GameObject::obstacle(Vec2::ZERO, Vec2::new(-4.0, 8.0));
    assert_eq!(object.size(), Vec2::new(0.0, 8.0));

    object.set_size(Vec2::new(16.0, -1.0));
    assert_eq!(object.size(), Vec2::new(16.0, 0.0));
}

#[test]
fn test_player_reference_survives_appends() {
    let mut level = Level::new();
    let player = level
        .spawn_player(GameObject::player(Vec2::ZERO, Vec2::splat(64.0)))
        .expect("player spawns");

    for i in 0..5 {
        level.spawn(GameObject::obstacle(Vec2::splat(i as f32 * 10.0), Vec2::ONE));
    }

    assert_eq!(level.player(), Some(player));
    assert_eq!(level.len(), 6);
    let resolved = level.player_object().expect("player resolves");
    assert!(matches!(resolved.kind, ActorKind::Player));
}

#[test]
fn test_level_without_player() {
    let mut level = Level::new();
    level.spawn(GameObject::obstacle(Vec2::ZERO, Vec2::ONE));

    assert_eq!(level.player(), None);
    assert!(level.player_object().is_none());
    assert!(level.player_object_mut().is_none());
}

#[test]
fn test_set_player_rejects_unknown_and_non_player_objects() {
    let mut level = Level::new();
    let obstacle = level.spawn(GameObject::obstacle(Vec2::ZERO, Vec2::ONE));

    assert!(level.set_player(ObjectId::from_index(7)).is_err());
    assert!(level.set_player(obstacle).is_err());
    assert!(
        level
            .spawn_player(GameObject::canova(Vec2::ZERO, Vec2::ONE))
            .is_err()
    );
    assert_eq!(level.player(), None);
    assert_eq!(level.len(), 1, "rejected player must not be appended");

    let player = level.spawn(GameObject::player(Vec2::ZERO, Vec2::ONE));
    level.set_player(player).expect("player kind accepted");
    assert_eq!(level.player(), Some(player));
}

#[test]
fn test_dispatch_processes_every_object_in_order() {
    let mut level = Level::new();
    let n = 7;
    for i in 0..n {
        level.spawn(
            GameObject::obstacle(Vec2::new(i as f32, 0.0), Vec2::ONE)
                .with_texture(TextureId::new(i)),
        );
    }

    let mut recorder = DrawRecorder::new();
    let processed = level.dispatch(&mut recorder);

    assert_eq!(processed, n as usize);
    let order: Vec<TextureId> = recorder.images().map(|(_, texture, _)| texture).collect();
    let expected: Vec<TextureId> = (0..n).map(TextureId::new).collect();
    assert_eq!(order, expected);
}

#[test]
fn test_dispatch_acts_before_draw_per_object() {
    let mut level = Level::new();
    level
        .spawn_player(
            GameObject::player(Vec2::ZERO, Vec2::splat(64.0)).with_texture(TextureId::new(0)),
        )
        .expect("player spawns");
    level.spawn(
        GameObject::canova(Vec2::new(600.0, 400.0), Vec2::splat(64.0))
            .with_texture(TextureId::new(1)),
    );

    let mut recorder = DrawRecorder::new();
    level.dispatch(&mut recorder);

    let commands = recorder.commands();
    assert_eq!(commands.len(), 3);
    assert!(matches!(
        commands[0],
        DrawCommand::Image { texture, .. } if texture == TextureId::new(0)
    ));
    // Canova's act (the indicator) comes before its own sprite.
    assert!(matches!(
        commands[1],
        DrawCommand::Line {
            layer: Layer::Foreground,
            ..
        }
    ));
    assert!(matches!(
        commands[2],
        DrawCommand::Image { texture, .. } if texture == TextureId::new(1)
    ));
}

#[test]
fn test_inert_projectile_is_drawn_and_does_not_move() {
    let mut level = Level::new();
    let id = level.spawn(
        GameObject::projectile(Vec2::new(400.0, 400.0), Vec2::splat(64.0), Vec2::new(3.0, 1.0))
            .with_texture(TextureId::new(2)),
    );

    let mut recorder = DrawRecorder::new();
    level.dispatch(&mut recorder);
    level.dispatch(&mut recorder);

    assert_eq!(level.get(id).map(|o| o.pos), Some(Vec2::new(400.0, 400.0)));
    assert_eq!(recorder.images().count(), 2);
    assert_eq!(recorder.lines().count(), 0);
}
