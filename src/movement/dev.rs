//! Movement domain: debug-only test room and controller toggles.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, MovementSuspended, Player, Wall};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Floor
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(800.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(800.0, 40.0),
        ground_layers,
    ));

    // Left wall
    commands.spawn((
        Wall,
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(40.0, 500.0)),
            ..default()
        },
        Transform::from_xyz(-420.0, 50.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(40.0, 500.0),
        wall_layers,
    ));

    // Right wall
    commands.spawn((
        Wall,
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(40.0, 500.0)),
            ..default()
        },
        Transform::from_xyz(420.0, 50.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(40.0, 500.0),
        wall_layers,
    ));

    // Two abutting platforms, for straddling
    for x in [-250.0, -130.0] {
        commands.spawn((
            Ground,
            Sprite {
                color: platform_color,
                custom_size: Some(Vec2::new(120.0, 20.0)),
                ..default()
            },
            Transform::from_xyz(x, -50.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(120.0, 20.0),
            ground_layers,
        ));
    }

    // Gentle ramp (walkable) and steep ramp (beyond the slope limit)
    for (x, degrees) in [(200.0, 25.0_f32), (330.0, 70.0_f32)] {
        commands.spawn((
            Ground,
            Sprite {
                color: platform_color,
                custom_size: Some(Vec2::new(160.0, 20.0)),
                ..default()
            },
            Transform::from_xyz(x, -140.0, 0.0)
                .with_rotation(Quat::from_rotation_z(degrees.to_radians())),
            RigidBody::Static,
            Collider::rectangle(160.0, 20.0),
            ground_layers,
        ));
    }
}

/// P toggles the player's controller on and off.
pub(crate) fn toggle_suspension(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    query: Query<(Entity, Has<MovementSuspended>), With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyP) {
        return;
    }
    for (entity, suspended) in &query {
        if suspended {
            commands.entity(entity).remove::<MovementSuspended>();
            info!("[DEBUG] Movement resumed on {:?}", entity);
        } else {
            commands.entity(entity).insert(MovementSuspended);
        }
    }
}
