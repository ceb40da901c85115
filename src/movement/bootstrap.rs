//! Movement domain: player bootstrap from the loaded tuning.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementController, MovementTuning, Player};

/// Spawn the player once tuning is loaded. Invalid tuning stops the app.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
    mut app_exit: MessageWriter<AppExit>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let controller = match MovementController::new(&tuning) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Refusing to activate movement controller: {}", e);
            app_exit.write(AppExit::error());
            return;
        }
    };

    info!(
        "Spawning player: speed={}, ascent_speed={}, peak={}s, slope_tolerance={:.3}, policy={:?}",
        tuning.speed,
        controller.jump().params().ascent_speed(),
        tuning.jump_peak_duration,
        controller.ground().slope_tolerance(),
        tuning.ground_policy
    );

    commands.spawn((
        // Identity & Movement
        (Player, controller),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(24.0, 48.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(24.0, 48.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(tuning.fall_multiplier),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
