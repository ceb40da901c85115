//! Movement domain: input sampling for locomotion.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{JumpRequested, MovementInput};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<MovementInput>,
    mut jump_requests: MessageWriter<JumpRequested>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }
    input.horizontal = x;

    if keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK) {
        jump_requests.write(JumpRequested);
    }
}
