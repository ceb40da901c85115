//! Movement domain: jump, timer and horizontal velocity systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{
    BodyHandle, JumpRequested, MovementController, MovementInput, MovementSuspended, Player,
};

type ActiveBodies<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static mut MovementController,
        &'static mut LinearVelocity,
        &'static mut GravityScale,
    ),
    (With<Player>, Without<MovementSuspended>),
>;

pub(crate) fn handle_jump_requests(
    mut jump_requests: MessageReader<JumpRequested>,
    mut query: ActiveBodies,
) {
    for _ in jump_requests.read() {
        for (entity, mut controller, mut velocity, mut gravity) in &mut query {
            let mut body = BodyHandle::new(&mut velocity, &mut gravity);
            if controller.on_jump(&mut body) {
                debug!(
                    "Jump start {:?}: vy={}, ascent={}s",
                    entity,
                    velocity.y,
                    controller.jump().params().jump_peak_duration()
                );
            }
        }
    }
}

/// Runs on the frame clock, not the fixed step.
pub(crate) fn tick_jump_arcs(time: Res<Time>, mut query: ActiveBodies) {
    let delta = time.delta();

    for (entity, mut controller, mut velocity, mut gravity) in &mut query {
        if !controller.jump().is_ascending() {
            continue;
        }
        let mut body = BodyHandle::new(&mut velocity, &mut gravity);
        if controller.advance_timers(delta, &mut body) {
            debug!(
                "Jump apex {:?}: gravity_scale={}, grounded={}",
                entity,
                gravity.0,
                controller.is_grounded()
            );
        }
    }
}

pub(crate) fn apply_horizontal_motion(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut query: ActiveBodies,
) {
    let dt = time.delta_secs();

    for (_, controller, mut velocity, mut gravity) in &mut query {
        let mut body = BodyHandle::new(&mut velocity, &mut gravity);
        controller.fixed_step(input.horizontal, dt, &mut body);
    }
}

pub(crate) fn release_suspended_controllers(
    mut query: Query<
        (
            Entity,
            &mut MovementController,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        Added<MovementSuspended>,
    >,
) {
    for (entity, mut controller, mut velocity, mut gravity) in &mut query {
        let mut body = BodyHandle::new(&mut velocity, &mut gravity);
        let cut_short = controller.deactivate(&mut body);
        info!(
            "Movement controller on {:?} suspended (ascent ended early: {})",
            entity, cut_short
        );
    }
}
