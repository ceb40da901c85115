//! Movement domain: the per-character controller that owns every body write.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    GroundContactTracker, HorizontalMotionController, JumpArcController, MovementTuning,
    RigidBodyHandle, TuningError,
};

/// Composes ground tracking, the jump arc and horizontal control for one body.
///
/// All velocity and gravity-scale writes for the character go through this
/// type; the host systems only route input, contacts and time into it.
#[derive(Component, Debug, Clone)]
pub struct MovementController {
    ground: GroundContactTracker,
    jump: JumpArcController,
    horizontal: HorizontalMotionController,
    cancel_ascent_on_landing: bool,
}

impl MovementController {
    pub fn new(tuning: &MovementTuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            ground: GroundContactTracker::new(
                tuning.ground_layer,
                tuning.slope_tolerance(),
                tuning.ground_policy,
            ),
            jump: JumpArcController::new(tuning.jump_parameters()?),
            horizontal: HorizontalMotionController::new(tuning.speed, tuning.air_control()),
            cancel_ascent_on_landing: tuning.cancel_ascent_on_landing,
        })
    }

    pub fn is_grounded(&self) -> bool {
        self.ground.is_grounded()
    }

    pub fn ground(&self) -> &GroundContactTracker {
        &self.ground
    }

    pub fn jump(&self) -> &JumpArcController {
        &self.jump
    }

    /// Apply one fixed step of horizontal control. Leaves `v.y` alone.
    pub fn fixed_step(&self, horizontal_input: f32, dt: f32, body: &mut impl RigidBodyHandle) {
        let velocity = body.velocity();
        let vx = self
            .horizontal
            .next_velocity_x(horizontal_input, self.is_grounded(), velocity.x, dt);
        body.set_velocity(Vec2::new(vx, velocity.y));
    }

    pub fn on_jump(&mut self, body: &mut impl RigidBodyHandle) -> bool {
        let grounded = self.is_grounded();
        self.jump.trigger(grounded, body)
    }

    /// Returns true when this contact grounded the character.
    pub fn on_contact_begin(
        &mut self,
        other: Entity,
        layers: LayerMask,
        normals: impl IntoIterator<Item = Vec2>,
        body: &mut impl RigidBodyHandle,
    ) -> bool {
        let landed = self.ground.on_contact_begin(other, layers, normals);
        if landed && self.cancel_ascent_on_landing && self.jump.cancel(body) {
            debug!("Ascent cut short by landing on {:?}", other);
        }
        landed
    }

    /// Returns true when the last supporting contact ended.
    pub fn on_contact_end(&mut self, other: Entity) -> bool {
        self.ground.on_contact_end(other)
    }

    /// Returns true on the call where the ascent ends.
    pub fn advance_timers(&mut self, delta: Duration, body: &mut impl RigidBodyHandle) -> bool {
        self.jump.advance(delta, body)
    }

    /// Finish any ascent in progress so the body is left under fall gravity.
    /// Contacts stay tracked. Safe to repeat.
    pub fn deactivate(&mut self, body: &mut impl RigidBodyHandle) -> bool {
        self.jump.cancel(body)
    }
}
