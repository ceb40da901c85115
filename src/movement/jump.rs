//! Movement domain: timed jump arc (zero-gravity ascent then fall gravity).

use std::time::Duration;

use bevy::prelude::*;

use crate::movement::{JumpParameters, RigidBodyHandle};

/// The deferred "end of ascent" action. At most one exists per controller.
#[derive(Debug, Clone)]
struct PendingResume {
    timer: Timer,
}

impl PendingResume {
    fn new(duration: f32) -> Self {
        Self {
            timer: Timer::from_seconds(duration, TimerMode::Once),
        }
    }

    fn tick(&mut self, delta: Duration) -> bool {
        self.timer.tick(delta).just_finished()
    }

    fn remaining(&self) -> Duration {
        self.timer.remaining()
    }
}

#[derive(Debug, Clone, Default)]
enum JumpState {
    #[default]
    Idle,
    Ascending(PendingResume),
}

#[derive(Debug, Clone)]
pub struct JumpArcController {
    params: JumpParameters,
    state: JumpState,
}

impl JumpArcController {
    pub fn new(params: JumpParameters) -> Self {
        Self {
            params,
            state: JumpState::Idle,
        }
    }

    pub fn params(&self) -> &JumpParameters {
        &self.params
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self.state, JumpState::Ascending(_))
    }

    /// Time left before fall gravity resumes, if ascending.
    pub fn remaining(&self) -> Option<Duration> {
        match &self.state {
            JumpState::Idle => None,
            JumpState::Ascending(pending) => Some(pending.remaining()),
        }
    }

    /// Start the ascent if grounded and idle. Returns whether a jump started.
    pub fn trigger(&mut self, grounded: bool, body: &mut impl RigidBodyHandle) -> bool {
        if !grounded || self.is_ascending() {
            return false;
        }

        let velocity = body.velocity();
        body.set_velocity(Vec2::new(velocity.x, self.params.ascent_speed()));
        body.set_gravity_scale(0.0);
        self.state = JumpState::Ascending(PendingResume::new(self.params.jump_peak_duration()));
        true
    }

    /// Advance the pending resume by a frame delta. Returns true on the step it fires.
    pub fn advance(&mut self, delta: Duration, body: &mut impl RigidBodyHandle) -> bool {
        let JumpState::Ascending(pending) = &mut self.state else {
            return false;
        };
        if !pending.tick(delta) {
            return false;
        }
        self.resume(body);
        true
    }

    /// End the ascent now, with the same effect as the timer firing.
    /// No-op when idle, so it is safe after the timer already fired.
    pub fn cancel(&mut self, body: &mut impl RigidBodyHandle) -> bool {
        if !self.is_ascending() {
            return false;
        }
        self.resume(body);
        true
    }

    fn resume(&mut self, body: &mut impl RigidBodyHandle) {
        let velocity = body.velocity();
        body.set_velocity(Vec2::new(velocity.x, 0.0));
        body.set_gravity_scale(self.params.fall_multiplier());
        self.state = JumpState::Idle;
    }
}
