//! Movement domain: grounded and air horizontal control.

use crate::movement::AirControl;

#[derive(Debug, Clone, Copy)]
pub struct HorizontalMotionController {
    speed: f32,
    air: AirControl,
}

impl HorizontalMotionController {
    pub fn new(speed: f32, air: AirControl) -> Self {
        Self { speed, air }
    }

    /// Horizontal velocity for the next fixed step.
    pub fn next_velocity_x(&self, input: f32, grounded: bool, vx: f32, dt: f32) -> f32 {
        let input = input.clamp(-1.0, 1.0);

        if grounded {
            return input * self.speed;
        }

        let max = self.air.max_air_speed;
        if vx.abs() > max && input != 0.0 && input.signum() == vx.signum() {
            // Pushing into an overspeed (e.g. from an impulse): bleed it off, stop at the cap
            let slowed = vx - self.air.drag * vx.signum() * dt;
            if vx > 0.0 {
                slowed.max(max)
            } else {
                slowed.min(-max)
            }
        } else if input != 0.0 {
            (vx + self.air.acceleration * input.signum() * dt).clamp(-max, max)
        } else {
            vx
        }
    }
}
