//! Movement domain: tuning and input resources.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::movement::GameLayer;

/// Rejected movement configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TuningError {
    #[error("jump_peak_duration must be greater than 0 (got {0})")]
    NonPositivePeakDuration(f32),
    #[error("{field} must be a finite value (got {value})")]
    NotFinite { field: &'static str, value: f32 },
    #[error("{field} must not be negative (got {value})")]
    NegativeValue { field: &'static str, value: f32 },
    #[error("slope_angle must lie in [0, pi/2] radians (got {0})")]
    SlopeAngleOutOfRange(f32),
}

/// How a contact qualifies as ground on entry. Exit is unconditional either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum GroundPolicy {
    /// Ground layer and at least one normal within the slope tolerance.
    #[default]
    SlopeFiltered,
    /// Any contact on the ground layer.
    LayerOnly,
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Grounded horizontal speed at full input.
    pub speed: f32,
    pub jump_height: f32,
    /// Length of the zero-gravity ascent, in seconds. Must be > 0.
    pub jump_peak_duration: f32,
    /// Gravity scale restored when the ascent ends.
    pub fall_multiplier: f32,
    pub ground_layer: GameLayer,
    pub air_drag: f32,
    pub air_acceleration: f32,
    pub max_air_speed: f32,
    /// Steepest slope still counted as ground, in radians.
    pub slope_angle: f32,
    pub ground_policy: GroundPolicy,
    /// End the ascent early when a supporting contact begins mid-jump.
    pub cancel_ascent_on_landing: bool,
    /// World gravity magnitude handed to the physics engine.
    pub gravity: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 320.0,
            jump_height: 140.0,
            jump_peak_duration: 0.35,
            fall_multiplier: 2.5,
            ground_layer: GameLayer::Ground,
            air_drag: 900.0,
            air_acceleration: 1400.0,
            max_air_speed: 280.0,
            slope_angle: 50f32.to_radians(),
            ground_policy: GroundPolicy::SlopeFiltered,
            cancel_ascent_on_landing: false,
            gravity: 1800.0,
        }
    }
}

impl MovementTuning {
    /// Check every field the controller relies on. Fails on the first problem found.
    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            ("speed", self.speed),
            ("jump_height", self.jump_height),
            ("jump_peak_duration", self.jump_peak_duration),
            ("fall_multiplier", self.fall_multiplier),
            ("air_drag", self.air_drag),
            ("air_acceleration", self.air_acceleration),
            ("max_air_speed", self.max_air_speed),
            ("slope_angle", self.slope_angle),
            ("gravity", self.gravity),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { field, value });
            }
        }

        if self.jump_peak_duration <= 0.0 {
            return Err(TuningError::NonPositivePeakDuration(self.jump_peak_duration));
        }

        let non_negative = [
            ("speed", self.speed),
            ("jump_height", self.jump_height),
            ("fall_multiplier", self.fall_multiplier),
            ("air_drag", self.air_drag),
            ("air_acceleration", self.air_acceleration),
            ("max_air_speed", self.max_air_speed),
            ("gravity", self.gravity),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(TuningError::NegativeValue { field, value });
            }
        }

        if !(0.0..=FRAC_PI_2).contains(&self.slope_angle) {
            return Err(TuningError::SlopeAngleOutOfRange(self.slope_angle));
        }

        Ok(())
    }

    /// Minimum vertical component of a supporting contact normal.
    pub fn slope_tolerance(&self) -> f32 {
        self.slope_angle.cos()
    }

    pub fn jump_parameters(&self) -> Result<JumpParameters, TuningError> {
        JumpParameters::new(
            self.jump_height,
            self.jump_peak_duration,
            self.fall_multiplier,
        )
    }

    pub fn air_control(&self) -> AirControl {
        AirControl {
            drag: self.air_drag,
            acceleration: self.air_acceleration,
            max_air_speed: self.max_air_speed,
        }
    }
}

/// Validated jump arc parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpParameters {
    jump_height: f32,
    jump_peak_duration: f32,
    fall_multiplier: f32,
}

impl JumpParameters {
    pub fn new(
        jump_height: f32,
        jump_peak_duration: f32,
        fall_multiplier: f32,
    ) -> Result<Self, TuningError> {
        // Also rejects NaN.
        if !(jump_peak_duration > 0.0) {
            return Err(TuningError::NonPositivePeakDuration(jump_peak_duration));
        }
        Ok(Self {
            jump_height,
            jump_peak_duration,
            fall_multiplier,
        })
    }

    pub fn jump_peak_duration(&self) -> f32 {
        self.jump_peak_duration
    }

    pub fn fall_multiplier(&self) -> f32 {
        self.fall_multiplier
    }

    /// Constant vertical speed held for the whole ascent.
    pub fn ascent_speed(&self) -> f32 {
        self.jump_height / self.jump_peak_duration
    }
}

/// Air-control tuning, read-only for the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirControl {
    pub drag: f32,
    pub acceleration: f32,
    pub max_air_speed: f32,
}

/// Horizontal axis sampled once per frame and consumed by the fixed step.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub horizontal: f32,
}
