//! Movement domain: rigid-body access for the controller.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Read/write view of the single body a controller drives.
pub trait RigidBodyHandle {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn gravity_scale(&self) -> f32;
    fn set_gravity_scale(&mut self, scale: f32);
}

/// Borrows the avian components of a body for one controller call.
pub struct BodyHandle<'a> {
    pub velocity: &'a mut LinearVelocity,
    pub gravity_scale: &'a mut GravityScale,
}

impl<'a> BodyHandle<'a> {
    pub fn new(velocity: &'a mut LinearVelocity, gravity_scale: &'a mut GravityScale) -> Self {
        Self {
            velocity,
            gravity_scale,
        }
    }
}

impl RigidBodyHandle for BodyHandle<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity_scale.0
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale.0 = scale;
    }
}
