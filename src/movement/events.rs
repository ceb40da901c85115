//! Movement domain: locomotion messages.

use avian2d::prelude::*;
use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Edge-triggered jump press. Written once per physical press, never while held.
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpRequested;

impl Message for JumpRequested {}

/// A collider started touching a player. `normals` point toward the player.
#[derive(Debug, Clone)]
pub struct PlayerContactStarted {
    pub player: Entity,
    pub other: Entity,
    pub layers: LayerMask,
    pub normals: Vec<Vec2>,
}

impl Message for PlayerContactStarted {}

#[derive(Debug, Clone, Copy)]
pub struct PlayerContactEnded {
    pub player: Entity,
    pub other: Entity,
}

impl Message for PlayerContactEnded {}
