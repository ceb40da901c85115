//! Movement domain: contact-based ground tracking.

use std::collections::HashSet;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundPolicy};

/// Bodies currently in supporting contact with the character.
#[derive(Debug, Clone)]
pub struct GroundContactTracker {
    contacts: HashSet<Entity>,
    ground_layer: GameLayer,
    slope_tolerance: f32,
    policy: GroundPolicy,
}

impl GroundContactTracker {
    pub fn new(ground_layer: GameLayer, slope_tolerance: f32, policy: GroundPolicy) -> Self {
        Self {
            contacts: HashSet::new(),
            ground_layer,
            slope_tolerance,
            policy,
        }
    }

    /// Record a contact if it supports the character.
    ///
    /// `normals` point from the other body toward the character. Returns true
    /// when the character went from airborne to grounded.
    pub fn on_contact_begin(
        &mut self,
        body: Entity,
        layers: LayerMask,
        normals: impl IntoIterator<Item = Vec2>,
    ) -> bool {
        if !self.is_supporting(layers, normals) {
            return false;
        }
        let was_grounded = self.is_grounded();
        self.contacts.insert(body);
        !was_grounded
    }

    /// Forget a contact. Returns true when the last supporting contact ended.
    pub fn on_contact_end(&mut self, body: Entity) -> bool {
        self.contacts.remove(&body) && self.contacts.is_empty()
    }

    pub fn is_grounded(&self) -> bool {
        !self.contacts.is_empty()
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    pub fn slope_tolerance(&self) -> f32 {
        self.slope_tolerance
    }

    fn is_supporting(&self, layers: LayerMask, normals: impl IntoIterator<Item = Vec2>) -> bool {
        if layers.0 & LayerMask::from(self.ground_layer).0 == 0 {
            return false;
        }
        match self.policy {
            GroundPolicy::LayerOnly => true,
            GroundPolicy::SlopeFiltered => normals
                .into_iter()
                .any(|normal| normal.y >= self.slope_tolerance),
        }
    }
}
