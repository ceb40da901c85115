//! Movement domain: contact-driven ground tracking.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{
    BodyHandle, MovementController, Player, PlayerContactEnded, PlayerContactStarted,
};

/// Turn avian collision messages into player-oriented contact messages.
///
/// Suspended players are routed too, so their contact set stays current.
pub(crate) fn route_player_contacts(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    collisions: Collisions,
    layers_query: Query<&CollisionLayers>,
    players: Query<(), (With<Player>, With<MovementController>)>,
    mut started: MessageWriter<PlayerContactStarted>,
    mut ended: MessageWriter<PlayerContactEnded>,
) {
    for event in collision_start_events.read() {
        for (player, other) in player_sides(event.collider1, event.collider2, |e| players.contains(e))
        {
            let normals = collisions
                .get(player, other)
                .map(|pair| {
                    normals_toward(
                        player,
                        pair.collider1,
                        pair.manifolds.iter().map(|manifold| manifold.normal),
                    )
                })
                .unwrap_or_default();

            started.write(PlayerContactStarted {
                player,
                other,
                layers: memberships(layers_query.get(other).ok()),
                normals,
            });
        }
    }

    for event in collision_end_events.read() {
        for (player, other) in player_sides(event.collider1, event.collider2, |e| players.contains(e))
        {
            ended.write(PlayerContactEnded { player, other });
        }
    }
}

pub(crate) fn apply_player_contacts(
    mut started: MessageReader<PlayerContactStarted>,
    mut ended: MessageReader<PlayerContactEnded>,
    mut players: Query<
        (
            &mut MovementController,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    // Starts first, then ends - removal is unconditional and idempotent
    for contact in started.read() {
        let Ok((mut controller, mut velocity, mut gravity)) = players.get_mut(contact.player)
        else {
            continue;
        };
        let mut body = BodyHandle::new(&mut velocity, &mut gravity);
        if controller.on_contact_begin(
            contact.other,
            contact.layers,
            contact.normals.iter().copied(),
            &mut body,
        ) {
            debug!(
                "Landed on {:?}: contacts={}",
                contact.other,
                controller.ground().contact_count()
            );
        }
    }

    for contact in ended.read() {
        let Ok((mut controller, _, _)) = players.get_mut(contact.player) else {
            continue;
        };
        if controller.on_contact_end(contact.other) {
            debug!("Left ground: last contact {:?} ended", contact.other);
        }
    }
}

/// Each ordering of a collider pair whose first entity is a player.
pub(crate) fn player_sides(
    collider1: Entity,
    collider2: Entity,
    is_player: impl Fn(Entity) -> bool,
) -> impl Iterator<Item = (Entity, Entity)> {
    [(collider1, collider2), (collider2, collider1)]
        .into_iter()
        .filter(move |(player, _)| is_player(*player))
}

/// Orient manifold normals (which point from the pair's first collider to its
/// second) so they point toward `player`.
pub(crate) fn normals_toward(
    player: Entity,
    first_collider: Entity,
    normals: impl IntoIterator<Item = Vec2>,
) -> Vec<Vec2> {
    let flip = if first_collider == player { -1.0 } else { 1.0 };
    normals.into_iter().map(|normal| normal * flip).collect()
}

/// Layer memberships of a collider; avian's default layer when it has none.
pub(crate) fn memberships(layers: Option<&CollisionLayers>) -> LayerMask {
    layers.map(|l| l.memberships).unwrap_or(LayerMask::DEFAULT)
}
