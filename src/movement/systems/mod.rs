//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{apply_player_contacts, route_player_contacts};
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_horizontal_motion, handle_jump_requests, release_suspended_controllers, tick_jump_arcs,
};
