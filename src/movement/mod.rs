//! Movement domain: locomotion plugin wiring and public exports.

mod body;
mod bootstrap;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod ground;
mod horizontal;
mod jump;
mod resources;
mod systems;


pub use body::{BodyHandle, RigidBodyHandle};
pub use components::{GameLayer, Ground, MovementSuspended, Player, Wall};
pub use controller::MovementController;
pub use events::{JumpRequested, PlayerContactEnded, PlayerContactStarted};
pub use ground::GroundContactTracker;
pub use horizontal::HorizontalMotionController;
pub use jump::JumpArcController;
pub use resources::{
    AirControl, GroundPolicy, JumpParameters, MovementInput, MovementTuning, TuningError,
};

use bevy::prelude::*;

use crate::content::load_content;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_horizontal_motion, apply_player_contacts, handle_jump_requests, read_input,
    release_suspended_controllers, route_player_contacts, tick_jump_arcs,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<JumpRequested>()
            .add_message::<PlayerContactStarted>()
            .add_message::<PlayerContactEnded>()
            .add_systems(Startup, spawn_player.after(load_content))
            .add_systems(
                Update,
                (
                    release_suspended_controllers,
                    read_input,
                    // Tick before handling so a fresh jump gets its full ascent
                    tick_jump_arcs,
                    handle_jump_requests,
                )
                    .chain(),
            )
            .add_systems(
                FixedUpdate,
                (
                    route_player_contacts,
                    apply_player_contacts,
                    apply_horizontal_motion,
                )
                    .chain(),
            );

        #[cfg(feature = "dev-tools")]
        {
            app.add_systems(Startup, dev::spawn_test_room)
                .add_systems(Update, dev::toggle_suspension);
        }
    }
}
