//! Content domain: RON-backed configuration loaded at startup.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::{MOVEMENT_SCHEMA_VERSION, MovementFile};
pub use loader::{ContentLoadError, load_movement_tuning, parse_movement_tuning};

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::path::PathBuf;

use crate::movement::MovementTuning;

/// Where content files are read from.
#[derive(Resource, Debug, Clone)]
pub struct ContentPaths {
    pub movement: PathBuf,
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self {
            movement: PathBuf::from("assets/data/movement.ron"),
        }
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPaths>()
            .init_resource::<MovementTuning>()
            .add_systems(Startup, (load_content, apply_world_gravity).chain());
    }
}

/// Replace the default tuning with movement.ron. A missing file keeps the
/// defaults; a malformed or invalid one stops the app.
pub fn load_content(
    paths: Res<ContentPaths>,
    mut tuning: ResMut<MovementTuning>,
    mut app_exit: MessageWriter<AppExit>,
) {
    match load_movement_tuning(&paths.movement) {
        Ok(loaded) => {
            info!(
                "Loaded movement tuning from {}: speed={}, jump_height={}, peak={}s, fall_mult={}",
                paths.movement.display(),
                loaded.speed,
                loaded.jump_height,
                loaded.jump_peak_duration,
                loaded.fall_multiplier
            );
            *tuning = loaded;
        }
        Err(e) if e.is_missing() => {
            warn!("{}, using default movement tuning", e);
        }
        Err(e) => {
            error!("{}", e);
            app_exit.write(AppExit::error());
        }
    }
}

pub(crate) fn apply_world_gravity(mut commands: Commands, tuning: Res<MovementTuning>) {
    commands.insert_resource(Gravity(Vec2::NEG_Y * tuning.gravity));
}
