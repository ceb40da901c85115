use avian2d::prelude::*;
use bevy::prelude::*;

use platformer_movement::{ContentPlugin, CorePlugin, MovementPlugin};

fn main() -> AppExit {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Platformer Movement".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((CorePlugin, ContentPlugin, MovementPlugin))
        .run()
}
