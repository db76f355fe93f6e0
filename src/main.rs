use bevy::prelude::*;
use rts_camera_rig::camera::RtsCameraPlugin;
use rts_camera_rig::selection::SelectionPlugin;
use rts_camera_rig::setup::{follow_hotkeys_system, log_selection_system, setup_scene, spawn_units, wander_system};
use rts_camera_rig::terrain::{spawn_terrain, TerrainPlugin};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "RTS Camera Rig".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((TerrainPlugin, RtsCameraPlugin, SelectionPlugin))
        .add_systems(Startup, (setup_scene, spawn_units.after(spawn_terrain)))
        .add_systems(Update, (
            wander_system,
            follow_hotkeys_system,
            log_selection_system,
        ))
        .run();
}
