// Demo scene: light, camera rig, wandering selectable units and hotkeys
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::PI;
use crate::camera::{CameraRigSettings, RtsCamera};
use crate::constants::*;
use crate::selection::{SelectionCamera, SelectionFinished, SelectionState};
use crate::terrain::TerrainHeightmap;
use crate::types::{GroundLayers, Selectable};

const UNIT_HALF_HEIGHT: f32 = 0.5;
const UNIT_WANDER_SPEED: f32 = 1.5;

/// Slow random walk so a followed unit actually goes somewhere
#[derive(Component)]
pub struct Wander {
    pub velocity: Vec3,
}

pub fn setup_scene(mut commands: Commands) {
    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform {
            translation: Vec3::new(0.0, 50.0, 0.0),
            rotation: Quat::from_rotation_x(-PI / 4.0),
            ..default()
        },
    ));

    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.4, 0.4, 0.6),
        brightness: 300.0,
        affects_lightmapped_meshes: false,
    });

    // Camera rig: leveled against the terrain only, not the units
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, CAMERA_INITIAL_HEIGHT, 20.0)
            .with_rotation(Quat::from_euler(EulerRot::YXZ, 0.0, CAMERA_INITIAL_PITCH, 0.0)),
        RtsCamera::default(),
        CameraRigSettings {
            ground_mask: GroundLayers::GROUND,
            ..default()
        },
        SelectionCamera,
        Name::new("RtsCamera"),
    ));

    commands.spawn((
        Text::new(
            "WASD/Edges: Move | MMB: Pan | Scroll/E/Q: Zoom | Z/X/RMB: Rotate\n\
             LMB drag: Select | F: Follow selection | Esc: Stop following",
        ),
        TextFont { font_size: 16.0, ..default() },
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            bottom: Val::Px(10.0),
            ..default()
        },
    ));
}

/// System: Scatter selectable units over the terrain
pub fn spawn_units(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    heightmap: Res<TerrainHeightmap>,
) {
    let mut rng = rand::thread_rng();
    let mesh = meshes.add(Capsule3d::new(0.3, 2.0 * UNIT_HALF_HEIGHT - 0.6));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.8, 0.5, 0.2),
        ..default()
    });

    for index in 0..DEMO_UNIT_COUNT {
        let x = rng.gen_range(-DEMO_UNIT_SPREAD..DEMO_UNIT_SPREAD);
        let z = rng.gen_range(-DEMO_UNIT_SPREAD..DEMO_UNIT_SPREAD);
        let heading = rng.gen_range(0.0..std::f32::consts::TAU);
        let y = heightmap.sample_height(x, z) + UNIT_HALF_HEIGHT;

        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_xyz(x, y, z),
            Selectable,
            Wander {
                velocity: Vec3::new(heading.cos(), 0.0, heading.sin()) * UNIT_WANDER_SPEED,
            },
            Name::new(format!("Unit {index}")),
        ));
    }

    info!("Spawned {} selectable units", DEMO_UNIT_COUNT);
}

/// System: Walk units around, bouncing off the spread limits and hugging the ground
pub fn wander_system(
    time: Res<Time>,
    heightmap: Option<Res<TerrainHeightmap>>,
    mut units: Query<(&mut Transform, &mut Wander)>,
) {
    let Some(heightmap) = heightmap else { return };
    let dt = time.delta_secs();

    for (mut transform, mut wander) in units.iter_mut() {
        let mut next = transform.translation + wander.velocity * dt;
        if next.x.abs() > DEMO_UNIT_SPREAD {
            wander.velocity.x = -wander.velocity.x;
            next.x = next.x.clamp(-DEMO_UNIT_SPREAD, DEMO_UNIT_SPREAD);
        }
        if next.z.abs() > DEMO_UNIT_SPREAD {
            wander.velocity.z = -wander.velocity.z;
            next.z = next.z.clamp(-DEMO_UNIT_SPREAD, DEMO_UNIT_SPREAD);
        }
        next.y = heightmap.sample_height(next.x, next.z) + UNIT_HALF_HEIGHT;
        transform.translation = next;
    }
}

/// System: F follows the first unit of the last selection, Escape stops following
pub fn follow_hotkeys_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    selection_state: Res<SelectionState>,
    mut rigs: Query<&mut CameraRigSettings>,
) {
    if keyboard.just_pressed(KeyCode::KeyF) {
        if let Some(&target) = selection_state.selected.first() {
            for mut settings in rigs.iter_mut() {
                settings.set_target(target);
            }
            info!("Camera following {:?}", target);
        }
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        for mut settings in rigs.iter_mut().filter(|settings| settings.is_following()) {
            settings.reset_target();
            info!("Camera stopped following");
        }
    }
}

/// System: Log the members of each finished selection
pub fn log_selection_system(mut finished: EventReader<SelectionFinished>, names: Query<&Name>) {
    for event in finished.read() {
        for &entity in &event.selected {
            if let Ok(name) = names.get(entity) {
                debug!("-> {}", name);
            }
        }
    }
}
