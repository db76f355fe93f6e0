// RTS camera rig - keyboard/edge/pan movement, zoom with height auto-leveling,
// rotation, target following and map limits
//
// Submodules:
// - settings: CameraRigSettings component and input bindings
// - input: Per-tick input snapshot read from Bevy's input resources
// - height: Zoom position and ground-relative height blending
// - movement: Planar motion, following, rotation, limits and the full rig step

mod height;
mod input;
mod movement;
mod settings;

use bevy::ecs::system::SystemParam;
use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings, RayCastVisibility};
use bevy::prelude::*;
use crate::types::GroundLayers;

pub use height::ZoomState;
pub use settings::{CameraRigSettings, InputBindings, InputButton, TickMode};

use input::CameraInputReader;
use movement::step_rig;

/// Camera rig state. The entity's own `Transform` is the rig.
#[derive(Component, Reflect, Default, Clone, Debug)]
#[reflect(Component)]
#[require(CameraRigSettings)]
pub struct RtsCamera {
    pub zoom: ZoomState,
}

pub struct RtsCameraPlugin;

impl Plugin for RtsCameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<RtsCamera>()
            .register_type::<CameraRigSettings>()
            .register_type::<GroundLayers>()
            .add_systems(Update, rts_camera_variable_tick)
            .add_systems(FixedUpdate, rts_camera_fixed_tick);
    }
}

/// Everything a rig tick touches
#[derive(SystemParam)]
pub struct RigDriver<'w, 's> {
    time: Res<'w, Time>,
    input: CameraInputReader<'w, 's>,
    ray_cast: MeshRayCast<'w, 's>,
    ground_layers: Query<'w, 's, &'static GroundLayers>,
    targets: Query<'w, 's, &'static GlobalTransform, Without<RtsCamera>>,
    rigs: Query<'w, 's, (Entity, &'static mut Transform, &'static mut RtsCamera, &'static mut CameraRigSettings)>,
}

impl RigDriver<'_, '_> {
    /// Step every rig configured for `mode`. `Res<Time>` already reflects the
    /// schedule we run in, so fixed rigs see the fixed timestep.
    fn drive(&mut self, mode: TickMode) {
        let dt = self.time.delta_secs();
        let ray_cast = &mut self.ray_cast;
        let ground_layers = &self.ground_layers;

        for (entity, mut transform, mut rig, mut settings) in self.rigs.iter_mut() {
            if settings.tick_mode != mode {
                continue;
            }

            // A despawned target drops the rig back to free movement
            let follow_target = match settings.target_follow {
                Some(target) => match self.targets.get(target) {
                    Ok(global) => Some(global.translation()),
                    Err(_) => {
                        info!("Camera {:?} lost follow target {:?}", entity, target);
                        settings.reset_target();
                        None
                    }
                },
                None => None,
            };

            let input = self.input.read(&settings.bindings);
            let mask = settings.ground_mask;

            step_rig(&mut transform, &mut rig, &settings, &input, follow_target, dt, |origin| {
                probe_ground(ray_cast, ground_layers, origin, mask)
            });
        }
    }
}

/// Cast straight down and return the nearest hit on a layer in `mask`
fn probe_ground(
    ray_cast: &mut MeshRayCast,
    ground_layers: &Query<&GroundLayers>,
    origin: Vec3,
    mask: GroundLayers,
) -> Option<Vec3> {
    let filter = |entity: Entity| {
        ground_layers
            .get(entity)
            .copied()
            .unwrap_or_default()
            .intersects(mask)
    };
    let settings = MeshRayCastSettings::default()
        .with_visibility(RayCastVisibility::Visible)
        .with_filter(&filter);

    ray_cast
        .cast_ray(Ray3d::new(origin, Dir3::NEG_Y), &settings)
        .first()
        .map(|(_, hit)| hit.point)
}

/// System: Drive rigs on the variable-rate frame schedule
pub fn rts_camera_variable_tick(mut driver: RigDriver) {
    driver.drive(TickMode::Variable);
}

/// System: Drive rigs on the fixed-timestep schedule
pub fn rts_camera_fixed_tick(mut driver: RigDriver) {
    driver.drive(TickMode::Fixed);
}
