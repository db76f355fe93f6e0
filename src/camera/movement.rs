// Rig motion: free movement, following, rotation and map limits
use bevy::prelude::*;
use crate::math_utils::{move_towards, yaw_of};

use super::height::{ground_distance, ZoomInput};
use super::input::{screen_edge_direction, CameraInput};
use super::settings::CameraRigSettings;
use super::RtsCamera;

/// Rotate a planar (x = right, y = forward) vector into the ground plane
#[inline]
pub fn planar_to_world(planar: Vec2, yaw: f32) -> Vec3 {
    Quat::from_rotation_y(yaw) * Vec3::new(planar.x, 0.0, -planar.y)
}

/// Keyboard, screen-edge and pan movement for one tick, in world space
pub fn free_move_delta(input: &CameraInput, settings: &CameraRigSettings, yaw: f32, dt: f32) -> Vec3 {
    let mut planar = Vec2::ZERO;

    if settings.use_keyboard_input {
        planar += input.keyboard_axes * settings.keyboard_movement_speed * dt;
    }

    if settings.use_screen_edge_input {
        let edge = screen_edge_direction(input.cursor, input.window_size, settings.screen_edge_border);
        planar += edge * settings.screen_edge_movement_speed * dt;
    }

    // Drag the world: moving the mouse right slides the view left
    if settings.use_panning && input.panning && input.mouse_axis != Vec2::ZERO {
        planar += -input.mouse_axis * settings.panning_speed * dt;
    }

    planar_to_world(planar, yaw)
}

/// Approach the target in the ground plane, keeping the rig's own height
pub fn follow_step(position: Vec3, target: Vec3, offset: Vec3, speed: f32, dt: f32) -> Vec3 {
    let goal = Vec3::new(target.x, position.y, target.z) + offset;
    move_towards(position, goal, dt * speed)
}

/// Yaw change for one tick, in radians about +Y.
/// The rotate-left key turns the view right and dragging right turns it left.
pub fn rotation_delta(input: &CameraInput, settings: &CameraRigSettings, dt: f32) -> f32 {
    // Accumulated clockwise (seen from above) degrees
    let mut clockwise = 0.0;
    if settings.use_keyboard_rotation {
        clockwise += input.rotation_direction * dt * settings.rotation_speed;
    }
    if settings.use_mouse_rotation && input.mouse_rotating {
        clockwise -= input.mouse_axis.x * dt * settings.mouse_rotation_speed;
    }
    // Positive rotation about +Y is counter-clockwise from above
    -f32::to_radians(clockwise)
}

pub fn limit_position(position: Vec3, settings: &CameraRigSettings) -> Vec3 {
    if !settings.limit_map {
        return position;
    }
    Vec3::new(
        position.x.clamp(-settings.limit_x, settings.limit_x),
        position.y,
        position.z.clamp(-settings.limit_y, settings.limit_y),
    )
}

/// Advance one rig by one tick.
///
/// `follow_target` is the target's world position when it still exists.
/// `probe_ground` casts the downward ray from the given origin and
/// returns the hit point; it is only called when auto height is on.
pub fn step_rig(
    transform: &mut Transform,
    rig: &mut RtsCamera,
    settings: &CameraRigSettings,
    input: &CameraInput,
    follow_target: Option<Vec3>,
    dt: f32,
    probe_ground: impl FnOnce(Vec3) -> Option<Vec3>,
) {
    match follow_target {
        Some(target) => {
            transform.translation = follow_step(
                transform.translation,
                target,
                settings.target_offset,
                settings.following_speed,
                dt,
            );
        }
        None => {
            let yaw = yaw_of(transform.rotation);
            transform.translation += free_move_delta(input, settings, yaw, dt);
        }
    }

    let clearance = settings.auto_height.then(|| {
        let origin = transform.translation;
        ground_distance(origin, probe_ground(origin))
    });
    let zoom_input = ZoomInput {
        scroll: input.scroll,
        scroll_sensitivity: settings
            .use_scroll_wheel_zooming
            .then_some(settings.scroll_wheel_zoom_sensitivity),
        direction: input.zoom_direction,
        keyboard_sensitivity: settings
            .use_keyboard_zooming
            .then_some(settings.keyboard_zoom_sensitivity),
    };
    transform.translation.y = rig.zoom.step(transform.translation.y, dt, &zoom_input, clearance);

    let yaw_delta = rotation_delta(input, settings, dt);
    if yaw_delta != 0.0 {
        transform.rotate_y(yaw_delta);
    }

    transform.translation = limit_position(transform.translation, settings);
}
