// Zoom position and camera height auto-leveling
use bevy::prelude::*;
use crate::constants::*;
use crate::math_utils::lerp_clamped;

/// Normalized zoom plus the height band it maps onto.
/// `zoom_position` 0 is fully zoomed out (max height), 1 fully zoomed in.
#[derive(Reflect, Clone, Copy, Debug, PartialEq)]
pub struct ZoomState {
    pub zoom_position: f32,
    pub min_height: f32,
    pub max_height: f32,
    pub dampening: f32,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            zoom_position: 0.0,
            min_height: MIN_HEIGHT,
            max_height: MAX_HEIGHT,
            dampening: HEIGHT_DAMPENING,
        }
    }
}

/// Zoom deltas for one tick. A `None` sensitivity means that input is disabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZoomInput {
    pub scroll: f32,
    pub scroll_sensitivity: Option<f32>,
    pub direction: f32,
    pub keyboard_sensitivity: Option<f32>,
}

impl ZoomState {
    /// Accumulate this tick's zoom deltas and clamp to [0, 1]
    pub fn apply_zoom(&mut self, dt: f32, input: &ZoomInput) {
        if let Some(sensitivity) = input.scroll_sensitivity {
            self.zoom_position += input.scroll * dt * sensitivity;
        }
        if let Some(sensitivity) = input.keyboard_sensitivity {
            self.zoom_position += input.direction * dt * sensitivity;
        }
        self.zoom_position = self.zoom_position.clamp(0.0, 1.0);
    }

    pub fn target_height(&self) -> f32 {
        lerp_clamped(self.max_height, self.min_height, self.zoom_position)
    }

    /// Vertical position the rig settles toward for a measured ground distance.
    /// A probe miss reports 0, which doubles the target.
    pub fn settle_height(&self, ground_distance: f32) -> f32 {
        let target = self.target_height();
        target + height_difference(target, ground_distance)
    }

    /// One full height step: zoom, then blend `current_y` toward the settle height
    pub fn step(&mut self, current_y: f32, dt: f32, input: &ZoomInput, ground_distance: Option<f32>) -> f32 {
        self.apply_zoom(dt, input);
        let goal = match ground_distance {
            Some(distance) => self.settle_height(distance),
            None => self.target_height(),
        };
        blend_height(current_y, goal, dt * self.dampening)
    }
}

#[inline]
pub fn height_difference(target_height: f32, ground_distance: f32) -> f32 {
    if ground_distance == target_height {
        0.0
    } else {
        target_height - ground_distance
    }
}

/// Frame-rate dependent damping: the blend factor is `dt * dampening`, clamped to 1
#[inline]
pub fn blend_height(current_y: f32, goal_y: f32, rate: f32) -> f32 {
    lerp_clamped(current_y, goal_y, rate)
}

/// Distance from the probe origin to the hit point, or 0 on a miss
#[inline]
pub fn ground_distance(origin: Vec3, hit_point: Option<Vec3>) -> f32 {
    hit_point.map_or(0.0, |point| point.distance(origin))
}
