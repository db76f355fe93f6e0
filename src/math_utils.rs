use bevy::prelude::*;

/// Linear interpolation with `t` clamped to [0, 1]
#[inline]
pub fn lerp_clamped(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Move `current` toward `target` by at most `max_delta`, never overshooting
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let to_target = target - current;
    let distance = to_target.length();
    if distance <= max_delta || distance == 0.0 {
        return target;
    }
    current + to_target / distance * max_delta
}

/// Resolve a pair of opposing buttons into -1, 0 or 1.
/// Holding both cancels out.
#[inline]
pub fn axis_direction(positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

/// Yaw (rotation about world up) of a rotation, in radians
#[inline]
pub fn yaw_of(rotation: Quat) -> f32 {
    rotation.to_euler(EulerRot::YXZ).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_clamps_parameter() {
        assert_eq!(lerp_clamped(15.0, 10.0, 0.0), 15.0);
        assert_eq!(lerp_clamped(15.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp_clamped(15.0, 10.0, 0.5), 12.5);
        assert_eq!(lerp_clamped(0.0, 10.0, 3.0), 10.0);
        assert_eq!(lerp_clamped(0.0, 10.0, -1.0), 0.0);
    }

    #[test]
    fn move_towards_stops_at_target() {
        let start = Vec3::ZERO;
        let target = Vec3::new(3.0, 0.0, 4.0);
        let step = move_towards(start, target, 1.0);
        assert!((step.length() - 1.0).abs() < 1e-5);
        assert_eq!(move_towards(start, target, 10.0), target);
        assert_eq!(move_towards(target, target, 1.0), target);
    }

    #[test]
    fn opposing_buttons_cancel() {
        assert_eq!(axis_direction(true, true), 0.0);
        assert_eq!(axis_direction(false, false), 0.0);
        assert_eq!(axis_direction(true, false), 1.0);
        assert_eq!(axis_direction(false, true), -1.0);
    }

    #[test]
    fn yaw_ignores_pitch() {
        let rotation = Quat::from_euler(EulerRot::YXZ, 0.7, -0.9, 0.0);
        assert!((yaw_of(rotation) - 0.7).abs() < 1e-4);
    }
}
