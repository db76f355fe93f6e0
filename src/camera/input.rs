// Per-tick camera input snapshot
use bevy::ecs::system::SystemParam;
use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use crate::constants::*;
use crate::math_utils::axis_direction;

use super::settings::InputBindings;

/// Everything one rig tick needs from the input devices.
/// Planar vectors use x = right, y = forward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraInput {
    pub keyboard_axes: Vec2,
    pub cursor: Option<Vec2>,       // Window pixels, top-left origin
    pub window_size: Vec2,
    pub mouse_axis: Vec2,           // Scaled motion, x right / y up
    pub scroll: f32,                // Positive = wheel away from the user
    pub zoom_direction: f32,        // +1 raises zoom position (zoom-out key), -1 lowers it (zoom-in key)
    pub rotation_direction: f32,    // +1 turns clockwise seen from above (rotate-left key)
    pub panning: bool,
    pub mouse_rotating: bool,
}

/// Reads the Bevy input resources into a [`CameraInput`]
#[derive(SystemParam)]
pub struct CameraInputReader<'w, 's> {
    keys: Res<'w, ButtonInput<KeyCode>>,
    mouse_buttons: Res<'w, ButtonInput<MouseButton>>,
    mouse_motion: Res<'w, AccumulatedMouseMotion>,
    mouse_scroll: Res<'w, AccumulatedMouseScroll>,
    windows: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
}

impl CameraInputReader<'_, '_> {
    pub fn read(&self, bindings: &InputBindings) -> CameraInput {
        let keys = &*self.keys;
        let mouse = &*self.mouse_buttons;
        let any_held = |codes: &[KeyCode]| keys.any_pressed(codes.iter().copied());

        let keyboard_axes = Vec2::new(
            axis_direction(any_held(&bindings.move_right), any_held(&bindings.move_left)),
            axis_direction(any_held(&bindings.move_forward), any_held(&bindings.move_back)),
        );

        let (cursor, window_size) = match self.windows.single() {
            Ok(window) => (window.cursor_position(), window.size()),
            Err(_) => (None, Vec2::ZERO),
        };

        let motion = self.mouse_motion.delta;
        let mouse_axis = Vec2::new(motion.x, -motion.y) * MOUSE_AXIS_SCALE;

        let scroll = scroll_amount(self.mouse_scroll.unit, self.mouse_scroll.delta.y);

        CameraInput {
            keyboard_axes,
            cursor,
            window_size,
            mouse_axis,
            scroll,
            zoom_direction: axis_direction(
                bindings.zoom_out.pressed(keys, mouse),
                bindings.zoom_in.pressed(keys, mouse),
            ),
            rotation_direction: axis_direction(
                bindings.rotate_left.pressed(keys, mouse),
                bindings.rotate_right.pressed(keys, mouse),
            ),
            panning: bindings.panning.pressed(keys, mouse),
            mouse_rotating: bindings.mouse_rotation.pressed(keys, mouse),
        }
    }
}

/// Normalize wheel input so one notch and a similar touchpad swipe zoom alike
pub fn scroll_amount(unit: MouseScrollUnit, delta_y: f32) -> f32 {
    match unit {
        MouseScrollUnit::Line => delta_y * SCROLL_LINE_SCALE,
        MouseScrollUnit::Pixel => delta_y * SCROLL_PIXEL_SCALE,
    }
}

/// Direction produced by the cursor resting in a border strip of the window.
/// Left/right wins over nothing on x, top/bottom on y; corners scroll diagonally.
pub fn screen_edge_direction(cursor: Option<Vec2>, window_size: Vec2, border: f32) -> Vec2 {
    let Some(cursor) = cursor else { return Vec2::ZERO };

    let in_band = |v: f32, lo: f32, hi: f32| v >= lo && v < hi;
    let inside_x = in_band(cursor.x, 0.0, window_size.x);
    let inside_y = in_band(cursor.y, 0.0, window_size.y);

    let x = if inside_y && in_band(cursor.x, 0.0, border) {
        -1.0
    } else if inside_y && in_band(cursor.x, window_size.x - border, window_size.x) {
        1.0
    } else {
        0.0
    };

    // Cursor y grows downward, so the top strip moves the rig forward
    let y = if inside_x && in_band(cursor.y, 0.0, border) {
        1.0
    } else if inside_x && in_band(cursor.y, window_size.y - border, window_size.y) {
        -1.0
    } else {
        0.0
    };

    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    const WINDOW: Vec2 = Vec2::new(800.0, 600.0);

    /// Read the default bindings with `held` keys down and no window or mouse activity
    fn read_holding(held: &[KeyCode]) -> CameraInput {
        let mut world = World::new();
        let mut keys = ButtonInput::<KeyCode>::default();
        for &key in held {
            keys.press(key);
        }
        world.insert_resource(keys);
        world.init_resource::<ButtonInput<MouseButton>>();
        world.init_resource::<AccumulatedMouseMotion>();
        world.init_resource::<AccumulatedMouseScroll>();
        world
            .run_system_once(|reader: CameraInputReader| reader.read(&InputBindings::default()))
            .expect("reader runs without a window")
    }

    #[test]
    fn opposing_rotation_and_zoom_keys_cancel() {
        let input = read_holding(&[KeyCode::KeyZ, KeyCode::KeyX, KeyCode::KeyE, KeyCode::KeyQ]);
        assert_eq!(input.rotation_direction, 0.0);
        assert_eq!(input.zoom_direction, 0.0);
    }

    #[test]
    fn single_keys_pick_their_direction() {
        assert_eq!(read_holding(&[KeyCode::KeyZ]).rotation_direction, 1.0);
        assert_eq!(read_holding(&[KeyCode::KeyX]).rotation_direction, -1.0);
        // Zoom-in lowers the zoom position, zoom-out raises it
        assert_eq!(read_holding(&[KeyCode::KeyE]).zoom_direction, -1.0);
        assert_eq!(read_holding(&[KeyCode::KeyQ]).zoom_direction, 1.0);
    }

    #[test]
    fn movement_keys_combine_and_cancel() {
        let input = read_holding(&[KeyCode::KeyW, KeyCode::ArrowRight]);
        assert_eq!(input.keyboard_axes, Vec2::new(1.0, 1.0));

        let input = read_holding(&[KeyCode::KeyA, KeyCode::KeyD, KeyCode::ArrowDown]);
        assert_eq!(input.keyboard_axes, Vec2::new(0.0, -1.0));
        assert_eq!(input.cursor, None);
        assert!(!input.panning && !input.mouse_rotating);
    }

    #[test]
    fn cursor_in_centre_does_not_scroll() {
        let dir = screen_edge_direction(Some(Vec2::new(400.0, 300.0)), WINDOW, 25.0);
        assert_eq!(dir, Vec2::ZERO);
    }

    #[test]
    fn edges_map_to_planar_directions() {
        assert_eq!(screen_edge_direction(Some(Vec2::new(5.0, 300.0)), WINDOW, 25.0), Vec2::new(-1.0, 0.0));
        assert_eq!(screen_edge_direction(Some(Vec2::new(790.0, 300.0)), WINDOW, 25.0), Vec2::new(1.0, 0.0));
        assert_eq!(screen_edge_direction(Some(Vec2::new(400.0, 5.0)), WINDOW, 25.0), Vec2::new(0.0, 1.0));
        assert_eq!(screen_edge_direction(Some(Vec2::new(400.0, 590.0)), WINDOW, 25.0), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn corner_scrolls_diagonally() {
        let dir = screen_edge_direction(Some(Vec2::new(2.0, 2.0)), WINDOW, 25.0);
        assert_eq!(dir, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn missing_cursor_does_not_scroll() {
        assert_eq!(screen_edge_direction(None, WINDOW, 25.0), Vec2::ZERO);
    }

    #[test]
    fn wheel_units_are_normalized() {
        assert!((scroll_amount(MouseScrollUnit::Line, 1.0) - SCROLL_LINE_SCALE).abs() < 1e-6);
        assert!(scroll_amount(MouseScrollUnit::Pixel, 20.0) > 0.0);
        assert!(scroll_amount(MouseScrollUnit::Line, -1.0) < 0.0);
    }
}
