// Per-rig configuration component and input bindings
use bevy::prelude::*;
use crate::constants::*;
use crate::types::GroundLayers;

/// A bindable button: either a keyboard key or a mouse button
#[derive(Reflect, Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputButton {
    Key(KeyCode),
    Mouse(MouseButton),
}

impl InputButton {
    pub fn pressed(&self, keys: &ButtonInput<KeyCode>, mouse: &ButtonInput<MouseButton>) -> bool {
        match *self {
            InputButton::Key(key) => keys.pressed(key),
            InputButton::Mouse(button) => mouse.pressed(button),
        }
    }
}

/// Which schedule drives a rig. Exactly one runs it each tick.
#[derive(Reflect, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TickMode {
    #[default]
    Variable,
    Fixed,
}

/// Keys and buttons for every camera input method.
/// Each axis lists alternatives: any bound key counts as held.
#[derive(Reflect, Clone, Debug)]
pub struct InputBindings {
    pub move_right: Vec<KeyCode>,
    pub move_left: Vec<KeyCode>,
    pub move_forward: Vec<KeyCode>,
    pub move_back: Vec<KeyCode>,
    pub panning: InputButton,
    pub zoom_in: InputButton,
    pub zoom_out: InputButton,
    pub rotate_right: InputButton,
    pub rotate_left: InputButton,
    pub mouse_rotation: InputButton,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            move_right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            move_left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            move_forward: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            move_back: vec![KeyCode::KeyS, KeyCode::ArrowDown],
            panning: InputButton::Mouse(MouseButton::Middle),
            zoom_in: InputButton::Key(KeyCode::KeyE),
            zoom_out: InputButton::Key(KeyCode::KeyQ),
            rotate_right: InputButton::Key(KeyCode::KeyX),
            rotate_left: InputButton::Key(KeyCode::KeyZ),
            mouse_rotation: InputButton::Mouse(MouseButton::Right),
        }
    }
}

/// Camera rig configuration, one per rig entity
#[derive(Component, Reflect, Clone, Debug)]
#[reflect(Component)]
pub struct CameraRigSettings {
    pub tick_mode: TickMode,

    // Movement
    pub keyboard_movement_speed: f32,
    pub screen_edge_movement_speed: f32,
    pub following_speed: f32,
    pub rotation_speed: f32,
    pub panning_speed: f32,
    pub mouse_rotation_speed: f32,

    // Height
    pub auto_height: bool,
    pub ground_mask: GroundLayers,
    pub keyboard_zoom_sensitivity: f32,
    pub scroll_wheel_zoom_sensitivity: f32,

    // Map limits
    pub limit_map: bool,
    pub limit_x: f32,
    pub limit_y: f32,

    // Targeting
    pub target_follow: Option<Entity>,
    pub target_offset: Vec3,

    // Input toggles
    pub use_screen_edge_input: bool,
    pub screen_edge_border: f32,
    pub use_keyboard_input: bool,
    pub use_panning: bool,
    pub use_keyboard_zooming: bool,
    pub use_scroll_wheel_zooming: bool,
    pub use_keyboard_rotation: bool,
    pub use_mouse_rotation: bool,
    pub bindings: InputBindings,
}

impl Default for CameraRigSettings {
    fn default() -> Self {
        Self {
            tick_mode: TickMode::Variable,
            keyboard_movement_speed: KEYBOARD_MOVEMENT_SPEED,
            screen_edge_movement_speed: SCREEN_EDGE_MOVEMENT_SPEED,
            following_speed: FOLLOWING_SPEED,
            rotation_speed: ROTATION_SPEED,
            panning_speed: PANNING_SPEED,
            mouse_rotation_speed: MOUSE_ROTATION_SPEED,
            auto_height: true,
            ground_mask: GroundLayers::ALL,
            keyboard_zoom_sensitivity: KEYBOARD_ZOOM_SENSITIVITY,
            scroll_wheel_zoom_sensitivity: SCROLL_WHEEL_ZOOM_SENSITIVITY,
            limit_map: true,
            limit_x: MAP_LIMIT_X,
            limit_y: MAP_LIMIT_Y,
            target_follow: None,
            target_offset: Vec3::ZERO,
            use_screen_edge_input: true,
            screen_edge_border: SCREEN_EDGE_BORDER,
            use_keyboard_input: true,
            use_panning: true,
            use_keyboard_zooming: true,
            use_scroll_wheel_zooming: true,
            use_keyboard_rotation: true,
            use_mouse_rotation: true,
            bindings: InputBindings::default(),
        }
    }
}

impl CameraRigSettings {
    /// Start following `target`
    pub fn set_target(&mut self, target: Entity) {
        self.target_follow = Some(target);
    }

    /// Stop following and return to free movement
    pub fn reset_target(&mut self) {
        self.target_follow = None;
    }

    pub fn is_following(&self) -> bool {
        self.target_follow.is_some()
    }
}
