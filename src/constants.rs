// Camera rig movement defaults
pub const KEYBOARD_MOVEMENT_SPEED: f32 = 5.0;
pub const SCREEN_EDGE_MOVEMENT_SPEED: f32 = 3.0;
pub const FOLLOWING_SPEED: f32 = 5.0;
pub const ROTATION_SPEED: f32 = 3.0;         // Degrees per second (keyboard)
pub const PANNING_SPEED: f32 = 10.0;
pub const MOUSE_ROTATION_SPEED: f32 = 10.0;  // Degrees per mouse-axis unit per second
pub const SCREEN_EDGE_BORDER: f32 = 25.0;    // Pixels from the window edge that trigger scrolling

// Height and zoom defaults
pub const MIN_HEIGHT: f32 = 10.0;
pub const MAX_HEIGHT: f32 = 15.0;
pub const HEIGHT_DAMPENING: f32 = 5.0;
pub const KEYBOARD_ZOOM_SENSITIVITY: f32 = 2.0;
pub const SCROLL_WHEEL_ZOOM_SENSITIVITY: f32 = 25.0;

// Map limit defaults
pub const MAP_LIMIT_X: f32 = 50.0;
pub const MAP_LIMIT_Y: f32 = 50.0;

// Raw device deltas are scaled down to the range of a conventional "mouse axis"
pub const MOUSE_AXIS_SCALE: f32 = 0.1;
pub const SCROLL_LINE_SCALE: f32 = 0.1;      // One wheel notch
pub const SCROLL_PIXEL_SCALE: f32 = 0.005;   // Touchpads report pixels

// Selection settings
pub const SELECTION_FILL_COLOR: bevy::prelude::Color = bevy::prelude::Color::srgba(0.8, 0.8, 0.95, 0.25);
pub const SELECTION_BORDER_COLOR: bevy::prelude::Color = bevy::prelude::Color::srgb(0.8, 0.8, 0.95);
pub const SELECTION_BORDER_THICKNESS: f32 = 2.0;
pub const INDICATOR_INNER_RADIUS: f32 = 0.6;
pub const INDICATOR_OUTER_RADIUS: f32 = 0.8;
pub const INDICATOR_HEIGHT_OFFSET: f32 = -0.45; // Just above the ground under a unit's center
pub const INDICATOR_COLOR: bevy::prelude::Color = bevy::prelude::Color::srgba(0.2, 0.9, 1.0, 0.8); // Cyan

// Fallback clip planes for custom projections
pub const DEFAULT_NEAR_CLIP: f32 = 0.1;
pub const DEFAULT_FAR_CLIP: f32 = 1000.0;

// Demo terrain settings
pub const TERRAIN_GRID_SIZE: usize = 101;
pub const TERRAIN_SIZE: f32 = 120.0;
pub const TERRAIN_MAX_HEIGHT: f32 = 6.0;

// Demo scene settings
pub const DEMO_UNIT_COUNT: usize = 40;
pub const DEMO_UNIT_SPREAD: f32 = 40.0;
pub const CAMERA_INITIAL_HEIGHT: f32 = 15.0;
pub const CAMERA_INITIAL_PITCH: f32 = -0.9; // Radians, looking down at the field
