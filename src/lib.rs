// RTS camera rig and drag-box selection for Bevy
//
// Modules:
// - camera: Camera rig (movement, zoom/height leveling, rotation, follow, limits)
// - selection: Box selection (gesture, viewport containment, highlights, overlay)
// - terrain: Demo ground on the ground layer
// - setup: Demo scene and hotkeys

pub mod camera;
pub mod constants;
pub mod math_utils;
pub mod selection;
pub mod setup;
pub mod terrain;
pub mod types;
