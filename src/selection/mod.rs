// Selection module - RTS-style drag-box selection
//
// Submodules:
// - state: SelectionState resource, gesture state machine, settings
// - bounds: Viewport-space selection volume and camera projection
// - registry: Explicit registry of selectable entities
// - indicators: Pooled highlight rings
// - input: Gesture handling, live highlighting and the final snapshot
// - visuals: Screen-space overlay rectangle

mod bounds;
mod indicators;
mod input;
mod registry;
mod state;
mod visuals;

use bevy::prelude::*;
use crate::types::Selectable;

// Re-export main types for external use
pub use bounds::{CameraProjector, ViewportBounds, ViewportProjector};
pub use registry::SelectableRegistry;
pub use state::{SelectionCamera, SelectionFinished, SelectionSettings, SelectionState};

pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectionState>()
            .init_resource::<SelectionSettings>()
            .init_resource::<SelectableRegistry>()
            .init_resource::<indicators::IndicatorPool>()
            .register_type::<SelectionSettings>()
            .register_type::<Selectable>()
            .add_event::<SelectionFinished>()
            .add_observer(registry::register_selectable)
            .add_observer(registry::deregister_selectable)
            .add_systems(Startup, (input::setup_indicator_assets, visuals::spawn_selection_overlay))
            .add_systems(Update, (
                input::box_selection_system,
                visuals::selection_overlay_system,
            ).chain());
    }
}
