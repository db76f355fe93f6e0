// Selection state, settings and the drag gesture state machine
use bevy::prelude::*;
use crate::constants::*;

/// One press-drag-release gesture. Inactive between gestures.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SelectionDrag {
    pub active: bool,
    pub start_screen_point: Vec2,
}

/// What a gesture did this tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureStep {
    Idle,
    Started { start: Vec2 },
    Dragging { start: Vec2, current: Vec2 },
    Finished { start: Vec2, end: Vec2 },
}

/// Selection state resource
#[derive(Resource, Default, Debug)]
pub struct SelectionState {
    pub drag: SelectionDrag,
    pub selected: Vec<Entity>,      // Snapshot from the last finished gesture
    pub last_cursor: Option<Vec2>,  // Used when the cursor leaves the window mid-drag
}

impl SelectionState {
    /// Advance the gesture with this tick's button edges.
    /// A press while already dragging restarts the drag from the new point.
    pub fn advance(&mut self, pressed: bool, released: bool, cursor: Vec2) -> GestureStep {
        let mut step = GestureStep::Idle;

        if pressed {
            if self.drag.active {
                debug!("Selection drag restarted at {:?}", cursor);
            }
            self.drag = SelectionDrag { active: true, start_screen_point: cursor };
            step = GestureStep::Started { start: cursor };
        }

        if released {
            if self.drag.active {
                let start = self.drag.start_screen_point;
                self.drag = SelectionDrag::default();
                return GestureStep::Finished { start, end: cursor };
            }
            return GestureStep::Idle;
        }

        if self.drag.active && !pressed {
            step = GestureStep::Dragging { start: self.drag.start_screen_point, current: cursor };
        }
        step
    }

    /// Drag rectangle corners while a gesture is live
    pub fn live_corners(&self) -> Option<(Vec2, Vec2)> {
        if !self.drag.active {
            return None;
        }
        let current = self.last_cursor?;
        Some((self.drag.start_screen_point, current))
    }
}

/// Sent once per finished gesture with the frozen selection
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SelectionFinished {
    pub selected: Vec<Entity>,
}

/// Selection configuration resource
#[derive(Resource, Reflect, Clone, Debug)]
#[reflect(Resource)]
pub struct SelectionSettings {
    pub button: MouseButton,
    pub fill_color: Color,
    pub border_color: Color,
    pub border_thickness: f32,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            button: MouseButton::Left,
            fill_color: SELECTION_FILL_COLOR,
            border_color: SELECTION_BORDER_COLOR,
            border_thickness: SELECTION_BORDER_THICKNESS,
        }
    }
}

/// Marker for the camera the selection box projects through
#[derive(Component, Default)]
pub struct SelectionCamera;
