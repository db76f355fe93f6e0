// Box selection overlay - filled rectangle plus four border strips
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::bounds::{border_strips, screen_rect};
use super::state::{SelectionSettings, SelectionState};

/// One piece of the overlay. Index into `border_strips` for the borders.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayPart {
    Fill,
    Border(usize),
}

/// System: Spawn the (hidden) overlay nodes once
pub fn spawn_selection_overlay(mut commands: Commands, settings: Res<SelectionSettings>) {
    let parts = std::iter::once((OverlayPart::Fill, settings.fill_color))
        .chain((0..4).map(|index| (OverlayPart::Border(index), settings.border_color)));

    for (part, color) in parts {
        commands.spawn((
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            BackgroundColor(color),
            Visibility::Hidden,
            part,
        ));
    }
}

fn place(node: &mut Node, rect: Rect) {
    node.left = Val::Px(rect.min.x);
    node.top = Val::Px(rect.min.y);
    node.width = Val::Px(rect.width());
    node.height = Val::Px(rect.height());
}

/// System: Position the overlay over the live drag, hide it otherwise
pub fn selection_overlay_system(
    selection_state: Res<SelectionState>,
    settings: Res<SelectionSettings>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut parts: Query<(&OverlayPart, &mut Node, &mut Visibility)>,
) {
    // Cursor coordinates are already top-left origin, matching UI layout
    let cursor = window_query
        .single()
        .ok()
        .and_then(Window::cursor_position)
        .or(selection_state.last_cursor);

    let corners = selection_state
        .live_corners()
        .map(|(start, last)| (start, cursor.unwrap_or(last)));

    let Some((start, current)) = corners else {
        for (_, _, mut visibility) in parts.iter_mut() {
            *visibility = Visibility::Hidden;
        }
        return;
    };

    let rect = screen_rect(start, current);
    let strips = border_strips(rect, settings.border_thickness);

    for (part, mut node, mut visibility) in parts.iter_mut() {
        let target = match *part {
            OverlayPart::Fill => rect,
            OverlayPart::Border(index) => strips[index],
        };
        place(&mut node, target);
        *visibility = Visibility::Inherited;
    }
}
