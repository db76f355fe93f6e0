// Box selection input: gesture tracking, live highlighting and the final snapshot
use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::collections::HashSet;
use std::f32::consts::FRAC_PI_2;
use crate::constants::*;
use crate::types::{Selectable, SelectionIndicator};

use super::bounds::{CameraProjector, ViewportBounds, ViewportProjector};
use super::indicators::{IndicatorAssets, IndicatorPool, IndicatorToggle};
use super::registry::SelectableRegistry;
use super::state::{GestureStep, SelectionCamera, SelectionFinished, SelectionSettings, SelectionState};

/// Registered selectables whose position lies inside `bounds`, in registry order
pub fn collect_contained<P: ViewportProjector>(
    projector: &P,
    bounds: &ViewportBounds,
    candidates: impl Iterator<Item = (Entity, Vec3)>,
) -> Vec<Entity> {
    candidates
        .filter(|(_, position)| {
            projector
                .world_to_viewport(*position)
                .is_some_and(|point| bounds.contains(point))
        })
        .map(|(entity, _)| entity)
        .collect()
}

/// Show indicators for contained entities, hide the rest.
/// Returns the visibility changes for already-pooled indicators.
pub fn update_highlights(
    pool: &mut IndicatorPool,
    registered: impl Iterator<Item = Entity>,
    contained: &HashSet<Entity>,
    mut spawn: impl FnMut(Entity) -> Entity,
) -> Vec<IndicatorToggle> {
    registered
        .filter_map(|entity| {
            if contained.contains(&entity) {
                pool.attach(entity, &mut spawn)
            } else {
                pool.detach(entity)
            }
        })
        .collect()
}

/// What one selection tick asks the world to do
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionTick {
    Idle,
    Started(Vec2),
    /// Live drag: entities currently inside the box
    Highlight(HashSet<Entity>),
    /// Release: the frozen snapshot, already stored in the state
    Finished(Vec<Entity>),
}

/// Advance the gesture by one tick and test the candidates against the box.
/// The snapshot in `state.selected` only changes on release.
pub fn advance_selection<P: ViewportProjector>(
    state: &mut SelectionState,
    projector: &P,
    pressed: bool,
    released: bool,
    cursor: Vec2,
    candidates: impl Iterator<Item = (Entity, Vec3)>,
) -> SelectionTick {
    match state.advance(pressed, released, cursor) {
        GestureStep::Finished { start, end } => {
            let selected = projector
                .viewport_bounds(start, end)
                .map(|bounds| collect_contained(projector, &bounds, candidates))
                .unwrap_or_default();
            state.selected = selected.clone();
            SelectionTick::Finished(selected)
        }
        // An unprojectable box leaves the highlights as they are
        GestureStep::Dragging { start, current } => match projector.viewport_bounds(start, current) {
            Some(bounds) => SelectionTick::Highlight(collect_contained(projector, &bounds, candidates).into_iter().collect()),
            None => SelectionTick::Idle,
        },
        GestureStep::Started { start } => SelectionTick::Started(start),
        GestureStep::Idle => SelectionTick::Idle,
    }
}

/// System: Load the shared indicator ring mesh and material
pub fn setup_indicator_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(IndicatorAssets {
        mesh: meshes.add(Annulus::new(INDICATOR_INNER_RADIUS, INDICATOR_OUTER_RADIUS)),
        material: materials.add(StandardMaterial {
            base_color: INDICATOR_COLOR,
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            cull_mode: None,  // Visible from both sides
            ..default()
        }),
    });
}

fn spawn_indicator(commands: &mut Commands, assets: &IndicatorAssets, owner: Entity) -> Entity {
    commands
        .spawn((
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(assets.material.clone()),
            // Annulus lies in the XY plane; lay it flat under the owner
            Transform::from_xyz(0.0, INDICATOR_HEIGHT_OFFSET, 0.0)
                .with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
            Visibility::Inherited,
            SelectionIndicator { owner },
            NotShadowCaster,
            ChildOf(owner),
        ))
        .id()
}

/// System: Track the selection gesture and keep highlights and the snapshot current
pub fn box_selection_system(
    mut commands: Commands,
    mouse_button: Res<ButtonInput<MouseButton>>,
    settings: Res<SelectionSettings>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform, &Projection), With<SelectionCamera>>,
    registry: Res<SelectableRegistry>,
    positions: Query<&GlobalTransform, With<Selectable>>,
    mut selection_state: ResMut<SelectionState>,
    mut pool: ResMut<IndicatorPool>,
    indicator_assets: Option<Res<IndicatorAssets>>,
    mut indicator_visibility: Query<&mut Visibility, With<SelectionIndicator>>,
    mut finished_events: EventWriter<SelectionFinished>,
) {
    let Ok(window) = window_query.single() else { return };
    let Ok((camera, camera_transform, projection)) = camera_query.single() else { return };

    // Keep the last position so a drag that leaves the window can still finish
    if let Some(cursor) = window.cursor_position() {
        selection_state.last_cursor = Some(cursor);
    }
    let Some(cursor) = selection_state.last_cursor else { return };

    let pressed = mouse_button.just_pressed(settings.button);
    let released = mouse_button.just_released(settings.button);

    let mut toggles = Vec::new();
    if pressed {
        toggles.extend(pool.detach_all());
    }

    let projector = CameraProjector::new(camera, camera_transform, projection);
    let candidates = registry
        .iter()
        .filter_map(|entity| positions.get(entity).ok().map(|global| (entity, global.translation())));

    match advance_selection(&mut selection_state, &projector, pressed, released, cursor, candidates) {
        SelectionTick::Finished(selected) => {
            info!("Box selected {} units", selected.len());
            finished_events.write(SelectionFinished { selected });
        }
        SelectionTick::Highlight(contained) => {
            if let Some(assets) = indicator_assets.as_deref() {
                toggles.extend(update_highlights(&mut pool, registry.iter(), &contained, |owner| {
                    spawn_indicator(&mut commands, assets, owner)
                }));
            }
        }
        SelectionTick::Started(start) => {
            debug!("Selection drag started at {:?}", start);
        }
        SelectionTick::Idle => {}
    }

    for toggle in toggles {
        if let Ok(mut visibility) = indicator_visibility.get_mut(toggle.entity()) {
            *visibility = toggle.visibility();
        }
    }
}
