// Explicit registry of selectable entities, kept current by observers
use bevy::prelude::*;
use std::collections::HashMap;
use crate::types::Selectable;

use super::indicators::IndicatorPool;

/// Every live entity carrying `Selectable`.
/// Dense list for iteration plus an index for constant-time membership.
/// Registration order holds until a removal moves the last entry into the gap.
#[derive(Resource, Default, Debug)]
pub struct SelectableRegistry {
    entities: Vec<Entity>,
    slots: HashMap<Entity, usize>,
}

impl SelectableRegistry {
    /// Returns false if the entity was already registered
    pub fn register(&mut self, entity: Entity) -> bool {
        if self.slots.contains_key(&entity) {
            return false;
        }
        self.slots.insert(entity, self.entities.len());
        self.entities.push(entity);
        true
    }

    /// Returns false if the entity was not registered
    pub fn deregister(&mut self, entity: Entity) -> bool {
        let Some(index) = self.slots.remove(&entity) else {
            return false;
        };
        self.entities.swap_remove(index);
        if let Some(&moved) = self.entities.get(index) {
            self.slots.insert(moved, index);
        }
        true
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.slots.contains_key(&entity)
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Observer: `Selectable` inserted
pub fn register_selectable(trigger: Trigger<OnAdd, Selectable>, mut registry: ResMut<SelectableRegistry>) {
    registry.register(trigger.target());
}

/// Observer: `Selectable` removed or its entity despawned.
/// Also returns the entity's pooled indicator.
pub fn deregister_selectable(
    trigger: Trigger<OnRemove, Selectable>,
    mut commands: Commands,
    mut registry: ResMut<SelectableRegistry>,
    mut pool: ResMut<IndicatorPool>,
) {
    let entity = trigger.target();
    registry.deregister(entity);
    if let Some(indicator) = pool.release(entity) {
        commands.entity(indicator).try_despawn();
    }
}
