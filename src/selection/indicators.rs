// Pooled highlight rings, one per selectable, toggled instead of respawned
use bevy::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug)]
struct IndicatorSlot {
    indicator: Entity,
    visible: bool,
}

/// Visibility change the caller must apply to an indicator entity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorToggle {
    Show(Entity),
    Hide(Entity),
}

impl IndicatorToggle {
    pub fn entity(self) -> Entity {
        match self {
            IndicatorToggle::Show(entity) | IndicatorToggle::Hide(entity) => entity,
        }
    }

    pub fn visibility(self) -> Visibility {
        match self {
            IndicatorToggle::Show(_) => Visibility::Inherited,
            IndicatorToggle::Hide(_) => Visibility::Hidden,
        }
    }
}

/// Indicator entities keyed by the selectable that owns them
#[derive(Resource, Default, Debug)]
pub struct IndicatorPool {
    slots: HashMap<Entity, IndicatorSlot>,
}

impl IndicatorPool {
    /// Show the owner's indicator. `spawn` runs only the first time an owner
    /// is highlighted and must return a visible indicator.
    pub fn attach(&mut self, owner: Entity, spawn: impl FnOnce(Entity) -> Entity) -> Option<IndicatorToggle> {
        match self.slots.get_mut(&owner) {
            Some(slot) if slot.visible => None,
            Some(slot) => {
                slot.visible = true;
                Some(IndicatorToggle::Show(slot.indicator))
            }
            None => {
                let indicator = spawn(owner);
                self.slots.insert(owner, IndicatorSlot { indicator, visible: true });
                None
            }
        }
    }

    /// Hide the owner's indicator if it is showing
    pub fn detach(&mut self, owner: Entity) -> Option<IndicatorToggle> {
        let slot = self.slots.get_mut(&owner)?;
        if !slot.visible {
            return None;
        }
        slot.visible = false;
        Some(IndicatorToggle::Hide(slot.indicator))
    }

    pub fn detach_all(&mut self) -> Vec<IndicatorToggle> {
        self.slots
            .values_mut()
            .filter(|slot| slot.visible)
            .map(|slot| {
                slot.visible = false;
                IndicatorToggle::Hide(slot.indicator)
            })
            .collect()
    }

    /// Forget the owner's slot, handing back its indicator for despawning
    pub fn release(&mut self, owner: Entity) -> Option<Entity> {
        self.slots.remove(&owner).map(|slot| slot.indicator)
    }

    pub fn is_attached(&self, owner: Entity) -> bool {
        self.slots.get(&owner).is_some_and(|slot| slot.visible)
    }

    pub fn pooled(&self) -> usize {
        self.slots.len()
    }
}

/// Shared mesh and material for every indicator ring
#[derive(Resource)]
pub struct IndicatorAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}
