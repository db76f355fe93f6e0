use bevy::prelude::*;

/// Collision layer bits used to filter the rig's ground probe.
/// Entities without this component count as `DEFAULT`.
#[derive(Component, Reflect, Clone, Copy, PartialEq, Eq, Debug)]
#[reflect(Component)]
pub struct GroundLayers(pub u32);

impl GroundLayers {
    pub const NONE: Self = Self(0);
    pub const DEFAULT: Self = Self(1 << 0);
    pub const GROUND: Self = Self(1 << 1);
    pub const ALL: Self = Self(u32::MAX);

    #[inline]
    pub fn intersects(self, mask: GroundLayers) -> bool {
        self.0 & mask.0 != 0
    }
}

impl Default for GroundLayers {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Marker for entities the box selection can pick up
#[derive(Component, Reflect, Default, Clone, Copy, Debug)]
#[reflect(Component)]
pub struct Selectable;

/// Marker for pooled highlight rings parented under a selectable
#[derive(Component)]
pub struct SelectionIndicator {
    pub owner: Entity,
}
