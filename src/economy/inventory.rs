use std::collections::HashMap;

use bevy::prelude::*;
use crate::shared::*;

/// Throwable weapons the player is carrying.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct WeaponInventory {
    counts: HashMap<WeaponKind, u32>,
    pub max_stack: u32,
}

impl Default for WeaponInventory {
    fn default() -> Self {
        Self::with_max_stack(ShopConfig::default().max_stack)
    }
}

impl WeaponInventory {
    pub fn with_max_stack(max_stack: u32) -> Self {
        Self {
            counts: HashMap::new(),
            max_stack,
        }
    }

    pub fn count(&self, kind: WeaponKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn is_full(&self, kind: WeaponKind) -> bool {
        self.count(kind) >= self.max_stack
    }

    /// Adds up to `amount`, stopping at the stack limit. Returns how many
    /// were actually added.
    pub fn add_item(&mut self, kind: WeaponKind, amount: u32) -> u32 {
        let current = self.count(kind);
        let added = amount.min(self.max_stack.saturating_sub(current));
        if added > 0 {
            self.counts.insert(kind, current + added);
        }
        added
    }
}

pub fn init_inventory(config: Res<ShopConfig>, mut inventory: ResMut<WeaponInventory>) {
    inventory.max_stack = config.max_stack;
}
