use crate::config::GameConfig;

use super::{Inventory, InventoryError, Item, ItemKind, Position};

/// Mutable player state: location, vital meters, and owned inventory.
///
/// Health is not capped from above; healing past the starting value is
/// allowed. Zero or less health, or zero or less oxygen, ends the session.
#[derive(Debug, PartialEq, Eq)]
pub struct PlayerState {
    pub position: Position,
    pub health: i32,
    pub oxygen: i32,
    pub inventory: Inventory,
}

impl PlayerState {
    pub fn new(position: Position, config: &GameConfig) -> Self {
        Self {
            position,
            health: config.starting_health,
            oxygen: config.starting_oxygen,
            inventory: Inventory::new(),
        }
    }

    pub fn with_vitals(mut self, health: i32, oxygen: i32) -> Self {
        self.health = health;
        self.oxygen = oxygen;
        self
    }

    pub fn relocate(&mut self, position: Position) {
        self.position = position;
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn heal(&mut self, amount: i32) {
        self.health += amount;
    }

    pub fn spend_oxygen(&mut self, amount: i32) {
        self.oxygen -= amount;
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn is_out_of_oxygen(&self) -> bool {
        self.oxygen <= 0
    }

    /// Stores an item; a full inventory hands the item back inside the error.
    pub fn add_inventory(&mut self, item: Item) -> Result<(), InventoryError> {
        self.inventory.push(item)
    }

    /// Looks up the item at a 1-based inventory slot.
    pub fn select_item(&self, index: usize) -> Result<&Item, InventoryError> {
        self.inventory
            .find(index)
            .ok_or(InventoryError::NotFound { index })
    }

    /// Consumes the health pack at `index` and restores `restore` health.
    ///
    /// The consumed item is the selected one, not the oldest in the inventory.
    pub fn use_health_pack(&mut self, index: usize, restore: i32) -> Result<Item, InventoryError> {
        let kind = self.select_item(index)?.kind();
        if kind != ItemKind::HealthPack {
            return Err(InventoryError::NotConsumable { index, kind });
        }

        let item = self.inventory.remove(index)?;
        self.heal(restore);
        Ok(item)
    }
}
