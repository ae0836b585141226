//! Bounded, ordered item storage owned by the player.
//!
//! Items keep their insertion order: index 1 is always the oldest item and
//! `pop` consumes from the front.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

use super::{Item, ItemKind};

/// Errors surfaced by inventory operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    /// The inventory is at capacity; the rejected item is handed back.
    #[error("inventory is full (capacity {capacity}), cannot store {item}")]
    Full { item: Item, capacity: usize },

    #[error("no item at inventory slot {index}")]
    NotFound { index: usize },

    #[error("item at inventory slot {index} is a {kind} and cannot be consumed")]
    NotConsumable { index: usize, kind: ItemKind },
}

impl InventoryError {
    /// Recovers ownership of the item rejected by a full inventory.
    pub fn into_rejected_item(self) -> Option<Item> {
        match self {
            InventoryError::Full { item, .. } => Some(item),
            InventoryError::NotFound { .. } | InventoryError::NotConsumable { .. } => None,
        }
    }
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            InventoryError::Full { .. } => "INVENTORY_FULL",
            InventoryError::NotFound { .. } => "INVENTORY_NOT_FOUND",
            InventoryError::NotConsumable { .. } => "INVENTORY_NOT_CONSUMABLE",
        }
    }
}

/// One listed inventory entry as exposed to presentation: 1-based slot and name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InventoryEntry<'a> {
    pub index: usize,
    pub name: &'a str,
    pub kind: ItemKind,
}

/// Player inventory with a fixed capacity of [`GameConfig::INVENTORY_CAPACITY`].
#[derive(Debug, PartialEq, Eq, Default)]
pub struct Inventory {
    items: ArrayVec<Item, { GameConfig::INVENTORY_CAPACITY }>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub const fn capacity() -> usize {
        GameConfig::INVENTORY_CAPACITY
    }

    /// Appends an item to the back.
    ///
    /// When the inventory is full the item is returned inside the error and the
    /// inventory is left untouched.
    pub fn push(&mut self, item: Item) -> Result<(), InventoryError> {
        self.items
            .try_push(item)
            .map_err(|err| InventoryError::Full {
                item: err.element(),
                capacity: Self::capacity(),
            })
    }

    /// Removes and returns the oldest item.
    pub fn pop(&mut self) -> Option<Item> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Looks up an item by its 1-based position in insertion order.
    pub fn find(&self, index: usize) -> Option<&Item> {
        index.checked_sub(1).and_then(|slot| self.items.get(slot))
    }

    /// Removes the item at a 1-based position, shifting later items forward.
    pub fn remove(&mut self, index: usize) -> Result<Item, InventoryError> {
        let slot = index
            .checked_sub(1)
            .filter(|slot| *slot < self.items.len())
            .ok_or(InventoryError::NotFound { index })?;
        Ok(self.items.remove(slot))
    }

    /// Counts items of the given kind.
    pub fn count(&self, kind: ItemKind) -> usize {
        self.items.iter().filter(|item| item.kind() == kind).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Lists the contents as 1-based `(index, name)` entries.
    pub fn entries(&self) -> Vec<InventoryEntry<'_>> {
        self.items
            .iter()
            .enumerate()
            .map(|(slot, item)| InventoryEntry {
                index: slot + 1,
                name: item.name(),
                kind: item.kind(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: ItemKind, name: &str) -> Item {
        Item::new(kind, name, format!("{name} description"))
    }

    #[test]
    fn push_rejects_sixteenth_item_and_hands_it_back() {
        let mut inventory = Inventory::new();
        for n in 0..Inventory::capacity() {
            inventory
                .push(item(ItemKind::OreResource, &format!("ore {n}")))
                .unwrap();
        }
        assert!(inventory.is_full());

        let err = inventory
            .push(item(ItemKind::ShipPart, "extra"))
            .unwrap_err();
        assert_eq!(inventory.len(), 15);
        assert_eq!(err.into_rejected_item().unwrap().name(), "extra");
    }

    #[test]
    fn pop_consumes_in_insertion_order() {
        let mut inventory = Inventory::new();
        inventory.push(item(ItemKind::HealthPack, "A")).unwrap();
        inventory.push(item(ItemKind::OreResource, "B")).unwrap();
        inventory.push(item(ItemKind::ShipPart, "C")).unwrap();

        assert_eq!(inventory.pop().unwrap().name(), "A");
        assert_eq!(inventory.pop().unwrap().name(), "B");
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn pop_on_empty_inventory_returns_none() {
        let mut inventory = Inventory::new();
        assert!(inventory.pop().is_none());
    }

    #[test]
    fn find_is_one_based() {
        let mut inventory = Inventory::new();
        assert!(inventory.find(1).is_none());

        inventory.push(item(ItemKind::HealthPack, "first")).unwrap();
        inventory.push(item(ItemKind::ShipPart, "second")).unwrap();

        assert!(inventory.find(0).is_none());
        assert_eq!(inventory.find(1).unwrap().name(), "first");
        assert_eq!(inventory.find(2).unwrap().name(), "second");
        assert!(inventory.find(3).is_none());
    }

    #[test]
    fn count_and_entries_reflect_contents() {
        let mut inventory = Inventory::new();
        inventory.push(item(ItemKind::OreResource, "ore")).unwrap();
        inventory.push(item(ItemKind::ShipPart, "part")).unwrap();
        inventory.push(item(ItemKind::OreResource, "ore")).unwrap();

        assert_eq!(inventory.count(ItemKind::OreResource), 2);
        assert_eq!(inventory.count(ItemKind::HealthPack), 0);

        let entries = inventory.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].index, 2);
        assert_eq!(entries[1].name, "part");
    }

    #[test]
    fn remove_shifts_later_items_forward() {
        let mut inventory = Inventory::new();
        inventory.push(item(ItemKind::HealthPack, "A")).unwrap();
        inventory.push(item(ItemKind::HealthPack, "B")).unwrap();

        assert_eq!(inventory.remove(1).unwrap().name(), "A");
        assert_eq!(inventory.find(1).unwrap().name(), "B");
        assert_eq!(
            inventory.remove(5),
            Err(InventoryError::NotFound { index: 5 })
        );
    }
}
