//! Item values carried by landmarks and the player's inventory.

use std::fmt;

/// Category of an item, which decides how it can be used.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemKind {
    /// Consumable that restores health.
    HealthPack,
    /// Fuel for the launchpad repair.
    OreResource,
    /// Structural piece for the launchpad repair.
    ShipPart,
}

impl ItemKind {
    /// Returns true for items the player can consume from the inventory.
    pub fn is_consumable(self) -> bool {
        matches!(self, ItemKind::HealthPack)
    }
}

/// Immutable description of one resource.
///
/// Items are moved, never cloned, between their owners: a landmark holds at
/// most one until it is taken, after which the inventory owns it.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    kind: ItemKind,
    name: String,
    description: String,
}

impl Item {
    pub fn new(kind: ItemKind, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn kind_parses_snake_case_names() {
        assert_eq!(ItemKind::from_str("ship_part"), Ok(ItemKind::ShipPart));
        assert_eq!(ItemKind::from_str("Health_Pack"), Ok(ItemKind::HealthPack));
        assert_eq!(ItemKind::OreResource.as_ref(), "ore_resource");
    }

    #[test]
    fn only_health_packs_are_consumable() {
        assert!(ItemKind::HealthPack.is_consumable());
        assert!(!ItemKind::OreResource.is_consumable());
    }
}
