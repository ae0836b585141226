//! Description catalog: what every tile, encounter and item looks like.

use game_core::{Encounter, Item, ItemKind, TileClass};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileEntry {
    pub class: TileClass,
    pub icon: char,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterEntry {
    /// Key used by level files.
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemEntry {
    pub kind: ItemKind,
    pub name: String,
    pub description: String,
}

/// Lookup tables from content keys to player-facing texts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    pub tiles: Vec<TileEntry>,
    pub encounters: Vec<EncounterEntry>,
    pub items: Vec<ItemEntry>,
}

impl Catalog {
    pub fn tile(&self, class: TileClass) -> Option<&TileEntry> {
        self.tiles.iter().find(|entry| entry.class == class)
    }

    /// Builds a fresh encounter for the entry named `name`.
    pub fn encounter(&self, name: &str) -> Option<Encounter> {
        self.encounters
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| Encounter::new(entry.name.clone(), entry.description.clone()))
    }

    /// Builds a fresh item of `kind`.
    pub fn item(&self, kind: ItemKind) -> Option<Item> {
        self.items
            .iter()
            .find(|entry| entry.kind == kind)
            .map(|entry| Item::new(kind, entry.name.clone(), entry.description.clone()))
    }

    /// Stock asteroid texts.
    pub fn builtin() -> Self {
        let tile = |class, icon, description: &str| TileEntry {
            class,
            icon,
            description: description.to_owned(),
        };
        let encounter = |name: &str, description: &str| EncounterEntry {
            name: name.to_owned(),
            description: description.to_owned(),
        };
        let item = |kind, name: &str, description: &str| ItemEntry {
            kind,
            name: name.to_owned(),
            description: description.to_owned(),
        };

        Self {
            tiles: vec![
                tile(
                    TileClass::Launchpad,
                    '^',
                    "Your rocket ship is a beautiful, large, crimson red, cone-shaped \
                     contraption that your father bought for your 18th birthday. It has 4 \
                     rocket engines, a kitchen, dry bath, sleep compartment, and warp drive \
                     capable of travelling millions of light-years in the blink of an eye. \
                     It is powered by plutonium ore.",
                ),
                tile(
                    TileClass::Crater,
                    'O',
                    "A large, bowl-shaped hole on the surface of the asteroid. You can jump \
                     in if you want.",
                ),
                tile(
                    TileClass::SpaceRock,
                    '#',
                    "A medium-sized boulder on the surface of the asteroid. You can lift it \
                     up to check what's under it.",
                ),
                tile(
                    TileClass::Wormhole,
                    '@',
                    "A physical anomaly that is a rift in the fabric of time and space. You \
                     can walk through the worm hole if you want.",
                ),
                tile(
                    TileClass::Ground,
                    '_',
                    "The ground is dusty, and the gray dirt feels like a silky powder. There \
                     is nothing on the ground.",
                ),
            ],
            encounters: vec![
                encounter(
                    "PCMustard",
                    "PCMustard, a species of alien only found in the coldest parts of space. \
                     They have silky, blonde hair, golden bronze complexion, and razor-sharp \
                     fangs capable of biting you at 120 fps.",
                ),
                encounter(
                    "Vapebro",
                    "Vapebro, a species of alien that lurks underground, waiting to ambush \
                     its prey with a mysterious fog of poison while bombarding them with \
                     awareness that they like to vape.",
                ),
                encounter(
                    "Khaleesi",
                    "Khaleesi, first of their name, breaker of chains, mother of dragons. \
                     They are an advanced species of alien that has leathery wings capable \
                     of flying, sharp claws, scaly skin, can breathe fire, and has \
                     voluminous silver hair.",
                ),
            ],
            items: vec![
                item(
                    ItemKind::HealthPack,
                    "Health pack",
                    "A first aid kit that can slightly heal your wounds and recover 10 \
                     health points.",
                ),
                item(
                    ItemKind::OreResource,
                    "Plutonium ore",
                    "A small, dense, metallic-looking substance. It's quite mesmerizing to \
                     look at, but you can already feel the radiation.",
                ),
                item(
                    ItemKind::ShipPart,
                    "Ship part",
                    "A piece of your rocket ship that fell off in the crash.",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_class_and_kind() {
        let catalog = Catalog::builtin();

        for class in [
            TileClass::Ground,
            TileClass::Crater,
            TileClass::SpaceRock,
            TileClass::Wormhole,
            TileClass::Launchpad,
        ] {
            assert!(catalog.tile(class).is_some(), "missing {class}");
        }
        for kind in [ItemKind::HealthPack, ItemKind::OreResource, ItemKind::ShipPart] {
            assert_eq!(catalog.item(kind).map(|item| item.kind()), Some(kind));
        }
        assert_eq!(catalog.tile(TileClass::Launchpad).unwrap().icon, '^');
    }

    #[test]
    fn encounter_lookup_ignores_case() {
        let catalog = Catalog::builtin();
        let encounter = catalog.encounter("vapebro").unwrap();
        assert_eq!(encounter.name, "Vapebro");
        assert!(catalog.encounter("Gorgon").is_none());
    }
}
