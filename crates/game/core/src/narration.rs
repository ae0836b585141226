//! Player-facing narration for resolved events.
//!
//! Transitions report what happened as [`Narration`] values; the presentation
//! layer prints them through their `Display` impl.

use std::fmt;

use crate::state::{ItemKind, LandmarkKind, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Narration {
    /// Plain description of a tile or item.
    Description(String),
    EnteredLandmark(LandmarkKind),
    Attacked { encounter: String, damage: i32 },
    Found { item: String },
    NothingThere,
    InventoryFull,
    InventoryEmpty,
    Teleported { destination: Position },
    Shortfall { kind: ItemKind, missing: u32 },
    Surplus { kind: ItemKind, extra: u32 },
    Launched,
    Healed { amount: i32 },
    ItemNotFound,
    CannotUse { item: String },
    Boundary,
}

impl Narration {
    /// True for narration that ends the session in victory.
    pub fn is_launch(&self) -> bool {
        matches!(self, Narration::Launched)
    }
}

fn material(kind: ItemKind, amount: u32) -> String {
    match kind {
        ItemKind::OreResource => format!("{amount} more piece(s) of plutonium ore"),
        ItemKind::ShipPart => format!("{amount} more ship part(s)"),
        ItemKind::HealthPack => format!("{amount} more health pack(s)"),
    }
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Narration::Description(text) => f.write_str(text),
            Narration::EnteredLandmark(LandmarkKind::Crater) => {
                f.write_str("You jumped into the crater...")
            }
            Narration::EnteredLandmark(LandmarkKind::SpaceRock) => {
                f.write_str("You lifted up the space rock...")
            }
            Narration::Attacked { encounter, damage } => write!(
                f,
                "Uh-oh! You just got attacked by a {encounter}\n...\n\
                 You lost {damage} health points!\n...\nThe alien ran away."
            ),
            Narration::Found { item } => write!(f, "You found a {item}!"),
            Narration::NothingThere => f.write_str("There's nothing there..."),
            Narration::InventoryFull => f.write_str("Your inventory is full!"),
            Narration::InventoryEmpty => f.write_str("Your inventory is empty!"),
            Narration::Teleported { .. } => f.write_str(
                "You walked through the worm hole and got teleported to a random location...",
            ),
            Narration::Shortfall { kind, missing } => {
                write!(f, "You still need {}.", material(*kind, *missing))
            }
            Narration::Surplus { kind, extra } => write!(
                f,
                "You are carrying {} than the ship can take. Leave the extra behind.",
                material(*kind, *extra)
            ),
            Narration::Launched => f.write_str(
                "Great! You have all the necessary material.\n\n\
                 Fixing the ship ... \n...\n\n\
                 Okay, ready to go!\nIgnition started...\nBlast off commencing in ...\n\n\
                 ...3\n...2\n...1\n...\n\nBLASTOFF!",
            ),
            Narration::Healed { amount } => write!(f, "You recovered {amount} health points."),
            Narration::ItemNotFound => f.write_str("Error: item not found"),
            Narration::CannotUse { item } => write!(f, "You can't use the {item} right now."),
            Narration::Boundary => f.write_str("You can't go there."),
        }
    }
}
