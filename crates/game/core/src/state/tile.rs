//! Tile taxonomy and the landmark resource lifecycle.
//!
//! A [`Tile`] is one grid cell. Its [`TileKind`] decides how it reacts when the
//! player checks it (see `action::interact`). Landmarks additionally own at
//! most one hidden [`Encounter`] and at most one hidden [`Item`], each of which
//! is taken exactly once.

use super::{CardinalDirection, Item, Position};

/// Configuration-level classification of a tile, used by level data.
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
pub enum TileClass {
    Ground,
    Crater,
    SpaceRock,
    Wormhole,
    Launchpad,
}

/// Concrete landmark variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum LandmarkKind {
    Crater,
    SpaceRock,
}

/// A one-shot hostile event hidden on a landmark.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encounter {
    pub name: String,
    pub description: String,
}

impl Encounter {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Landmark state: pending encounter and pending treasure.
#[derive(Debug, PartialEq, Eq)]
pub struct Landmark {
    kind: LandmarkKind,
    encounter: Option<Encounter>,
    treasure: Option<Item>,
}

impl Landmark {
    pub fn new(kind: LandmarkKind) -> Self {
        Self {
            kind,
            encounter: None,
            treasure: None,
        }
    }

    pub fn kind(&self) -> LandmarkKind {
        self.kind
    }

    pub fn encounter(&self) -> Option<&Encounter> {
        self.encounter.as_ref()
    }

    pub fn treasure(&self) -> Option<&Item> {
        self.treasure.as_ref()
    }

    pub fn has_encounter(&self) -> bool {
        self.encounter.is_some()
    }

    pub fn has_treasure(&self) -> bool {
        self.treasure.is_some()
    }

    /// Hides an encounter here, returning any encounter it replaces.
    pub fn hide_encounter(&mut self, encounter: Encounter) -> Option<Encounter> {
        self.encounter.replace(encounter)
    }

    /// Hides an item here, returning any item it replaces.
    pub fn hide_treasure(&mut self, item: Item) -> Option<Item> {
        self.treasure.replace(item)
    }

    /// Clears the pending encounter.
    pub fn take_encounter(&mut self) -> Option<Encounter> {
        self.encounter.take()
    }

    /// Transfers the pending item out, leaving the landmark empty-handed.
    pub fn take_treasure(&mut self) -> Option<Item> {
        self.treasure.take()
    }
}

/// Behavioral variant of a tile.
#[derive(Debug, PartialEq, Eq)]
pub enum TileKind {
    Ground,
    Landmark(Landmark),
    Wormhole,
    Launchpad,
}

impl TileKind {
    pub fn from_class(class: TileClass) -> Self {
        match class {
            TileClass::Ground => TileKind::Ground,
            TileClass::Crater => TileKind::Landmark(Landmark::new(LandmarkKind::Crater)),
            TileClass::SpaceRock => TileKind::Landmark(Landmark::new(LandmarkKind::SpaceRock)),
            TileClass::Wormhole => TileKind::Wormhole,
            TileClass::Launchpad => TileKind::Launchpad,
        }
    }

    pub fn class(&self) -> TileClass {
        match self {
            TileKind::Ground => TileClass::Ground,
            TileKind::Landmark(landmark) => match landmark.kind() {
                LandmarkKind::Crater => TileClass::Crater,
                LandmarkKind::SpaceRock => TileClass::SpaceRock,
            },
            TileKind::Wormhole => TileClass::Wormhole,
            TileKind::Launchpad => TileClass::Launchpad,
        }
    }
}

/// Adjacency of a tile, established once by the grid's linking pass.
///
/// Links are plain coordinates: the grid owns every tile, neighbors are looked
/// up through it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub up: Option<Position>,
    pub right: Option<Position>,
    pub down: Option<Position>,
    pub left: Option<Position>,
}

impl Neighbors {
    pub fn get(&self, direction: CardinalDirection) -> Option<Position> {
        match direction {
            CardinalDirection::Up => self.up,
            CardinalDirection::Right => self.right,
            CardinalDirection::Down => self.down,
            CardinalDirection::Left => self.left,
        }
    }

    pub fn set(&mut self, direction: CardinalDirection, neighbor: Option<Position>) {
        let slot = match direction {
            CardinalDirection::Up => &mut self.up,
            CardinalDirection::Right => &mut self.right,
            CardinalDirection::Down => &mut self.down,
            CardinalDirection::Left => &mut self.left,
        };
        *slot = neighbor;
    }
}

/// What the presentation layer must ask before the tile can be engaged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TilePrompt {
    /// Nothing to ask; checking the tile just describes it.
    None,
    /// Yes/no question; a yes is answered with [`Engagement::Enter`].
    Confirm(&'static str),
    /// Choose between viewing the ship and attempting the launch.
    LaunchMenu,
}

/// The player's answer to a [`TilePrompt`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Engagement {
    /// Only look at the tile.
    Look,
    /// Enter the landmark or walk through the wormhole.
    Enter,
    /// Attempt to repair the ship and launch.
    Launch,
}

/// One cell of the world grid.
#[derive(Debug, PartialEq, Eq)]
pub struct Tile {
    position: Position,
    kind: TileKind,
    description: String,
    icon: char,
    links: Neighbors,
}

impl Tile {
    pub fn new(
        position: Position,
        kind: TileKind,
        description: impl Into<String>,
        icon: char,
    ) -> Self {
        Self {
            position,
            kind,
            description: description.into(),
            icon,
            links: Neighbors::default(),
        }
    }

    pub fn from_class(
        position: Position,
        class: TileClass,
        description: impl Into<String>,
        icon: char,
    ) -> Self {
        Self::new(position, TileKind::from_class(class), description, icon)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn kind(&self) -> &TileKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut TileKind {
        &mut self.kind
    }

    pub fn class(&self) -> TileClass {
        self.kind.class()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon(&self) -> char {
        self.icon
    }

    pub fn links(&self) -> &Neighbors {
        &self.links
    }

    pub fn neighbor(&self, direction: CardinalDirection) -> Option<Position> {
        self.links.get(direction)
    }

    pub(crate) fn set_links(&mut self, links: Neighbors) {
        self.links = links;
    }

    pub fn landmark(&self) -> Option<&Landmark> {
        match &self.kind {
            TileKind::Landmark(landmark) => Some(landmark),
            _ => None,
        }
    }

    pub fn landmark_mut(&mut self) -> Option<&mut Landmark> {
        match &mut self.kind {
            TileKind::Landmark(landmark) => Some(landmark),
            _ => None,
        }
    }

    /// Question the presentation layer asks before engaging this tile.
    pub fn prompt(&self) -> TilePrompt {
        match &self.kind {
            TileKind::Ground => TilePrompt::None,
            TileKind::Landmark(landmark) => match landmark.kind() {
                LandmarkKind::Crater => TilePrompt::Confirm("Do you want to jump in the crater?"),
                LandmarkKind::SpaceRock => {
                    TilePrompt::Confirm("Do you want to check under the space rock?")
                }
            },
            TileKind::Wormhole => TilePrompt::Confirm("Do you want to walk through the worm hole?"),
            TileKind::Launchpad => TilePrompt::LaunchMenu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ItemKind;

    #[test]
    fn landmark_treasure_is_taken_once() {
        let mut landmark = Landmark::new(LandmarkKind::SpaceRock);
        landmark.hide_treasure(Item::new(ItemKind::ShipPart, "Ship part", "A piece."));

        assert!(landmark.has_treasure());
        assert_eq!(landmark.take_treasure().unwrap().kind(), ItemKind::ShipPart);
        assert!(!landmark.has_treasure());
        assert!(landmark.take_treasure().is_none());
    }

    #[test]
    fn class_round_trips_through_kind() {
        for class in [
            TileClass::Ground,
            TileClass::Crater,
            TileClass::SpaceRock,
            TileClass::Wormhole,
            TileClass::Launchpad,
        ] {
            assert_eq!(TileKind::from_class(class).class(), class);
        }
    }

    #[test]
    fn prompts_follow_tile_kind() {
        let ground = Tile::from_class(Position::ORIGIN, TileClass::Ground, "dust", '_');
        let pad = Tile::from_class(Position::ORIGIN, TileClass::Launchpad, "ship", '^');
        let crater = Tile::from_class(Position::ORIGIN, TileClass::Crater, "hole", 'O');

        assert_eq!(ground.prompt(), TilePrompt::None);
        assert_eq!(pad.prompt(), TilePrompt::LaunchMenu);
        assert!(matches!(crater.prompt(), TilePrompt::Confirm(_)));
        assert!(crater.landmark().is_some());
        assert!(pad.landmark().is_none());
    }
}
