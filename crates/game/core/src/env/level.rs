//! Level description consumed once at world build time.
//!
//! A [`LevelSpec`] is plain data: the content crate produces it from RON files
//! or its built-in tables, and [`GameState::initialize`](crate::state::GameState::initialize)
//! turns it into a linked grid and a player.

use std::collections::HashSet;

use crate::state::{Encounter, GridDimensions, Item, Position, TileClass};

/// Installs one tile with its resolved description and icon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TilePlacement {
    pub position: Position,
    pub class: TileClass,
    pub description: String,
    pub icon: char,
}

impl TilePlacement {
    pub fn new(
        position: Position,
        class: TileClass,
        description: impl Into<String>,
        icon: char,
    ) -> Self {
        Self {
            position,
            class,
            description: description.into(),
            icon,
        }
    }
}

/// Hides an encounter on the landmark at `position`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncounterPlacement {
    pub position: Position,
    pub encounter: Encounter,
}

impl EncounterPlacement {
    pub fn new(position: Position, encounter: Encounter) -> Self {
        Self {
            position,
            encounter,
        }
    }
}

/// Hides a treasure item on the landmark at `position`.
#[derive(Debug, PartialEq, Eq)]
pub struct TreasurePlacement {
    pub position: Position,
    pub item: Item,
}

impl TreasurePlacement {
    pub fn new(position: Position, item: Item) -> Self {
        Self { position, item }
    }
}

/// Complete world-build input.
///
/// `tiles` must cover every cell exactly once. Encounter and treasure
/// placements on non-landmark cells are skipped.
#[derive(Debug, PartialEq, Eq)]
pub struct LevelSpec {
    pub dimensions: GridDimensions,
    pub start: Position,
    pub tiles: Vec<TilePlacement>,
    pub encounters: Vec<EncounterPlacement>,
    pub treasures: Vec<TreasurePlacement>,
    pub starting_items: Vec<Item>,
}

impl LevelSpec {
    pub fn new(dimensions: GridDimensions, start: Position) -> Self {
        Self {
            dimensions,
            start,
            tiles: Vec::new(),
            encounters: Vec::new(),
            treasures: Vec::new(),
            starting_items: Vec::new(),
        }
    }

    /// Fills every cell not yet covered by a placement with the given tile.
    ///
    /// Used by hand-built levels that only list their special tiles.
    pub fn fill_remaining(&mut self, class: TileClass, description: &str, icon: char) {
        let covered: HashSet<Position> = self.tiles.iter().map(|tile| tile.position).collect();
        let missing: Vec<Position> = self
            .dimensions
            .positions()
            .filter(|position| !covered.contains(position))
            .collect();
        for position in missing {
            self.tiles
                .push(TilePlacement::new(position, class, description, icon));
        }
    }
}
