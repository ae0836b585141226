//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the world grid, the
//! player, and turn bookkeeping, plus the one-shot initialization that turns a
//! [`LevelSpec`] into a playable [`GameState`]. Runtime layers query this
//! state but mutate it exclusively through the engine.
mod common;
mod error;
mod grid;
mod inventory;
mod item;
mod player;
mod tile;
mod turn;

pub use common::{CardinalDirection, GridDimensions, Position};
pub use error::{InitializationError, PlacementKind};
pub use grid::{Grid, GridBuilder, GridError};
pub use inventory::{Inventory, InventoryEntry, InventoryError};
pub use item::{Item, ItemKind};
pub use player::PlayerState;
pub use tile::{
    Encounter, Engagement, Landmark, LandmarkKind, Neighbors, Tile, TileClass, TileKind,
    TilePrompt,
};
pub use turn::{GameStatus, TurnState};

use crate::config::GameConfig;
use crate::env::LevelSpec;

/// Canonical snapshot of the game session.
#[derive(Debug, PartialEq, Eq)]
pub struct GameState {
    /// RNG seed for deterministic random generation.
    ///
    /// Set once at game initialization and never modified.
    /// Combined with `turn.nonce` to generate unique seeds for each random event.
    pub game_seed: u64,

    /// Turn bookkeeping including the session status.
    pub turn: TurnState,

    /// The world grid; owns every tile.
    pub world: Grid,

    pub player: PlayerState,
}

/// Placements skipped during initialization because their cell is not a landmark.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InitializationReport {
    pub ignored_encounters: Vec<Position>,
    pub ignored_treasures: Vec<Position>,
}

impl InitializationReport {
    pub fn ignored(&self) -> usize {
        self.ignored_encounters.len() + self.ignored_treasures.len()
    }
}

impl GameState {
    pub fn new(game_seed: u64, world: Grid, player: PlayerState) -> Self {
        Self {
            game_seed,
            turn: TurnState::new(),
            world,
            player,
        }
    }

    /// Builds the world described by `level`.
    ///
    /// Tiles are installed and linked first, then encounters and treasures are
    /// hidden. Placements that target a non-landmark cell are skipped and listed
    /// in the returned report; placements outside the grid are errors.
    pub fn initialize(
        level: LevelSpec,
        config: &GameConfig,
        game_seed: u64,
    ) -> Result<(Self, InitializationReport), InitializationError> {
        let LevelSpec {
            dimensions,
            start,
            tiles,
            encounters,
            treasures,
            starting_items,
        } = level;

        let mut builder = GridBuilder::new(dimensions)?;
        for placement in tiles {
            builder.set_tile(Tile::from_class(
                placement.position,
                placement.class,
                placement.description,
                placement.icon,
            ))?;
        }
        let mut world = builder.link_all()?;

        let mut report = InitializationReport::default();

        for placement in encounters {
            let tile = world.get_mut(placement.position).ok_or(
                InitializationError::PlacementOutOfBounds {
                    kind: PlacementKind::Encounter,
                    position: placement.position,
                    dimensions,
                },
            )?;
            match tile.landmark_mut() {
                Some(landmark) => {
                    landmark.hide_encounter(placement.encounter);
                }
                None => report.ignored_encounters.push(placement.position),
            }
        }

        for placement in treasures {
            let tile = world.get_mut(placement.position).ok_or(
                InitializationError::PlacementOutOfBounds {
                    kind: PlacementKind::Treasure,
                    position: placement.position,
                    dimensions,
                },
            )?;
            match tile.landmark_mut() {
                Some(landmark) => {
                    landmark.hide_treasure(placement.item);
                }
                None => report.ignored_treasures.push(placement.position),
            }
        }

        if !dimensions.contains(start) {
            return Err(InitializationError::StartOutOfBounds {
                position: start,
                dimensions,
            });
        }

        let mut player = PlayerState::new(start, config);
        for item in starting_items {
            player
                .add_inventory(item)
                .map_err(InitializationError::StartingInventory)?;
        }

        Ok((Self::new(game_seed, world, player), report))
    }

    /// Tile the player currently stands on.
    pub fn current_tile(&self) -> Option<&Tile> {
        self.world.get(self.player.position)
    }

    pub fn status(&self) -> GameStatus {
        self.turn.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{EncounterPlacement, TilePlacement, TreasurePlacement};

    fn level() -> LevelSpec {
        let dimensions = GridDimensions::new(2, 3);
        let tiles = dimensions
            .positions()
            .map(|position| {
                let class = if position == Position::new(2, 1) {
                    TileClass::SpaceRock
                } else {
                    TileClass::Ground
                };
                TilePlacement::new(position, class, "tile", '_')
            })
            .collect();

        LevelSpec {
            dimensions,
            start: Position::new(0, 0),
            tiles,
            encounters: vec![
                EncounterPlacement::new(Position::new(2, 1), Encounter::new("Vapebro", "fog")),
                EncounterPlacement::new(Position::new(0, 1), Encounter::new("Khaleesi", "fire")),
            ],
            treasures: vec![TreasurePlacement::new(
                Position::new(1, 0),
                Item::new(ItemKind::ShipPart, "Ship part", "piece"),
            )],
            starting_items: vec![Item::new(ItemKind::HealthPack, "Health pack", "heal")],
        }
    }

    #[test]
    fn initialize_hides_assets_and_skips_non_landmarks() {
        let (state, report) = GameState::initialize(level(), &GameConfig::default(), 7).unwrap();

        let rock = state.world[Position::new(2, 1)].landmark().unwrap();
        assert_eq!(rock.encounter().unwrap().name, "Vapebro");
        assert!(!rock.has_treasure());

        assert_eq!(report.ignored_encounters, vec![Position::new(0, 1)]);
        assert_eq!(report.ignored_treasures, vec![Position::new(1, 0)]);
        assert_eq!(report.ignored(), 2);

        assert_eq!(state.player.inventory.len(), 1);
        assert_eq!(state.game_seed, 7);
        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.current_tile().unwrap().position(), Position::ORIGIN);
    }

    #[test]
    fn initialize_rejects_out_of_bounds_placements() {
        let mut spec = level();
        spec.treasures.push(TreasurePlacement::new(
            Position::new(9, 9),
            Item::new(ItemKind::OreResource, "Ore", "ore"),
        ));

        assert!(matches!(
            GameState::initialize(spec, &GameConfig::default(), 0),
            Err(InitializationError::PlacementOutOfBounds {
                kind: PlacementKind::Treasure,
                ..
            })
        ));
    }

    #[test]
    fn initialize_rejects_incomplete_layout_and_bad_start() {
        let mut spec = level();
        spec.tiles.pop();
        assert!(matches!(
            GameState::initialize(spec, &GameConfig::default(), 0),
            Err(InitializationError::Grid(GridError::Unfilled { .. }))
        ));

        let mut spec = level();
        spec.start = Position::new(3, 0);
        assert!(matches!(
            GameState::initialize(spec, &GameConfig::default(), 0),
            Err(InitializationError::StartOutOfBounds { .. })
        ));
    }
}
