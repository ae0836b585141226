//! Deterministic rules of the asteroid escape game.
//!
//! `game-core` defines the canonical rules (actions, engine, world state) and
//! exposes pure APIs shared by the runtime and the content loaders. All state
//! mutation flows through [`engine::GameEngine`]; nothing in this crate
//! performs I/O.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod narration;
pub mod state;

#[cfg(test)]
mod testing;

pub use action::{
    Action, ActionResult, ActionTransition, InspectItemAction, InteractAction, InteractContext,
    InteractError, Interaction, InventoryActionError, ItemInspection, MoveAction, MoveError,
    PlayerAction, UseItemAction,
};
pub use config::GameConfig;
pub use engine::{
    ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase, TransitionPhaseError,
    evaluate_status,
};
pub use env::{
    Draw, EncounterPlacement, GameEnv, LevelSpec, PcgRng, RngOracle, TilePlacement,
    TreasurePlacement, draw_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use narration::Narration;
pub use state::{
    CardinalDirection, Encounter, Engagement, GameState, GameStatus, Grid, GridBuilder,
    GridDimensions, GridError, InitializationError, InitializationReport, Inventory,
    InventoryEntry, InventoryError, Item, ItemKind, Landmark, LandmarkKind, Neighbors,
    PlacementKind, PlayerState, Position, Tile, TileClass, TileKind, TilePrompt, TurnState,
};
