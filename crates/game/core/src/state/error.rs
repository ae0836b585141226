//! State initialization errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{GridDimensions, GridError, InventoryError, Position};

/// Which placement list an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum PlacementKind {
    Encounter,
    Treasure,
}

/// Errors raised while building the initial [`GameState`](super::GameState)
/// from a level specification.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitializationError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("{kind} placement at {position} is outside the {dimensions} grid")]
    PlacementOutOfBounds {
        kind: PlacementKind,
        position: Position,
        dimensions: GridDimensions,
    },

    #[error("player start {position} is outside the {dimensions} grid")]
    StartOutOfBounds {
        position: Position,
        dimensions: GridDimensions,
    },

    #[error("starting items do not fit in the inventory: {0}")]
    StartingInventory(InventoryError),
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            InitializationError::Grid(inner) => inner.error_code(),
            InitializationError::PlacementOutOfBounds { .. } => "INIT_PLACEMENT_OUT_OF_BOUNDS",
            InitializationError::StartOutOfBounds { .. } => "INIT_START_OUT_OF_BOUNDS",
            InitializationError::StartingInventory(_) => "INIT_STARTING_INVENTORY",
        }
    }
}
