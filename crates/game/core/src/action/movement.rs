use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{CardinalDirection, GameState, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("no tile {direction} of {origin}")]
    Boundary {
        origin: Position,
        direction: CardinalDirection,
    },

    #[error("player position {position} is not on the grid")]
    PositionDesync { position: Position },

    #[error("player ended at {actual} instead of {expected}")]
    DestinationMismatch { expected: Position, actual: Position },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MoveError::Boundary { .. } => ErrorSeverity::Recoverable,
            MoveError::PositionDesync { .. } | MoveError::DestinationMismatch { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MoveError::Boundary { .. } => "MOVE_BOUNDARY",
            MoveError::PositionDesync { .. } => "MOVE_POSITION_DESYNC",
            MoveError::DestinationMismatch { .. } => "MOVE_DESTINATION_MISMATCH",
        }
    }
}

/// Steps the player onto the adjacent tile in `direction`.
///
/// A successful move costs oxygen; a move into the grid boundary is rejected
/// before any state changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub direction: CardinalDirection,
}

impl MoveAction {
    pub fn new(direction: CardinalDirection) -> Self {
        Self { direction }
    }

    fn destination(&self, state: &GameState) -> Result<Position, MoveError> {
        let origin = state.player.position;
        let tile = state
            .world
            .get(origin)
            .ok_or(MoveError::PositionDesync { position: origin })?;

        tile.neighbor(self.direction).ok_or(MoveError::Boundary {
            origin,
            direction: self.direction,
        })
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;
    type Result = Position;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        self.destination(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Position, Self::Error> {
        let destination = self.destination(state)?;

        state.player.relocate(destination);
        state.player.spend_oxygen(env.config().move_oxygen_cost);

        Ok(destination)
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let position = state.player.position;
        if state.world.contains(position) {
            Ok(())
        } else {
            Err(MoveError::PositionDesync { position })
        }
    }
}
