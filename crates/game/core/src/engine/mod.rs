//! Action execution pipeline and the session state machine.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It
//! orchestrates the transition phases, advances the action nonce, and moves
//! the session between `Playing` and the terminal statuses.

mod errors;
mod transition;
mod turns;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use turns::evaluate_status;

use crate::action::{Action, ActionResult};
use crate::env::GameEnv;
use crate::state::{GameState, GameStatus};

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub result: ActionResult,

    /// Session status after the action.
    pub status: GameStatus,
}

/// Game engine that manages action execution and the session status.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes an action through its transition pipeline.
    ///
    /// Rejected actions leave the state, including the nonce, untouched.
    /// Once the session reached a terminal status every action is refused.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let status = self.state.turn.status;
        if status.is_terminal() {
            return Err(ExecuteError::SessionOver { status });
        }

        let result = transition::execute_transition(action, self.state, &env)?;

        // Increment nonce after successful execution
        self.state.turn.nonce += 1;

        let status = self.refresh_status(result.completed());
        Ok(ExecutionOutcome { result, status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{InteractAction, MoveAction, UseItemAction};
    use crate::config::GameConfig;
    use crate::env::PcgRng;
    use crate::error::GameError;
    use crate::state::{
        CardinalDirection, Encounter, Engagement, ItemKind, Position, Tile, TileClass,
    };
    use crate::testing::{item, open_field};

    #[test]
    fn successful_actions_advance_the_nonce() {
        let mut state = open_field(3, 3, Position::new(1, 1));
        let config = GameConfig::default();
        let env = GameEnv::new(&config, &PcgRng);
        let mut engine = GameEngine::new(&mut state);

        let outcome = engine
            .execute(env, &Action::Move(MoveAction::new(CardinalDirection::Right)))
            .unwrap();
        assert_eq!(
            outcome.result,
            ActionResult::Move {
                destination: Position::new(2, 1)
            }
        );

        let error = engine
            .execute(env, &Action::Move(MoveAction::new(CardinalDirection::Right)))
            .unwrap_err();
        assert_eq!(error.phase(), Some(TransitionPhase::PreValidate));
        assert!(error.severity().is_recoverable());

        assert_eq!(state.turn.nonce, 1);
        assert_eq!(state.player.oxygen, 99);
    }

    #[test]
    fn last_breath_ends_the_session() {
        let mut state = open_field(1, 3, Position::ORIGIN);
        state.player.oxygen = 1;
        let config = GameConfig::default();
        let env = GameEnv::new(&config, &PcgRng);
        let mut engine = GameEngine::new(&mut state);

        let outcome = engine
            .execute(env, &Action::Move(MoveAction::new(CardinalDirection::Right)))
            .unwrap();
        assert_eq!(outcome.status, GameStatus::LostOxygen);

        let refused = engine
            .execute(env, &Action::Move(MoveAction::new(CardinalDirection::Right)))
            .unwrap_err();
        assert_eq!(
            refused,
            ExecuteError::SessionOver {
                status: GameStatus::LostOxygen
            }
        );
        assert_eq!(state.player.position, Position::new(1, 0));
    }

    #[test]
    fn encounter_damage_can_kill() {
        let mut state = open_field(2, 2, Position::ORIGIN);
        *state.world.get_mut(Position::ORIGIN).unwrap() =
            Tile::from_class(Position::ORIGIN, TileClass::SpaceRock, "rock", '#');
        state.world[Position::ORIGIN]
            .landmark_mut()
            .unwrap()
            .hide_encounter(Encounter::new("Khaleesi", "Khaleesi"));
        state.player.health = 10;
        let config = GameConfig::default();
        let env = GameEnv::new(&config, &PcgRng);

        let outcome = GameEngine::new(&mut state)
            .execute(env, &Action::Interact(InteractAction::new(Engagement::Enter)))
            .unwrap();

        assert_eq!(outcome.status, GameStatus::LostHealth);
        assert_eq!(state.player.health, 0);
    }

    #[test]
    fn end_turn_counts_turns_until_terminal() {
        let mut state = open_field(2, 2, Position::ORIGIN);
        state.player.add_inventory(item(ItemKind::HealthPack)).unwrap();
        let config = GameConfig::default();
        let env = GameEnv::new(&config, &PcgRng);
        let mut engine = GameEngine::new(&mut state);

        engine
            .execute(env, &Action::UseItem(UseItemAction::new(1)))
            .unwrap();
        assert_eq!(engine.end_turn(), GameStatus::Playing);
        assert_eq!(engine.turns(), 1);
        assert_eq!(engine.status(), GameStatus::Playing);
    }
}
