//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionResult, ActionTransition};
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes each action to its transition and wraps the result in [`ActionResult`].
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::Move(transition) => {
            let destination =
                drive_transition(transition, state, env).map_err(ExecuteError::Move)?;
            Ok(ActionResult::Move { destination })
        }
        Action::Interact(transition) => {
            let interaction =
                drive_transition(transition, state, env).map_err(ExecuteError::Interact)?;
            Ok(ActionResult::Interact(interaction))
        }
        Action::InspectItem(transition) => {
            let inspection =
                drive_transition(transition, state, env).map_err(ExecuteError::InspectItem)?;
            Ok(ActionResult::InspectItem(inspection))
        }
        Action::UseItem(transition) => {
            let narration =
                drive_transition(transition, state, env).map_err(ExecuteError::UseItem)?;
            Ok(ActionResult::UseItem { narration })
        }
    }
}
