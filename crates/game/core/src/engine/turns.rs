use crate::state::{GameStatus, PlayerState};

use super::GameEngine;

/// Derives the session status after an action.
///
/// Terminal statuses are sticky. Completion wins over vitals; otherwise
/// health is checked before oxygen, so running out of both at once is a
/// health loss.
pub fn evaluate_status(current: GameStatus, player: &PlayerState, completed: bool) -> GameStatus {
    if current.is_terminal() {
        current
    } else if completed {
        GameStatus::WonByCompletion
    } else if player.is_dead() {
        GameStatus::LostHealth
    } else if player.is_out_of_oxygen() {
        GameStatus::LostOxygen
    } else {
        GameStatus::Playing
    }
}

/// Turn bookkeeping methods for GameEngine.
impl<'a> GameEngine<'a> {
    pub fn status(&self) -> GameStatus {
        self.state.turn.status
    }

    /// Number of completed turns.
    pub fn turns(&self) -> u64 {
        self.state.turn.turns
    }

    /// Closes the current turn and re-evaluates the session status.
    pub fn end_turn(&mut self) -> GameStatus {
        if !self.state.turn.status.is_terminal() {
            self.state.turn.turns += 1;
        }
        self.refresh_status(false)
    }

    pub(super) fn refresh_status(&mut self, completed: bool) -> GameStatus {
        let next = evaluate_status(self.state.turn.status, &self.state.player, completed);
        self.state.turn.status = next;
        next
    }
}
