//! Error types for action execution pipeline.

use crate::action::{
    ActionTransition, InspectItemAction, InteractAction, MoveAction, UseItemAction,
};
use crate::error::{ErrorSeverity, GameError};
use crate::state::GameStatus;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<<MoveAction as ActionTransition>::Error>),

    #[error("interact action failed: {0}")]
    Interact(TransitionPhaseError<<InteractAction as ActionTransition>::Error>),

    #[error("inspect item action failed: {0}")]
    InspectItem(TransitionPhaseError<<InspectItemAction as ActionTransition>::Error>),

    #[error("use item action failed: {0}")]
    UseItem(TransitionPhaseError<<UseItemAction as ActionTransition>::Error>),

    #[error("session already ended with status {status}")]
    SessionOver { status: GameStatus },
}

impl ExecuteError {
    /// Phase in which the underlying transition failed, if any.
    pub fn phase(&self) -> Option<TransitionPhase> {
        match self {
            ExecuteError::Move(e) => Some(e.phase),
            ExecuteError::Interact(e) => Some(e.phase),
            ExecuteError::InspectItem(e) => Some(e.phase),
            ExecuteError::UseItem(e) => Some(e.phase),
            ExecuteError::SessionOver { .. } => None,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::Move(e) => e.error.severity(),
            ExecuteError::Interact(e) => e.error.severity(),
            ExecuteError::InspectItem(e) => e.error.severity(),
            ExecuteError::UseItem(e) => e.error.severity(),
            ExecuteError::SessionOver { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ExecuteError::Move(e) => e.error.error_code(),
            ExecuteError::Interact(e) => e.error.error_code(),
            ExecuteError::InspectItem(e) => e.error.error_code(),
            ExecuteError::UseItem(e) => e.error.error_code(),
            ExecuteError::SessionOver { .. } => "SESSION_OVER",
        }
    }
}
