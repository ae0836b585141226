//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from world building, action providers, and the engine so
//! clients can bubble them up with consistent context.
use thiserror::Error;

use game_core::{ExecuteError, InitializationError};

use super::providers::ProviderError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime requires a level to be configured before building")]
    MissingLevel,

    #[error("failed to initialize game state from level")]
    InitialState(#[from] InitializationError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("action execution failed")]
    Execute(#[source] ExecuteError),
}

impl RuntimeError {
    /// True when the session ended because the player's input went away.
    pub fn is_input_closed(&self) -> bool {
        matches!(self, RuntimeError::Provider(ProviderError::InputClosed))
    }
}
