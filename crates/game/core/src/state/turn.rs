/// Session status of the turn state machine.
///
/// `Playing` is the only non-terminal state; every other variant ends the
/// session and is never left again.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Playing,
    WonByCompletion,
    LostHealth,
    LostOxygen,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Turn bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnState {
    /// Number of actions executed so far. Mixed into every random draw.
    pub nonce: u64,

    /// Number of completed player turns.
    pub turns: u64,

    pub status: GameStatus,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }
}
