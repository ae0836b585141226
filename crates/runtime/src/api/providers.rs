//! Abstraction for sourcing player intent and presenting outcomes.
//!
//! Runtime users plug in [`ActionProvider`] implementations so the session
//! can run with terminal input, scripted fixtures, or replays. The provider is
//! both the input side (menu choices, confirmations) and the output side
//! (narration, status changes) of the game.
use game_core::{
    Engagement, GameState, GameStatus, InventoryEntry, Item, Narration, PlayerAction, Tile,
    TilePrompt,
};
use thiserror::Error;

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// No more input will arrive (end of stdin, exhausted script).
    #[error("player input closed")]
    InputClosed,

    #[error("presentation I/O failed")]
    Io(#[from] std::io::Error),
}

/// Presentation/input collaborator driven by the runtime.
///
/// Different implementations can handle:
/// - Player input (from a terminal)
/// - Scripted/replayed sessions
/// - Testing fixtures
pub trait ActionProvider {
    /// Requests the player's choice for the next turn.
    fn next_action(&mut self, state: &GameState) -> ProviderResult<PlayerAction>;

    /// Asks how to engage the tile the player is standing on.
    ///
    /// Only called for tiles whose prompt is not [`TilePrompt::None`].
    fn engage(&mut self, tile: &Tile, prompt: TilePrompt) -> ProviderResult<Engagement>;

    /// Lets the player pick an inventory slot; `None` leaves the inventory.
    fn choose_item(&mut self, entries: &[InventoryEntry<'_>]) -> ProviderResult<Option<usize>>;

    /// Asks whether the selected consumable should be used.
    fn confirm_use(&mut self, item: &Item) -> ProviderResult<bool>;

    /// Presents one resolved event.
    fn narrate(&mut self, narration: &Narration) -> ProviderResult<()>;

    /// Called once whenever the session status changes.
    fn status_changed(&mut self, _status: GameStatus) -> ProviderResult<()> {
        Ok(())
    }
}
