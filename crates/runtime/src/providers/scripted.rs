use std::collections::VecDeque;

use game_core::{
    Engagement, GameState, GameStatus, InventoryEntry, Item, Narration, PlayerAction, Tile,
    TilePrompt,
};

use crate::api::{ActionProvider, ProviderError, ProviderResult};

/// Replays a fixed list of player choices and records everything presented.
///
/// Unscripted prompts get eager answers: landmarks and wormholes are entered,
/// the launchpad attempts a launch, and consumables are used. Running out of
/// turn actions closes the input.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    actions: VecDeque<PlayerAction>,
    engagements: VecDeque<Engagement>,
    item_choices: VecDeque<Option<usize>>,
    confirmations: VecDeque<bool>,
    narration: Vec<Narration>,
    statuses: Vec<GameStatus>,
}

impl ScriptedProvider {
    pub fn new(actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_engagements(mut self, engagements: impl IntoIterator<Item = Engagement>) -> Self {
        self.engagements.extend(engagements);
        self
    }

    pub fn with_item_choices(mut self, choices: impl IntoIterator<Item = Option<usize>>) -> Self {
        self.item_choices.extend(choices);
        self
    }

    pub fn with_confirmations(mut self, confirmations: impl IntoIterator<Item = bool>) -> Self {
        self.confirmations.extend(confirmations);
        self
    }

    /// Turn actions not consumed yet.
    pub fn remaining(&self) -> usize {
        self.actions.len()
    }

    pub fn narration(&self) -> &[Narration] {
        &self.narration
    }

    pub fn statuses(&self) -> &[GameStatus] {
        &self.statuses
    }
}

impl ActionProvider for ScriptedProvider {
    fn next_action(&mut self, _state: &GameState) -> ProviderResult<PlayerAction> {
        self.actions.pop_front().ok_or(ProviderError::InputClosed)
    }

    fn engage(&mut self, _tile: &Tile, prompt: TilePrompt) -> ProviderResult<Engagement> {
        let fallback = match prompt {
            TilePrompt::LaunchMenu => Engagement::Launch,
            TilePrompt::Confirm(_) => Engagement::Enter,
            TilePrompt::None => Engagement::Look,
        };
        Ok(self.engagements.pop_front().unwrap_or(fallback))
    }

    fn choose_item(&mut self, _entries: &[InventoryEntry<'_>]) -> ProviderResult<Option<usize>> {
        Ok(self.item_choices.pop_front().flatten())
    }

    fn confirm_use(&mut self, _item: &Item) -> ProviderResult<bool> {
        Ok(self.confirmations.pop_front().unwrap_or(true))
    }

    fn narrate(&mut self, narration: &Narration) -> ProviderResult<()> {
        self.narration.push(narration.clone());
        Ok(())
    }

    fn status_changed(&mut self, status: GameStatus) -> ProviderResult<()> {
        self.statuses.push(status);
        Ok(())
    }
}
