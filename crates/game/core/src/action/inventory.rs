use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::narration::Narration;
use crate::state::{GameState, InventoryError, ItemKind};

/// Errors raised by inventory actions.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryActionError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl GameError for InventoryActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            InventoryActionError::Inventory(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            InventoryActionError::Inventory(error) => error.error_code(),
        }
    }
}

/// What the player learned by selecting an item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemInspection {
    pub narration: Vec<Narration>,
    pub kind: ItemKind,
}

impl ItemInspection {
    /// The player may be offered to consume the item.
    pub fn consumable(&self) -> bool {
        self.kind.is_consumable()
    }
}

/// Reads the description of the item at a 1-based inventory slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InspectItemAction {
    pub index: usize,
}

impl InspectItemAction {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl ActionTransition for InspectItemAction {
    type Error = InventoryActionError;
    type Result = ItemInspection;

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
    ) -> Result<ItemInspection, Self::Error> {
        let item = state.player.select_item(self.index)?;
        Ok(ItemInspection {
            narration: vec![Narration::Description(item.description().to_owned())],
            kind: item.kind(),
        })
    }
}

/// Consumes the health pack at a 1-based inventory slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItemAction {
    pub index: usize,
}

impl UseItemAction {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl ActionTransition for UseItemAction {
    type Error = InventoryActionError;
    type Result = Vec<Narration>;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let kind = state.player.select_item(self.index)?.kind();
        if kind.is_consumable() {
            Ok(())
        } else {
            Err(InventoryError::NotConsumable {
                index: self.index,
                kind,
            }
            .into())
        }
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
    ) -> Result<Vec<Narration>, Self::Error> {
        let amount = env.config().health_pack_restore;
        // The consumed pack is dropped here.
        state.player.use_health_pack(self.index, amount)?;
        Ok(vec![Narration::Healed { amount }])
    }
}
