//! Player actions and their state transitions.
//!
//! Presentation code produces a [`PlayerAction`] (the menu choice for one
//! turn). The runtime expands it into one or more canonical [`Action`]s, each
//! of which is executed by the engine through the [`ActionTransition`]
//! pipeline.
mod interact;
mod inventory;
mod movement;

pub use interact::{InteractAction, InteractContext, InteractError, Interaction};
pub use inventory::{InspectItemAction, InventoryActionError, ItemInspection, UseItemAction};
pub use movement::{MoveAction, MoveError};

use crate::env::GameEnv;
use crate::narration::Narration;
use crate::state::{CardinalDirection, GameState, Position};

/// Defines how a concrete action variant mutates game state.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// One turn's menu choice as requested from the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PlayerAction {
    Move(CardinalDirection),
    CheckTile,
    CheckInventory,
}

/// Canonical action executed by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(MoveAction),
    Interact(InteractAction),
    InspectItem(InspectItemAction),
    UseItem(UseItemAction),
}

impl Action {
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Move(_) => "move",
            Action::Interact(_) => "interact",
            Action::InspectItem(_) => "inspect_item",
            Action::UseItem(_) => "use_item",
        }
    }
}

impl From<MoveAction> for Action {
    fn from(action: MoveAction) -> Self {
        Action::Move(action)
    }
}

impl From<InteractAction> for Action {
    fn from(action: InteractAction) -> Self {
        Action::Interact(action)
    }
}

impl From<InspectItemAction> for Action {
    fn from(action: InspectItemAction) -> Self {
        Action::InspectItem(action)
    }
}

impl From<UseItemAction> for Action {
    fn from(action: UseItemAction) -> Self {
        Action::UseItem(action)
    }
}

/// Result of a successfully executed action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionResult {
    Move { destination: Position },
    Interact(Interaction),
    InspectItem(ItemInspection),
    UseItem { narration: Vec<Narration> },
}

impl ActionResult {
    /// Narration produced by the action, in display order.
    pub fn narration(&self) -> &[Narration] {
        match self {
            ActionResult::Move { .. } => &[],
            ActionResult::Interact(interaction) => &interaction.narration,
            ActionResult::InspectItem(inspection) => &inspection.narration,
            ActionResult::UseItem { narration } => narration,
        }
    }

    /// True when the action completed the session objective.
    pub fn completed(&self) -> bool {
        matches!(self, ActionResult::Interact(interaction) if interaction.completed)
    }
}
