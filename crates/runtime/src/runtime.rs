//! High-level session orchestrator.
//!
//! The runtime owns the game state, the rule configuration and the RNG
//! oracle, and drives one turn at a time against an injected
//! [`ActionProvider`]. Recoverable rejections are turned into narration;
//! anything else ends the session with a [`RuntimeError`].

use tracing::{debug, error, info, warn};

use game_content::Content;
use game_core::{
    Action, ActionResult, CardinalDirection, Engagement, ExecuteError, GameConfig, GameEngine,
    GameEnv, GameError, GameState, GameStatus, InitializationReport, InspectItemAction,
    InteractAction, InventoryActionError, InventoryError, LevelSpec, MoveAction, MoveError,
    Narration, PcgRng, PlayerAction, RngOracle, TilePrompt, UseItemAction,
};

use crate::api::{ActionProvider, Result, RuntimeError};

/// Main runtime that owns one game session.
pub struct Runtime {
    state: GameState,
    config: GameConfig,
    rng: Box<dyn RngOracle>,
    report: InitializationReport,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.state.turn.status
    }

    pub fn seed(&self) -> u64 {
        self.state.game_seed
    }

    /// Placements skipped while the world was built.
    pub fn initialization_report(&self) -> &InitializationReport {
        &self.report
    }

    /// Plays exactly one turn and returns the resulting status.
    ///
    /// Once the session is over this returns the terminal status without
    /// consulting the provider.
    pub fn play_turn(&mut self, provider: &mut dyn ActionProvider) -> Result<GameStatus> {
        let before = self.status();
        if before.is_terminal() {
            return Ok(before);
        }

        let action = provider.next_action(&self.state)?;
        debug!(
            turn = self.state.turn.turns,
            %action,
            health = self.state.player.health,
            oxygen = self.state.player.oxygen,
            "turn started"
        );

        match action {
            PlayerAction::Move(direction) => self.step(provider, direction)?,
            PlayerAction::CheckTile => self.check_tile(provider)?,
            PlayerAction::CheckInventory => self.check_inventory(provider)?,
        }

        let status = GameEngine::new(&mut self.state).end_turn();
        if status != before {
            info!(
                from = %before,
                to = %status,
                turns = self.state.turn.turns,
                "session status changed"
            );
            provider.status_changed(status)?;
        }

        Ok(status)
    }

    /// Plays turns until the session reaches a terminal status.
    pub fn run(&mut self, provider: &mut dyn ActionProvider) -> Result<GameStatus> {
        info!(
            seed = self.state.game_seed,
            dimensions = %self.state.world.dimensions(),
            "session started"
        );

        loop {
            let status = self.play_turn(provider)?;
            if status.is_terminal() {
                info!(
                    %status,
                    turns = self.state.turn.turns,
                    health = self.state.player.health,
                    oxygen = self.state.player.oxygen,
                    "session finished"
                );
                return Ok(status);
            }
        }
    }

    fn step(
        &mut self,
        provider: &mut dyn ActionProvider,
        direction: CardinalDirection,
    ) -> Result<()> {
        self.dispatch(provider, MoveAction::new(direction).into())?;
        Ok(())
    }

    fn check_tile(&mut self, provider: &mut dyn ActionProvider) -> Result<()> {
        let engagement = match self.state.current_tile() {
            Some(tile) => match tile.prompt() {
                TilePrompt::None => Engagement::Look,
                prompt @ TilePrompt::Confirm(_) => {
                    provider.narrate(&Narration::Description(tile.description().to_owned()))?;
                    match provider.engage(tile, prompt)? {
                        // Declined: the description is all the player gets.
                        Engagement::Look => return Ok(()),
                        engagement => engagement,
                    }
                }
                prompt @ TilePrompt::LaunchMenu => provider.engage(tile, prompt)?,
            },
            // The engine reports the desync.
            None => Engagement::Look,
        };

        self.dispatch(provider, InteractAction::new(engagement).into())?;
        Ok(())
    }

    fn check_inventory(&mut self, provider: &mut dyn ActionProvider) -> Result<()> {
        if self.state.player.inventory.is_empty() {
            provider.narrate(&Narration::InventoryEmpty)?;
            return Ok(());
        }

        let choice = {
            let entries = self.state.player.inventory.entries();
            provider.choose_item(&entries)?
        };
        let Some(index) = choice else {
            return Ok(());
        };

        let inspected = self.dispatch(provider, InspectItemAction::new(index).into())?;
        let Some(ActionResult::InspectItem(inspection)) = inspected else {
            return Ok(());
        };
        // Inspecting is an action too, so it may already have ended the session.
        if !inspection.consumable() || self.status().is_terminal() {
            return Ok(());
        }

        let confirmed = match self.state.player.inventory.find(index) {
            Some(item) => provider.confirm_use(item)?,
            None => false,
        };
        if confirmed {
            self.dispatch(provider, UseItemAction::new(index).into())?;
        }
        Ok(())
    }

    /// Executes one action and presents its narration.
    ///
    /// Returns `None` when the action was rejected as recoverable.
    fn dispatch(
        &mut self,
        provider: &mut dyn ActionProvider,
        action: Action,
    ) -> Result<Option<ActionResult>> {
        let env = GameEnv::new(&self.config, self.rng.as_ref());
        let nonce = self.state.turn.nonce;

        let executed = GameEngine::new(&mut self.state).execute(env, &action);
        match executed {
            Ok(outcome) => {
                debug!(
                    action = action.as_snake_case(),
                    nonce,
                    status = %outcome.status,
                    "action executed"
                );
                for narration in outcome.result.narration() {
                    provider.narrate(narration)?;
                }
                Ok(Some(outcome.result))
            }
            Err(error) if error.severity().is_recoverable() => {
                debug!(
                    action = action.as_snake_case(),
                    code = error.error_code(),
                    %error,
                    "action rejected"
                );
                if let Some(narration) = rejection_narration(&self.state, &error) {
                    provider.narrate(&narration)?;
                }
                Ok(None)
            }
            Err(error) => {
                error!(
                    action = action.as_snake_case(),
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    %error,
                    "action failed"
                );
                Err(RuntimeError::Execute(error))
            }
        }
    }
}

/// Player-facing explanation of a recoverable rejection.
fn rejection_narration(state: &GameState, error: &ExecuteError) -> Option<Narration> {
    let inventory_error = match error {
        ExecuteError::Move(e) => {
            return matches!(e.error, MoveError::Boundary { .. }).then_some(Narration::Boundary);
        }
        ExecuteError::InspectItem(e) | ExecuteError::UseItem(e) => match &e.error {
            InventoryActionError::Inventory(inner) => inner,
        },
        ExecuteError::Interact(_) | ExecuteError::SessionOver { .. } => return None,
    };

    match inventory_error {
        InventoryError::NotFound { .. } => Some(Narration::ItemNotFound),
        InventoryError::Full { .. } => Some(Narration::InventoryFull),
        InventoryError::NotConsumable { index, .. } => {
            state
                .player
                .inventory
                .find(*index)
                .map(|item| Narration::CannotUse {
                    item: item.name().to_owned(),
                })
        }
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: GameConfig,
    level: Option<LevelSpec>,
    seed: u64,
    rng: Option<Box<dyn RngOracle>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: GameConfig::default(),
            level: None,
            seed: 0,
            rng: None,
        }
    }

    /// Override the rule configuration
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the level to build the world from (required)
    pub fn level(mut self, level: LevelSpec) -> Self {
        self.level = Some(level);
        self
    }

    /// Use loaded content for both configuration and level
    pub fn content(self, content: Content) -> Self {
        self.config(content.config).level(content.level)
    }

    /// Base seed for every random draw of the session
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the default [`PcgRng`] oracle
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        let level = self.level.ok_or(RuntimeError::MissingLevel)?;

        let (state, report) = GameState::initialize(level, &self.config, self.seed)?;
        if report.ignored() > 0 {
            warn!(
                encounters = ?report.ignored_encounters,
                treasures = ?report.ignored_treasures,
                "placements on non-landmark tiles were ignored"
            );
        }
        debug!(
            seed = self.seed,
            dimensions = %state.world.dimensions(),
            start = %state.player.position,
            "world built"
        );

        Ok(Runtime {
            state,
            config: self.config,
            rng: self.rng.unwrap_or_else(|| Box::new(PcgRng)),
            report,
        })
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
