//! Read-only collaborators handed to every action transition.
//!
//! [`GameEnv`] bundles the rule configuration and the RNG oracle so the engine
//! can reach both without owning them. The [`LevelSpec`] types describe the
//! world-build input.
mod level;
mod rng;

pub use level::{EncounterPlacement, LevelSpec, TilePlacement, TreasurePlacement};
pub use rng::{Draw, PcgRng, RngOracle, draw_seed};

use crate::config::GameConfig;

/// Aggregates the read-only data required by the action pipeline.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    config: &'a GameConfig,
    rng: &'a dyn RngOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(config: &'a GameConfig, rng: &'a dyn RngOracle) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }
}

impl std::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
