//! Data-driven level content and loaders.
//!
//! This crate houses the stock asteroid content and provides loaders for
//! RON/TOML data files:
//! - Level layouts: tile kinds, hidden encounters, hidden treasures (RON)
//! - Description catalog: tile texts and icons, encounters, items (RON)
//! - Game configuration (TOML)
//!
//! Content is resolved into a [`game_core::LevelSpec`] once, at world build
//! time, and never appears in game state afterwards.

pub mod catalog;
pub mod levels;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{Catalog, EncounterEntry, ItemEntry, TileEntry};
pub use levels::{LevelData, ResolveError};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, Content, ContentFactory, LevelLoader, LoadResult};
