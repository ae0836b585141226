//! Session orchestration for the asteroid escape game.
//!
//! This crate wires the action provider abstraction to the deterministic
//! engine in `game-core`. Consumers build a [`Runtime`] from loaded content and
//! drive it with an [`ActionProvider`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`providers`] ships reusable provider implementations
pub mod api;
pub mod providers;
pub mod runtime;

pub use api::{ActionProvider, ProviderError, ProviderResult, Result, RuntimeError};
pub use providers::ScriptedProvider;
pub use runtime::{Runtime, RuntimeBuilder};
