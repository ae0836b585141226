//! Terminal client for the asteroid escape game.
//!
//! The binary is the composition root: it reads [`ClientConfig`] from the
//! environment, sets up file logging, loads content through
//! `game_content::ContentFactory`, and drives a `runtime::Runtime` with the
//! [`TerminalFrontend`].

pub mod config;
pub mod logging;
pub mod presentation;

pub use config::ClientConfig;
pub use presentation::TerminalFrontend;
