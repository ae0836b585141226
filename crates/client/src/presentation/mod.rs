//! Terminal presentation: rendering, input parsing and the provider that
//! ties them to the runtime.
mod input;
pub mod render;
mod terminal;

pub use terminal::TerminalFrontend;
