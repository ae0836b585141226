//! Built-in [`ActionProvider`](crate::ActionProvider) implementations.

mod scripted;

pub use scripted::ScriptedProvider;
