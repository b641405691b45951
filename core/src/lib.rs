//! Debugkit Core - debugging aids for game hosts
//!
//! This crate provides the pieces a game host wires into its console and
//! scripting layers while developing a game.
//!
//! # Architecture
//!
//! - [`CommandGroupRegistry`] - thread-safe named groups of console commands
//! - [`CommandExecutor`] - host capability that runs one console command
//! - [`DebugPrinter`] - category-gated prints to log, screen and consoles
//! - [`DebugBindings`] - script-facing wrapper tying the above together
//! - [`Config`] - `debugkit.toml` settings and startup command groups

pub mod app;
pub mod bindings;
pub mod console;
pub mod debug;
#[cfg(test)]
mod integration;
#[cfg(test)]
pub mod test_utils;

// Re-export core traits and types
pub use app::{Config, ConfigError};
pub use bindings::DebugBindings;
pub use console::{CommandExecutor, NullExecutor};
pub use debug::{
    AutoCommandGroup, CommandGroup, CommandGroupRegistry, DebugPrinter, GroupHandle, PrintFilter,
    PrintRequest, PrintSink,
};
