//! Debugging aids for game hosts
//!
//! # Overview
//!
//! - [`CommandGroupRegistry`] - named groups of console commands that are
//!   switched on and off together (e.g. `stat fps` + `stat unit`)
//! - [`DebugPrinter`] - category-gated debug prints routed to log, screen and
//!   consoles
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use debugkit_core::debug::CommandGroupRegistry;
//!
//! let registry = Arc::new(CommandGroupRegistry::new());
//! let stats = vec!["stat fps".to_string(), "stat unit".to_string()];
//! registry.register("Perf", &stats, &stats);
//!
//! let mut ran = Vec::new();
//! registry.enable("Perf", &mut |cmd: &str, _history: bool| ran.push(cmd.to_string()));
//! assert_eq!(ran, ["stat fps", "stat unit"]);
//! ```

pub mod builtins;
pub mod group;
pub mod print;
pub mod registry;

// Re-export commonly used types
pub use builtins::{STAT_FPS_AND_UNIT, register_builtins};
pub use group::{CommandGroup, GroupHandle};
pub use print::{DebugPrinter, LinearColor, NetMode, PrintFilter, PrintRequest, PrintSink};
pub use registry::{AutoCommandGroup, CommandGroupRegistry};
