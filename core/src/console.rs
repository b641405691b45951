//! Console command executor capability
//!
//! The host engine owns the actual console: parsing command strings, looking up
//! console variables, writing to the command history. This crate only needs a
//! way to hand it a command string, which is what [`CommandExecutor`] models.

/// Runs a single console command against the host's command context
///
/// Implemented by whatever the host uses to process console input (a local
/// player's console, a dedicated-server admin channel, a test recorder).
/// Failure handling is entirely up to the implementation: the caller only
/// dispatches.
pub trait CommandExecutor {
    /// Execute `command`, optionally recording it in the console history
    fn run(&mut self, command: &str, write_to_history: bool);
}

/// Closures can act as executors directly
impl<F> CommandExecutor for F
where
    F: FnMut(&str, bool),
{
    fn run(&mut self, command: &str, write_to_history: bool) {
        self(command, write_to_history)
    }
}

/// Executor that drops every command
///
/// Useful for hosts with no console target (headless tools, dedicated
/// servers without an admin channel).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullExecutor;

impl CommandExecutor for NullExecutor {
    fn run(&mut self, command: &str, _write_to_history: bool) {
        tracing::trace!("NullExecutor dropped command '{}'", command);
    }
}
