//! Session setup shared by every command
//!
//! Loads the config, builds the bindings and installs stdout as the console.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use debugkit_core::app::config;
use debugkit_core::debug::print::{LinearColor, PrintSink};
use debugkit_core::{CommandExecutor, CommandGroupRegistry, Config, DebugBindings};

/// Console executor that echoes each command to a writer
///
/// `run` can't fail, so the first write error is kept for [`finish`](Self::finish).
pub struct EchoExecutor<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> EchoExecutor<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Report the first write error, if any
    pub fn finish(self) -> io::Result<()> {
        self.error.map_or(Ok(()), Err)
    }
}

impl<W: Write> CommandExecutor for EchoExecutor<W> {
    fn run(&mut self, command: &str, write_to_history: bool) {
        if self.error.is_none()
            && let Err(e) = writeln!(self.out, "> {}", command)
        {
            self.error = Some(e);
        }
        tracing::debug!("dispatched '{}' (history: {})", command, write_to_history);
    }
}

/// Print sink standing in for the screen and connected consoles
pub struct EchoSink<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> EchoSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Report the first write error, if any
    pub fn finish(self) -> io::Result<()> {
        self.error.map_or(Ok(()), Err)
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        if self.error.is_none()
            && let Err(e) = writeln!(self.out, "{}", args)
        {
            self.error = Some(e);
        }
    }
}

impl<W: Write> PrintSink for EchoSink<W> {
    fn screen_message(&mut self, text: &str, _color: LinearColor, duration: f32) {
        self.line(format_args!("[screen {:.1}s] {}", duration, text));
    }

    fn console_message(&mut self, text: &str, _category: &str, _duration: f32) {
        self.line(format_args!("[console] {}", text));
    }
}

/// Load the config from `path`, or the platform config directory if `None`
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => config::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(config::load()),
    }
}

/// Build bindings for one CLI invocation
pub fn open(path: Option<&Path>) -> Result<DebugBindings> {
    let config = load_config(path)?;
    let registry = Arc::new(CommandGroupRegistry::new());
    let mut bindings =
        DebugBindings::from_config(registry, &config).context("Failed to register command groups")?;
    bindings.set_primary_executor(Box::new(EchoExecutor::new(io::stdout())));
    Ok(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_with_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debugkit.toml");
        std::fs::write(
            &path,
            "[builtins]\nenabled = false\n\n[[groups]]\nname = \"Perf\"\nenable = [\"stat fps\"]\n",
        )
        .unwrap();

        let bindings = open(Some(&path)).unwrap();
        assert_eq!(bindings.all_group_names(), ["Perf"]);
        assert!(bindings.has_primary_executor());
    }

    #[test]
    fn test_open_rejects_invalid_groups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debugkit.toml");
        std::fs::write(&path, "[[groups]]\nname = \"\"\n").unwrap();

        let err = open(Some(&path)).err().unwrap();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn test_echo_executor_and_sink() {
        let mut out = Vec::new();
        let mut executor = EchoExecutor::new(&mut out);
        executor.run("stat fps", true);
        executor.run("stat unit", true);
        executor.finish().unwrap();

        let mut sink = EchoSink::new(&mut out);
        sink.screen_message("[AI] hi", LinearColor::CYAN, 1.0);
        sink.console_message("[AI] hi", "AI", 1.0);
        sink.finish().unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "> stat fps\n> stat unit\n[screen 1.0s] [AI] hi\n[console] [AI] hi\n"
        );
    }
}
