//! Shared test utilities for integration and unit tests

use std::io;
use std::sync::{Arc, Mutex};

use crate::console::CommandExecutor;
use crate::debug::print::{LinearColor, PrintSink};

/// Build an owned command list from string literals
pub fn commands(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Recording Executor
// ============================================================================

/// Executor that remembers every command it was asked to run
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    pub calls: Vec<(String, bool)>,
}

impl RecordingExecutor {
    /// Just the command strings, in call order
    pub fn commands(&self) -> Vec<&str> {
        self.calls.iter().map(|(cmd, _)| cmd.as_str()).collect()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn run(&mut self, command: &str, write_to_history: bool) {
        self.calls.push((command.to_string(), write_to_history));
    }
}

// ============================================================================
// Recording Print Sink
// ============================================================================

/// Screen message captured by [`RecordingSink`]
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenMessage {
    pub text: String,
    pub color: LinearColor,
    pub duration: f32,
}

/// Console message captured by [`RecordingSink`]
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleMessage {
    pub text: String,
    pub category: String,
    pub duration: f32,
}

/// Print sink that records console and screen output
#[derive(Debug)]
pub struct RecordingSink {
    pub screen_enabled: bool,
    pub screen: Vec<ScreenMessage>,
    pub console: Vec<ConsoleMessage>,
    /// Display strings echoed to the local console
    pub local: Vec<String>,
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self {
            screen_enabled: true,
            screen: Vec::new(),
            console: Vec::new(),
            local: Vec::new(),
        }
    }
}

impl PrintSink for RecordingSink {
    fn screen_messages_enabled(&self) -> bool {
        self.screen_enabled
    }

    fn screen_message(&mut self, text: &str, color: LinearColor, duration: f32) {
        self.screen.push(ScreenMessage {
            text: text.to_string(),
            color,
            duration,
        });
    }

    fn console_message(&mut self, text: &str, category: &str, duration: f32) {
        self.console.push(ConsoleMessage {
            text: text.to_string(),
            category: category.to_string(),
            duration,
        });
    }

    fn local_console(&mut self, text: &str) {
        self.local.push(text.to_string());
    }
}

// ============================================================================
// Log Capture
// ============================================================================

/// Shared buffer the capturing subscriber writes formatted events into
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a TRACE-level subscriber on this thread and return its output
///
/// Lines look like `" INFO debug_print: [AI] hello"` (no timestamps or colors).
pub fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
