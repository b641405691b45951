//! Gated debug printing
//!
//! Debug prints are dropped unless the `EnableDebug.PrintStringToConsole`
//! setting enables them, either globally (`1` / `true`) or for one category
//! (the category name itself). Prints that pass the gate are tagged with their
//! category and routed to the log, the screen and the connected consoles.
//!
//! The screen and console targets belong to the host, so they are reached
//! through [`PrintSink`]. Log output goes through `tracing`.

use serde::{Deserialize, Serialize};

/// Name of the setting that gates debug prints
pub const PRINT_FILTER_SETTING: &str = "EnableDebug.PrintStringToConsole";

/// Category used when the caller doesn't name one
pub const DEFAULT_CATEGORY: &str = "Temp";

/// Screen duration used when a print asks for a negative duration
pub const DEFAULT_SCREEN_DURATION: f32 = 2.0;

/// Linear RGBA color for screen messages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LinearColor {
    pub const CYAN: LinearColor = LinearColor::rgb(0.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl Default for LinearColor {
    fn default() -> Self {
        Self::CYAN
    }
}

/// Parsed value of the print gate setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintFilter {
    /// Trimmed, upper-cased setting value
    value: String,
}

impl Default for PrintFilter {
    fn default() -> Self {
        Self::new("0")
    }
}

impl PrintFilter {
    /// Parse a setting value (`0`, `1`, `true`, or a category name)
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_uppercase(),
        }
    }

    /// Normalized setting value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Check whether prints in `category` pass the gate
    pub fn allows(&self, category: &str) -> bool {
        self.value == "1" || self.value == "TRUE" || self.value == category.trim().to_uppercase()
    }
}

/// Network role of the printing instance, used to prefix output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetMode {
    #[default]
    Standalone,
    Client,
    ListenServer,
    DedicatedServer,
}

impl NetMode {
    /// Prefix for log and screen output (`Client3: `, `Server: `)
    pub fn display_prefix(self, client_id: u32) -> String {
        match self {
            NetMode::Standalone => String::new(),
            NetMode::Client => format!("Client{}: ", client_id),
            NetMode::ListenServer | NetMode::DedicatedServer => "Server: ".to_string(),
        }
    }

    /// Prefix for messages broadcast to consoles
    pub fn console_prefix(self) -> &'static str {
        match self {
            NetMode::Standalone => "",
            NetMode::Client => "Client: ",
            NetMode::ListenServer | NetMode::DedicatedServer => "Server: ",
        }
    }
}

/// Host-side output targets for debug prints
pub trait PrintSink {
    /// Whether on-screen messages are currently shown
    fn screen_messages_enabled(&self) -> bool {
        true
    }

    /// Show `text` on screen for `duration` seconds
    fn screen_message(&mut self, text: &str, color: LinearColor, duration: f32);

    /// Send `text` to every connected console
    fn console_message(&mut self, text: &str, category: &str, duration: f32);

    /// Echo a logged print to the local player's console, if there is one
    fn local_console(&mut self, _text: &str) {}
}

/// Sink that discards screen and console output (log output still happens)
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOnlySink;

impl PrintSink for LogOnlySink {
    fn screen_messages_enabled(&self) -> bool {
        false
    }

    fn screen_message(&mut self, _text: &str, _color: LinearColor, _duration: f32) {}

    fn console_message(&mut self, _text: &str, _category: &str, _duration: f32) {}
}

/// A single debug print
#[derive(Debug, Clone)]
pub struct PrintRequest<'a> {
    pub text: &'a str,
    pub category: &'a str,
    pub to_console: bool,
    pub to_screen: bool,
    pub to_log: bool,
    pub color: LinearColor,
    /// Screen duration in seconds; negative means "use the configured default"
    pub duration: f32,
    /// Name of the object issuing the print, for the optional log prefix
    pub source: Option<&'a str>,
}

impl<'a> PrintRequest<'a> {
    /// Print `text` everywhere in the default category
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            category: DEFAULT_CATEGORY,
            to_console: true,
            to_screen: true,
            to_log: true,
            color: LinearColor::CYAN,
            duration: 1.0,
            source: None,
        }
    }

    pub fn category(mut self, category: &'a str) -> Self {
        self.category = category;
        self
    }

    pub fn source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }
}

/// Applies the print gate and routes prints to their targets
#[derive(Debug, Clone)]
pub struct DebugPrinter {
    filter: PrintFilter,
    net_mode: NetMode,
    client_id: u32,
    default_duration: f32,
    log_source: bool,
}

impl Default for DebugPrinter {
    fn default() -> Self {
        Self {
            filter: PrintFilter::default(),
            net_mode: NetMode::Standalone,
            client_id: 0,
            default_duration: DEFAULT_SCREEN_DURATION,
            log_source: false,
        }
    }
}

impl DebugPrinter {
    pub fn new(filter: PrintFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn filter(&self) -> &PrintFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: PrintFilter) {
        self.filter = filter;
    }

    pub fn set_net_mode(&mut self, net_mode: NetMode, client_id: u32) {
        self.net_mode = net_mode;
        self.client_id = client_id;
    }

    pub fn set_default_duration(&mut self, seconds: f32) {
        self.default_duration = seconds;
    }

    /// Prefix log lines with the issuing object's name
    pub fn set_log_source(&mut self, enabled: bool) {
        self.log_source = enabled;
    }

    /// Print through the gate
    ///
    /// Returns `false` if the category is filtered out, in which case nothing
    /// is logged or sent to `sink`.
    pub fn print(&self, request: &PrintRequest<'_>, sink: &mut dyn PrintSink) -> bool {
        if !self.filter.allows(request.category) {
            return false;
        }

        let tagged = format!("[{}] {}", request.category, request.text);
        self.print_local(request, &tagged, sink);

        if request.to_console {
            let text = format!("{}{}", self.net_mode.console_prefix(), tagged);
            sink.console_message(&text, request.category, request.duration);
        }
        true
    }

    /// Text written to the log for a print whose display string is `display`
    ///
    /// With source logging on, the issuing object's name is prepended as
    /// `[<source>] `. Screen and console output never carry it.
    pub fn log_line(&self, request: &PrintRequest<'_>, display: &str) -> String {
        match request.source {
            Some(source) if self.log_source => format!("[{}] {}", source, display),
            _ => display.to_string(),
        }
    }

    /// Log and screen output, without the gate or console broadcast
    fn print_local(&self, request: &PrintRequest<'_>, text: &str, sink: &mut dyn PrintSink) {
        let display = format!("{}{}", self.net_mode.display_prefix(self.client_id), text);

        let log_line = self.log_line(request, &display);
        if request.to_log {
            tracing::info!(target: "debug_print", "{}", log_line);
            sink.local_console(&display);
        } else {
            tracing::trace!(target: "debug_print", "{}", log_line);
        }

        if request.to_screen {
            if sink.screen_messages_enabled() {
                let duration = if request.duration < 0.0 {
                    self.default_duration
                } else {
                    request.duration
                };
                sink.screen_message(&display, request.color, duration);
            } else {
                tracing::trace!(
                    target: "debug_print",
                    "screen messages disabled, cannot print to screen"
                );
            }
        }
    }
}
