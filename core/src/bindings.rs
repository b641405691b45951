//! Script-facing debug bindings
//!
//! The layer a host exposes to its scripting system or tools. It wraps a shared
//! [`CommandGroupRegistry`] with the conventions scripts expect:
//!
//! - registration reports success/failure instead of returning existing groups
//! - enable/disable fall back to a primary executor when none is passed
//! - debug prints go through the configured print gate

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::app::config::{Config, ConfigError};
use crate::console::CommandExecutor;
use crate::debug::builtins::register_builtins;
use crate::debug::print::{DebugPrinter, PrintFilter, PrintRequest, PrintSink};
use crate::debug::registry::{AutoCommandGroup, CommandGroupRegistry};

/// Debug utilities bound to one registry
pub struct DebugBindings {
    registry: Arc<CommandGroupRegistry>,
    /// Executor used when a caller doesn't pass one (e.g. the first local player's console)
    primary: Option<Box<dyn CommandExecutor + Send>>,
    printer: DebugPrinter,
    /// Frame counter, incremented once per host frame
    frame: AtomicU64,
    /// Keeps built-in groups registered for the bindings' lifetime
    _builtins: Vec<AutoCommandGroup>,
}

impl DebugBindings {
    /// Bindings over `registry` with default print settings and no built-in groups
    pub fn new(registry: Arc<CommandGroupRegistry>) -> Self {
        Self {
            registry,
            primary: None,
            printer: DebugPrinter::default(),
            frame: AtomicU64::new(0),
            _builtins: Vec::new(),
        }
    }

    /// Bindings configured from `config`
    ///
    /// Registers the built-in groups (if enabled) and every configured group.
    pub fn from_config(
        registry: Arc<CommandGroupRegistry>,
        config: &Config,
    ) -> Result<Self, ConfigError> {
        config.register_groups(&registry)?;
        let builtins = if config.builtins.enabled {
            register_builtins(&registry)
        } else {
            Vec::new()
        };

        Ok(Self {
            printer: config.printer(),
            _builtins: builtins,
            ..Self::new(registry)
        })
    }

    /// The underlying registry
    pub fn registry(&self) -> &Arc<CommandGroupRegistry> {
        &self.registry
    }

    // =========================================================================
    // Executor resolution
    // =========================================================================

    /// Set the executor used when enable/disable get no explicit executor
    pub fn set_primary_executor(&mut self, executor: Box<dyn CommandExecutor + Send>) {
        self.primary = Some(executor);
    }

    /// Remove the primary executor; implicit enable/disable become no-ops
    pub fn clear_primary_executor(&mut self) {
        self.primary = None;
    }

    pub fn has_primary_executor(&self) -> bool {
        self.primary.is_some()
    }

    // =========================================================================
    // Command groups
    // =========================================================================

    /// Register a new group
    ///
    /// Returns `false` if the name is empty or already registered; the
    /// existing group is left untouched.
    pub fn register_group(&self, name: &str, enable: &[String], disable: &[String]) -> bool {
        if name.is_empty() {
            return false;
        }
        let (_, created) = self.registry.register_new(name, enable, disable);
        created
    }

    /// Unregister a group, returning whether it existed
    pub fn unregister_group(&self, name: &str) -> bool {
        self.registry.unregister(name)
    }

    /// Set a registered group's help text, returning whether it exists
    pub fn set_group_help(&self, name: &str, help: &str) -> bool {
        match self.registry.find(name).and_then(|handle| handle.upgrade()) {
            Some(group) => {
                group.set_help(help);
                true
            }
            None => false,
        }
    }

    /// All registered group names, sorted
    pub fn all_group_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registry.all_names().into_iter().collect();
        names.sort();
        names
    }

    /// Enable a group through `executor`, or the primary executor if `None`
    ///
    /// Returns whether any commands were dispatched.
    pub fn enable_group(&mut self, name: &str, executor: Option<&mut dyn CommandExecutor>) -> bool {
        self.toggle_group(name, true, executor)
    }

    /// Disable a group through `executor`, or the primary executor if `None`
    pub fn disable_group(
        &mut self,
        name: &str,
        executor: Option<&mut dyn CommandExecutor>,
    ) -> bool {
        self.toggle_group(name, false, executor)
    }

    fn toggle_group(
        &mut self,
        name: &str,
        enable: bool,
        explicit: Option<&mut dyn CommandExecutor>,
    ) -> bool {
        let registry = &self.registry;
        let executor: &mut dyn CommandExecutor = match explicit {
            Some(executor) => executor,
            None => match self.primary.as_deref_mut() {
                Some(primary) => primary,
                None => {
                    tracing::debug!("no executor available for command group '{}'", name);
                    return false;
                }
            },
        };

        if enable {
            registry.enable(name, executor)
        } else {
            registry.disable(name, executor)
        }
    }

    // =========================================================================
    // Frames
    // =========================================================================

    /// Advance the frame counter, returning the new frame number
    pub fn advance_frame(&self) -> u64 {
        self.frame.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Number of frames the host has advanced so far
    pub fn frame_number(&self) -> u64 {
        self.frame.load(Ordering::Relaxed)
    }

    // =========================================================================
    // Printing
    // =========================================================================

    /// Print through the gate; returns `false` if the category was filtered out
    pub fn print(&self, request: &PrintRequest<'_>, sink: &mut dyn PrintSink) -> bool {
        self.printer.print(request, sink)
    }

    /// Change the `EnableDebug.PrintStringToConsole` value at runtime
    pub fn set_print_filter(&mut self, value: &str) {
        self.printer.set_filter(PrintFilter::new(value));
    }

    pub fn printer(&self) -> &DebugPrinter {
        &self.printer
    }

    pub fn printer_mut(&mut self) -> &mut DebugPrinter {
        &mut self.printer
    }
}
