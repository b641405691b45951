//! Configuration management (debugkit.toml)
//!
//! Handles loading, saving, and providing defaults for debug settings and the
//! command groups a host wants registered at startup.
//! Settings are stored in TOML format in the platform-specific config directory.

use std::path::{Path, PathBuf};

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::debug::print::{DEFAULT_SCREEN_DURATION, DebugPrinter, NetMode, PrintFilter};
use crate::debug::registry::CommandGroupRegistry;

/// File name of the configuration inside [`config_dir`]
pub const CONFIG_FILE_NAME: &str = "debugkit.toml";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read or written
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A `[[groups]]` entry has no name
    #[error("command group #{0} has an empty name")]
    EmptyGroupName(usize),

    /// Two `[[groups]]` entries share a name
    #[error("command group '{0}' is defined more than once")]
    DuplicateGroup(String),
}

/// Debug tooling configuration.
///
/// Contains all user-configurable settings organized into sections.
/// Serialized to/from TOML format for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Debug print settings
    #[serde(default)]
    pub print: PrintConfig,
    /// Built-in command groups
    #[serde(default)]
    pub builtins: BuiltinsConfig,
    /// Command groups registered at startup
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

/// Debug print configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintConfig {
    /// Value of `EnableDebug.PrintStringToConsole` (default: "0")
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Screen duration for prints with a negative duration (default: 2.0)
    #[serde(default = "default_duration")]
    pub default_duration: f32,
    /// Prefix log lines with the name of the printing object (default: false)
    #[serde(default)]
    pub log_source: bool,
    /// Network role used for output prefixes (default: standalone)
    #[serde(default)]
    pub net_mode: NetMode,
    /// Client index shown in the `ClientN:` prefix (default: 0)
    #[serde(default)]
    pub client_id: u32,
}

/// Built-in command group configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuiltinsConfig {
    /// Whether to register the built-in groups (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// A command group declared in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Registry name, must be unique and non-empty
    pub name: String,
    /// Commands run when the group is enabled
    #[serde(default)]
    pub enable: Vec<String>,
    /// Commands run when the group is disabled
    #[serde(default)]
    pub disable: Vec<String>,
    /// Optional description
    #[serde(default)]
    pub help: String,
}

fn default_filter() -> String {
    "0".to_string()
}
fn default_duration() -> f32 {
    DEFAULT_SCREEN_DURATION
}
fn default_true() -> bool {
    true
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            default_duration: default_duration(),
            log_source: false,
            net_mode: NetMode::default(),
            client_id: 0,
        }
    }
}

impl Default for BuiltinsConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

impl Config {
    /// Check group definitions before they reach the registry
    ///
    /// The registry treats an empty name as a caller bug, so config input is
    /// rejected here instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (index, group) in self.groups.iter().enumerate() {
            if group.name.trim().is_empty() {
                return Err(ConfigError::EmptyGroupName(index));
            }
            if !seen.insert(group.name.as_str()) {
                return Err(ConfigError::DuplicateGroup(group.name.clone()));
            }
        }
        Ok(())
    }

    /// Register every configured group
    ///
    /// Groups whose name is already taken keep their existing definition.
    /// Returns the number of groups that were newly created.
    pub fn register_groups(&self, registry: &CommandGroupRegistry) -> Result<usize, ConfigError> {
        self.validate()?;

        let mut created = 0;
        for group in &self.groups {
            let (handle, is_new) =
                registry.register_new(&group.name, &group.enable, &group.disable);
            if !is_new {
                continue;
            }
            created += 1;
            if let Some(registered) = handle.upgrade() {
                registered.set_help(group.help.clone());
            }
        }
        Ok(created)
    }

    /// Build a printer from the `[print]` section
    pub fn printer(&self) -> DebugPrinter {
        let mut printer = DebugPrinter::new(PrintFilter::new(&self.print.filter));
        printer.set_default_duration(self.print.default_duration);
        printer.set_log_source(self.print.log_source);
        printer.set_net_mode(self.print.net_mode, self.print.client_id);
        printer
    }
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\nethercore\Debugkit\config`
/// On macOS: `~/Library/Application Support/io.nethercore.Debugkit`
/// On Linux: `~/.config/debugkit`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io", "nethercore", "Debugkit")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Loads the configuration from the platform config directory.
///
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load() -> Config {
    let Some(path) = config_dir().map(|dir| dir.join(CONFIG_FILE_NAME)) else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match load_from_path(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("ignoring {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Loads and validates the configuration at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or
/// declares invalid command groups.
pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Saves the configuration to `path`.
///
/// Creates the parent directory if it doesn't exist.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file
/// cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<(), ConfigError> {
    let io_err = |source: std::io::Error| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(io_err)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(io_err)
}
