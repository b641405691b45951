//! Application-level settings shared by every host front-end

pub mod config;

pub use config::{Config, ConfigError, GroupConfig};
