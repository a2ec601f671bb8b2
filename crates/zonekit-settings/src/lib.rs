//! ZoneKit Settings Crate
//!
//! Handles application configuration: map presets, editor defaults and the
//! recent files list, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, EditorSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
