//! Configuration and settings management for ZoneKit
//!
//! Provides configuration file handling, settings management, and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Map presets (world extents, background image)
//! - Editor defaults (undo depth, new zone parameters, radius steps)
//! - Recent files

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use zonekit_core::constants::{
    CHERNARUS_WORLD_SIZE, DEFAULT_UNDO_CAPACITY, DEFAULT_ZONE_RADIUS, LIVONIA_WORLD_SIZE,
};
use zonekit_core::MapInfo;

use crate::error::{ConfigError, SettingsError, SettingsResult};

const APP_DIR: &str = "zonekit";
const CONFIG_FILE: &str = "config.toml";

/// Editor defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Maximum number of undo snapshots kept
    pub undo_capacity: usize,
    /// Radius of zones created from the canvas
    pub default_zone_radius: f64,
    /// dmin of zones created from the canvas
    pub default_dmin: i32,
    /// dmax of zones created from the canvas
    pub default_dmax: i32,
    /// Radius stepper increment
    pub radius_step: f64,
    /// Radius stepper increment with the large-step modifier
    pub radius_step_large: f64,
    /// Index into `Config::maps` selected at startup
    pub default_map: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            undo_capacity: DEFAULT_UNDO_CAPACITY,
            default_zone_radius: DEFAULT_ZONE_RADIUS,
            default_dmin: 1,
            default_dmax: 3,
            radius_step: 5.0,
            radius_step_large: 20.0,
            default_map: 0,
        }
    }
}

fn default_maps() -> Vec<MapInfo> {
    vec![
        MapInfo::new("Chernarus", CHERNARUS_WORLD_SIZE, CHERNARUS_WORLD_SIZE)
            .with_image("Maps/chernarusplus_Map.png"),
        MapInfo::new("Livonia", LIVONIA_WORLD_SIZE, LIVONIA_WORLD_SIZE),
    ]
}

fn default_recent_files_count() -> usize {
    10
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// How many recent files to remember
    #[serde(default = "default_recent_files_count")]
    pub recent_files_count: usize,
    /// Recent files list, most recent first
    #[serde(default)]
    pub recent_files: Vec<PathBuf>,
    /// Editor defaults
    #[serde(default)]
    pub editor: EditorSettings,
    /// Map presets
    #[serde(default = "default_maps")]
    pub maps: Vec<MapInfo>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recent_files_count: default_recent_files_count(),
            recent_files: Vec::new(),
            editor: EditorSettings::default(),
            maps: default_maps(),
        }
    }
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding the configuration file
    pub fn config_dir() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| SettingsError::ConfigDirectory("no config or home directory".to_string()))?;
        Ok(base.join(APP_DIR))
    }

    /// Default configuration file path
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load the configuration from the platform directory, falling back to
    /// defaults when no file exists yet
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_file(&path)
    }

    /// Save the configuration to the platform directory, creating it if needed
    pub fn save_default(&self) -> SettingsResult<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(CONFIG_FILE);
        self.save_to_file(&path)?;
        Ok(path)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        info!(path = %path.display(), maps = config.maps.len(), "loaded config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.maps.is_empty() {
            return Err(ConfigError::NoMaps);
        }

        if let Some(map) = self.maps.iter().find(|m| !m.has_valid_extents()) {
            return Err(ConfigError::ValueOutOfRange {
                key: format!("maps.{}", map.name),
                value: format!("{} x {}", map.world_size_x, map.world_size_z),
            });
        }

        if self.editor.default_map >= self.maps.len() {
            return Err(ConfigError::ValueOutOfRange {
                key: "editor.default_map".to_string(),
                value: self.editor.default_map.to_string(),
            });
        }

        if self.editor.undo_capacity == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "editor.undo_capacity".to_string(),
                value: "0".to_string(),
            });
        }

        let positive = [
            ("editor.default_zone_radius", self.editor.default_zone_radius),
            ("editor.radius_step", self.editor.radius_step),
            ("editor.radius_step_large", self.editor.radius_step_large),
        ];
        for (key, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }

        Ok(())
    }

    /// The map selected at startup
    pub fn default_map(&self) -> Option<&MapInfo> {
        self.maps.get(self.editor.default_map)
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        // Remove if already in list
        self.recent_files.retain(|f| f != &path);

        // Add to front
        self.recent_files.insert(0, path);

        // Trim to max size
        self.recent_files.truncate(self.recent_files_count);
    }
}
