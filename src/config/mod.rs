// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[viewer]` - Supported zoom levels and the starting zoom
//! - `[notifications]` - Toast limits
//! - `[engine]` - Rendering engine worker location
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use folio::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::ZoomLevels;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Viewer zoom settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Zoom levels offered in the zoom menu, in percent.
    #[serde(default = "default_zoom_levels")]
    pub zoom_levels: Vec<u16>,

    /// Zoom level used when a document is opened; must be one of `zoom_levels`.
    #[serde(default = "default_zoom_percent")]
    pub default_zoom: u16,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_levels: default_zoom_levels(),
            default_zoom: DEFAULT_ZOOM_PERCENT,
        }
    }
}

impl ViewerConfig {
    /// Builds the zoom set, falling back to the built-in levels when the
    /// configured ones are empty or do not contain `default_zoom`.
    #[must_use]
    pub fn zoom_levels(&self) -> ZoomLevels {
        ZoomLevels::new(&self.zoom_levels, self.default_zoom).unwrap_or_else(|| {
            tracing::warn!(
                levels = ?self.zoom_levels,
                default = self.default_zoom,
                "invalid zoom configuration, using built-in levels"
            );
            ZoomLevels::default()
        })
    }
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Maximum number of toasts shown at once.
    #[serde(
        default = "default_max_visible",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_visible: Option<usize>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            max_visible: default_max_visible(),
        }
    }
}

impl NotificationsConfig {
    /// Returns the visible toast limit, clamped to a sane range.
    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible
            .unwrap_or(DEFAULT_MAX_VISIBLE_NOTIFICATIONS)
            .clamp(MIN_MAX_VISIBLE_NOTIFICATIONS, MAX_MAX_VISIBLE_NOTIFICATIONS)
    }
}

/// Rendering engine settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Worker script URL; `{version}` is replaced with the engine version.
    #[serde(default = "default_worker_url_template")]
    pub worker_url_template: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            worker_url_template: default_worker_url_template(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Viewer configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub engine: EngineConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_zoom_levels() -> Vec<u16> {
    DEFAULT_ZOOM_LEVELS_PERCENT.to_vec()
}

fn default_zoom_percent() -> u16 {
    DEFAULT_ZOOM_PERCENT
}

fn default_max_visible() -> Option<usize> {
    Some(DEFAULT_MAX_VISIBLE_NOTIFICATIONS)
}

fn default_worker_url_template() -> String {
    DEFAULT_WORKER_URL_TEMPLATE.to_string()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
