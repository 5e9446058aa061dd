//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/tripview/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/tripview/` (~/.config/tripview/)
//! - State/Logs: `$XDG_STATE_HOME/tripview/` (~/.local/state/tripview/)

use crate::error::{Error, Result};
use crate::render::RenderOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Hotel card image used when the payload carries none.
pub const DEFAULT_HOTEL_IMAGE_URL: &str = "https://images.unsplash.com/photo-1657002865844-c4127d542c41?q=80&w=2070&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D";

/// Activity image used when a slot has no `placeImgUrl`.
pub const DEFAULT_ACTIVITY_IMAGE_URL: &str = "https://images.unsplash.com/photo-1740382281576-95db2cf42d72?w=600&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHx0b3BpYy1mZWVkfDh8NnNNVmpUTFNrZVF8fGVufDB8fHx8fA%3D%3D";

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Rendering configuration
    #[serde(default)]
    pub render: RenderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Placeholder assets for the presentation mapper
#[derive(Debug, Deserialize, Clone)]
pub struct RenderConfig {
    /// Image shown on every hotel card
    #[serde(default = "default_hotel_image_url")]
    pub hotel_image_url: String,

    /// Image shown for a time slot without its own `placeImgUrl`
    #[serde(default = "default_activity_image_url")]
    pub activity_image_url: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            hotel_image_url: default_hotel_image_url(),
            activity_image_url: default_activity_image_url(),
        }
    }
}

impl RenderConfig {
    /// Options handed to [`crate::render::render`]
    pub fn options(&self) -> RenderOptions {
        RenderOptions {
            hotel_image_url: self.hotel_image_url.clone(),
            activity_image_url: self.activity_image_url.clone(),
        }
    }

    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.hotel_image_url.trim().is_empty() {
            return Err(Error::Config(
                "render.hotel_image_url must not be empty".to_string(),
            ));
        }
        if self.activity_image_url.trim().is_empty() {
            return Err(Error::Config(
                "render.activity_image_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_hotel_image_url() -> String {
    DEFAULT_HOTEL_IMAGE_URL.to_string()
}

fn default_activity_image_url() -> String {
    DEFAULT_ACTIVITY_IMAGE_URL.to_string()
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.render.validate()?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/tripview/config.toml` (~/.config/tripview/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("tripview").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/tripview/` (~/.local/state/tripview/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("tripview")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/tripview/tripview.log` (~/.local/state/tripview/tripview.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("tripview.log")
    }
}
