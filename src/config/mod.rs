//! Configuration file support for inkboard.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/inkboard/config.toml`. Settings
//! include drawing defaults, input binding overrides, and an optional
//! startup background image.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use types::{BackgroundConfig, DrawingConfig, InputConfig};

// Re-export for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use enums::ColorSpec;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_style = "yellow"
/// default_width = 10.0
/// default_mode = "normal"
///
/// [input]
/// touch = false
///
/// [background]
/// image = "~/Pictures/grid.png"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Stroke defaults (style, width, mode, jitter threshold)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Input binding preferences
    #[serde(default)]
    pub input: InputConfig,

    /// Startup background image
    #[serde(default)]
    pub background: BackgroundConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't cause
    /// rendering issues. Invalid values are clamped to the nearest valid
    /// value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_width`: 1.0 - 100.0
    /// - `jitter_threshold`: 0.0 - 64.0
    /// - `default_mode`: "normal" or "eraser"
    pub(crate) fn validate_and_clamp(&mut self) {
        // Line width: 1.0 - 100.0
        if !(1.0..=100.0).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {:.1}, clamping to 1.0-100.0 range",
                self.drawing.default_width
            );
            self.drawing.default_width = self.drawing.default_width.clamp(1.0, 100.0);
        }

        // Jitter threshold: 0.0 - 64.0
        if !(0.0..=64.0).contains(&self.drawing.jitter_threshold) {
            log::warn!(
                "Invalid jitter_threshold {:.1}, clamping to 0.0-64.0 range",
                self.drawing.jitter_threshold
            );
            self.drawing.jitter_threshold = self.drawing.jitter_threshold.clamp(0.0, 64.0);
        }

        // Validate stroke mode default
        if !matches!(
            self.drawing.default_mode.to_lowercase().as_str(),
            "normal" | "eraser"
        ) {
            log::warn!(
                "Invalid default_mode '{}', falling back to 'normal'",
                self.drawing.default_mode
            );
            self.drawing.default_mode = "normal".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file. If the file doesn't
    /// exist, returns a Config with default values. All loaded values are
    /// validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML format and writes it to
    /// `~/.config/inkboard/config.toml`. Creates the parent directory if it
    /// doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let contents =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, YELLOW};

    #[test]
    fn defaults_match_board_defaults() {
        let config = Config::default();
        assert_eq!(config.drawing.default_width, 10.0);
        assert_eq!(config.drawing.default_style.to_color(), YELLOW);
        assert_eq!(config.drawing.default_mode, "normal");
        assert_eq!(config.drawing.jitter_threshold, 3.0);
        assert_eq!(config.input.touch, None);
        assert_eq!(config.background.image, None);
    }

    #[test]
    fn parses_full_config() {
        let toml_str = r#"
            [drawing]
            default_style = [255, 0, 0]
            default_width = 4.0
            default_mode = "eraser"

            [input]
            touch = true

            [background]
            image = "/tmp/grid.png"
        "#;
        let mut config: Config = toml::from_str(toml_str).unwrap();
        config.validate_and_clamp();

        assert_eq!(config.drawing.default_style.to_color(), RED);
        assert_eq!(config.drawing.default_width, 4.0);
        assert_eq!(config.drawing.default_mode, "eraser");
        assert_eq!(config.input.touch, Some(true));
        assert_eq!(config.background.image.as_deref(), Some("/tmp/grid.png"));
    }

    #[test]
    fn clamps_out_of_range_values() {
        let toml_str = r#"
            [drawing]
            default_width = 500.0
            jitter_threshold = -2.0
            default_mode = "stamp"
        "#;
        let mut config: Config = toml::from_str(toml_str).unwrap();
        config.validate_and_clamp();

        assert_eq!(config.drawing.default_width, 100.0);
        assert_eq!(config.drawing.jitter_threshold, 0.0);
        assert_eq!(config.drawing.default_mode, "normal");
    }

    #[test]
    fn config_round_trips_through_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.drawing.default_width = 7.0;
        let contents = toml::to_string_pretty(&config).unwrap();
        std::fs::write(&path, &contents).unwrap();

        let loaded: Config =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.drawing.default_width, 7.0);
    }
}
