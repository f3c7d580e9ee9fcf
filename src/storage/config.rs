//! HUD configuration.
//!
//! Loaded from TOML in the platform config directory. A missing file yields
//! defaults; every loaded file is validated.

use crate::hud::PanelName;
use crate::input::DEFAULT_SWIPE_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// HUD layout style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HudLayout {
    Compact,
    #[default]
    Standard,
    Expanded,
}

impl std::fmt::Display for HudLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HudLayout::Compact => write!(f, "Compact"),
            HudLayout::Standard => write!(f, "Standard"),
            HudLayout::Expanded => write!(f, "Expanded"),
        }
    }
}

/// Touch HUD settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Whether the HUD reacts to input at all
    pub enabled: bool,
    /// Play tones for completed actions
    pub audio_feedback: bool,
    /// Pulse the vibration motor for completed actions
    pub haptic_feedback: bool,
    /// Minimum swipe distance in pixels
    pub swipe_threshold_px: f32,
    /// Panel cycle order
    pub panel_order: Vec<PanelName>,
    /// Layout style
    pub layout: HudLayout,
    /// Touch button size in pixels (40-80, steps of 5)
    pub button_size: u8,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            audio_feedback: true,
            haptic_feedback: true,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD,
            panel_order: PanelName::ALL.to_vec(),
            layout: HudLayout::Standard,
            button_size: 60,
        }
    }
}

impl HudConfig {
    /// Validate button size (40-80 pixels in steps of 5).
    pub fn validate_button_size(size: u8) -> bool {
        (40..=80).contains(&size) && size % 5 == 0
    }

    /// Validate swipe threshold (finite and positive).
    pub fn validate_swipe_threshold(threshold: f32) -> bool {
        threshold.is_finite() && threshold > 0.0
    }

    /// Check every setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !Self::validate_swipe_threshold(self.swipe_threshold_px) {
            return Err(ConfigError::InvalidValue(format!(
                "swipe_threshold_px must be a positive number, got {}",
                self.swipe_threshold_px
            )));
        }

        if !Self::validate_button_size(self.button_size) {
            return Err(ConfigError::InvalidValue(format!(
                "button_size must be 40-80 in steps of 5, got {}",
                self.button_size
            )));
        }

        if self.panel_order.is_empty() {
            return Err(ConfigError::InvalidValue(
                "panel_order must list at least one panel".to_string(),
            ));
        }

        for (i, panel) in self.panel_order.iter().enumerate() {
            if self.panel_order[..i].contains(panel) {
                return Err(ConfigError::InvalidValue(format!(
                    "panel_order lists {} twice",
                    panel
                )));
            }
        }

        Ok(())
    }
}

/// Get the configuration directory.
pub fn get_config_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "touchhud", "TouchHud")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Load configuration from the default location.
pub fn load_config() -> Result<HudConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load configuration from a file, using defaults when it does not exist.
pub fn load_config_from(path: &Path) -> Result<HudConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {:?}, using defaults", path);
        return Ok(HudConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: HudConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.validate()?;

    Ok(config)
}

/// Save configuration to the default location.
pub fn save_config(config: &HudConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save configuration to a file.
pub fn save_config_to(config: &HudConfig, path: &Path) -> Result<(), ConfigError> {
    config.validate()?;

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}
