//! Storage module for HUD configuration.

pub mod config;

pub use config::{load_config, load_config_from, save_config, ConfigError, HudConfig, HudLayout};
