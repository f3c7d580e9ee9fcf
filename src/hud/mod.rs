//! Touch HUD Core
//!
//! Maps gestures and button presses to commands and dispatches them to the
//! host game.

pub mod commands;
pub mod controller;
pub mod dispatcher;
pub mod hooks;
pub mod host;
pub mod panels;

use crate::storage::config::ConfigError;
use thiserror::Error;

// Re-export main types
pub use commands::{ButtonId, Command, CommandMap, InputId, PanelTarget};
pub use controller::TouchHud;
pub use dispatcher::{ActionDispatcher, DispatchStatus, OutcomeEvent, Payload};
pub use hooks::{HookBus, HookEvent, PRIMARY_ACTION_HOOK};
pub use host::{
    Entity, HostContext, HostUi, NoticeLevel, SelectionProvider, TelemetryBridge,
    TelemetryError, TracingBridge,
};
pub use panels::{PanelName, PanelState, PanelStep};

/// Identifier the HUD presents to telemetry bridges.
pub const MODULE_ID: &str = "touchhud";

/// HUD-related errors
#[derive(Debug, Error)]
pub enum HudError {
    #[error("No token selected")]
    NoSelection,

    #[error("Panel not in the configured order: {0}")]
    InvalidPanel(PanelName),

    #[error("Unknown panel: {0}")]
    UnknownPanel(String),

    #[error("Panel order is empty")]
    EmptyPanelOrder,

    #[error("Panel listed twice: {0}")]
    DuplicatePanel(PanelName),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
