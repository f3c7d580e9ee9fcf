//! Host collaborator contracts.
//!
//! The HUD never owns game state. Everything it changes goes through these
//! traits, bundled per call in a [`HostContext`].

use super::dispatcher::OutcomeEvent;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A selectable token on the host's board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: Uuid,
    pub name: String,
    /// Horizontal board position
    pub x: f64,
    /// Vertical board position
    pub y: f64,
}

impl Entity {
    /// Create an entity at the given position.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            x,
            y,
        }
    }
}

/// Access to the host's token selection.
pub trait SelectionProvider {
    /// Currently selected entity, if any.
    fn selected_entity(&self) -> Option<Entity>;

    /// Size of one grid cell in board units.
    fn grid_unit_size(&self) -> f64;

    /// Ask the host to move `entity` to an absolute position.
    fn request_move(&mut self, entity: &Entity, x: f64, y: f64);
}

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// Access to the host's camera and interface.
pub trait HostUi {
    /// Current camera zoom factor.
    fn camera_scale(&self) -> f64;

    /// Set the camera zoom factor.
    fn set_camera_scale(&mut self, scale: f64, animated: bool);

    /// Show or hide the host sidebar.
    fn toggle_sidebar(&mut self);

    /// Show a notice to the user.
    fn notify(&mut self, level: NoticeLevel, message: &str);
}

/// Host collaborators for a single dispatch.
pub struct HostContext<'a> {
    pub selection: &'a mut dyn SelectionProvider,
    pub ui: &'a mut dyn HostUi,
}

impl<'a> HostContext<'a> {
    pub fn new(selection: &'a mut dyn SelectionProvider, ui: &'a mut dyn HostUi) -> Self {
        Self { selection, ui }
    }
}

/// Telemetry errors
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Telemetry bridge unavailable: {0}")]
    Unavailable(String),

    #[error("Authentication rejected: {0}")]
    Rejected(String),
}

/// Optional sink for outcome events.
pub trait TelemetryBridge: Send {
    /// Authenticate the HUD with the bridge. Called once when attached.
    fn authenticate(&mut self, module: &str) -> Result<bool, TelemetryError>;

    /// Record one dispatch outcome.
    fn record(&self, event: &OutcomeEvent);
}

/// Bridge that writes outcome events to the tracing log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingBridge;

impl TelemetryBridge for TracingBridge {
    fn authenticate(&mut self, module: &str) -> Result<bool, TelemetryError> {
        tracing::debug!("Tracing bridge attached for {}", module);
        Ok(true)
    }

    fn record(&self, event: &OutcomeEvent) {
        tracing::info!(
            kind = %event.command_kind,
            status = ?event.status,
            payload = %serde_json::Value::Object(event.payload.clone()),
            "HUD event"
        );
    }
}
