//! Action Dispatch
//!
//! Executes HUD commands against the host. Every call runs the command at
//! most once and returns an [`OutcomeEvent`]; failed preconditions are
//! reported in the event status, never as an error.

use super::commands::{Command, PanelTarget};
use super::hooks::{HookBus, PRIMARY_ACTION_HOOK};
use super::host::{Entity, HostContext, NoticeLevel, TelemetryBridge};
use super::panels::{PanelState, PanelStep};
use super::{HudError, MODULE_ID};
use crate::audio::FeedbackEmitter;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Camera scale when zoomed out.
pub const ZOOM_DEFAULT: f64 = 1.0;
/// Camera scale when zoomed in.
pub const ZOOM_CLOSE: f64 = 1.5;

/// Event payload object.
pub type Payload = serde_json::Map<String, Value>;

/// How a dispatch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchStatus {
    Success,
    /// `NoOp` commands
    Ignored,
    NoSelection,
    InvalidPanel,
}

impl From<&HudError> for DispatchStatus {
    fn from(err: &HudError) -> Self {
        match err {
            HudError::NoSelection => DispatchStatus::NoSelection,
            HudError::InvalidPanel(_)
            | HudError::UnknownPanel(_)
            | HudError::EmptyPanelOrder
            | HudError::DuplicatePanel(_)
            | HudError::InvalidConfig(_) => DispatchStatus::InvalidPanel,
        }
    }
}

/// Record of a single dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeEvent {
    pub command_kind: String,
    pub status: DispatchStatus,
    pub payload: Payload,
    /// Unix time in milliseconds
    pub timestamp_ms: i64,
}

impl OutcomeEvent {
    pub fn new(command_kind: impl Into<String>, status: DispatchStatus, payload: Payload) -> Self {
        Self {
            command_kind: command_kind.into(),
            status,
            payload,
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == DispatchStatus::Success
    }
}

fn payload(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        _ => Payload::new(),
    }
}

/// Command executor owning the panel state.
pub struct ActionDispatcher {
    panels: PanelState,
    feedback: FeedbackEmitter,
    hooks: HookBus,
    /// Present only when authenticated
    telemetry: Option<Box<dyn TelemetryBridge>>,
}

impl Default for ActionDispatcher {
    fn default() -> Self {
        Self::new(PanelState::default(), FeedbackEmitter::disabled())
    }
}

impl ActionDispatcher {
    /// Create a dispatcher.
    pub fn new(panels: PanelState, feedback: FeedbackEmitter) -> Self {
        Self {
            panels,
            feedback,
            hooks: HookBus::default(),
            telemetry: None,
        }
    }

    /// Attach a telemetry bridge.
    ///
    /// The bridge is kept only if it authenticates. Returns whether it did.
    pub fn attach_telemetry(&mut self, mut bridge: Box<dyn TelemetryBridge>) -> bool {
        match bridge.authenticate(MODULE_ID) {
            Ok(true) => {
                self.telemetry = Some(bridge);
                true
            }
            Ok(false) => {
                tracing::info!("Telemetry bridge declined authentication");
                self.telemetry = None;
                false
            }
            Err(e) => {
                tracing::warn!("Telemetry bridge unavailable: {}", e);
                self.telemetry = None;
                false
            }
        }
    }

    pub fn has_telemetry(&self) -> bool {
        self.telemetry.is_some()
    }

    pub fn panels(&self) -> &PanelState {
        &self.panels
    }

    pub fn hooks(&self) -> &HookBus {
        &self.hooks
    }

    pub fn feedback(&self) -> &FeedbackEmitter {
        &self.feedback
    }

    /// Execute a command and report the outcome.
    pub fn dispatch(&mut self, ctx: &mut HostContext<'_>, command: Command) -> OutcomeEvent {
        let (status, payload) = match self.execute(ctx, command) {
            Ok(Some(payload)) => (DispatchStatus::Success, payload),
            Ok(None) => (DispatchStatus::Ignored, Payload::new()),
            Err(e) => {
                let status = DispatchStatus::from(&e);
                (status, payload(json!({ "reason": e.to_string() })))
            }
        };

        if status == DispatchStatus::Success {
            if let Some(category) = command.feedback_category() {
                self.feedback.emit(category);
            }
        }

        let event = OutcomeEvent::new(command.kind(), status, payload);
        tracing::debug!("Dispatched {} -> {:?}", event.command_kind, event.status);

        if let Some(bridge) = &self.telemetry {
            bridge.record(&event);
        }

        event
    }

    /// Run the command's side effects. `Ok(None)` means nothing was done.
    fn execute(
        &mut self,
        ctx: &mut HostContext<'_>,
        command: Command,
    ) -> Result<Option<Payload>, HudError> {
        let result = match command {
            Command::MoveBy { dx, dy } => {
                let entity = Self::require_selection(ctx)?;
                let grid = ctx.selection.grid_unit_size();
                let x = entity.x + f64::from(dx) * grid;
                let y = entity.y + f64::from(dy) * grid;
                ctx.selection.request_move(&entity, x, y);

                json!({ "entity": entity.id, "dx": dx, "dy": dy, "x": x, "y": y })
            }
            Command::PrimaryAction => {
                let entity = Self::require_selection(ctx)?;
                let notified = self
                    .hooks
                    .emit(PRIMARY_ACTION_HOOK, json!({ "entity": &entity }));
                ctx.ui.notify(NoticeLevel::Info, "Primary action executed");

                json!({ "entity": entity.id, "subscribers": notified })
            }
            Command::OpenSpellMenu => {
                ctx.ui
                    .notify(NoticeLevel::Info, "Cast Spell interface opening...");
                json!({})
            }
            Command::OpenAbilityMenu => {
                ctx.ui.notify(NoticeLevel::Info, "Ability panel opening...");
                json!({})
            }
            Command::OpenInventory => {
                ctx.ui.notify(NoticeLevel::Info, "Inventory panel opening...");
                json!({})
            }
            Command::OpenSkillCheck => {
                ctx.ui
                    .notify(NoticeLevel::Info, "Skill check dialog opening...");
                json!({})
            }
            Command::PanCamera => {
                ctx.ui.notify(NoticeLevel::Info, "Camera pan mode enabled");
                json!({})
            }
            Command::ToggleZoom => {
                let current = ctx.ui.camera_scale();
                let target = if current == ZOOM_DEFAULT {
                    ZOOM_CLOSE
                } else {
                    ZOOM_DEFAULT
                };
                ctx.ui.set_camera_scale(target, true);

                json!({ "from": current, "to": target })
            }
            Command::ToggleMenu => {
                ctx.ui.toggle_sidebar();
                json!({})
            }
            Command::SwitchPanel(target) => self.switch_panel(target)?,
            Command::NoOp => return Ok(None),
        };

        Ok(Some(payload(result)))
    }

    fn switch_panel(&mut self, target: PanelTarget) -> Result<Value, HudError> {
        let previous = self.panels.current();
        match target {
            PanelTarget::Relative(step) => {
                let panel = self.panels.advance(step);
                Ok(json!({
                    "panel": panel.as_str(),
                    "previous": previous.as_str(),
                    "step": step.as_str(),
                    "direction": swipe_label(step),
                }))
            }
            PanelTarget::Named(name) => match self.panels.select(name) {
                Ok(panel) => Ok(json!({ "panel": panel.as_str(), "previous": previous.as_str() })),
                Err(e) => {
                    tracing::warn!("Panel switch rejected: {}", e);
                    Err(e)
                }
            },
        }
    }

    fn require_selection(ctx: &mut HostContext<'_>) -> Result<Entity, HudError> {
        match ctx.selection.selected_entity() {
            Some(entity) => Ok(entity),
            None => {
                tracing::info!("Command needs a selected token");
                ctx.ui.notify(NoticeLevel::Warning, "No token selected");
                Err(HudError::NoSelection)
            }
        }
    }
}

/// Swipe direction that produces a relative step.
fn swipe_label(step: PanelStep) -> &'static str {
    match step {
        PanelStep::Next => "left",
        PanelStep::Previous => "right",
    }
}
