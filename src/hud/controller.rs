//! HUD controller.
//!
//! Owns the touch handler and dispatcher for one HUD instance. The caller
//! keeps the controller and passes host collaborators into every call.

use super::commands::{CommandMap, InputId};
use super::dispatcher::{ActionDispatcher, OutcomeEvent};
use super::host::{HostContext, TelemetryBridge};
use super::panels::{PanelName, PanelState};
use super::HudError;
use crate::audio::{FeedbackEmitter, FeedbackPlatform};
use crate::input::{Gesture, TouchEvent, TouchHandler};
use crate::storage::config::HudConfig;

/// One touch HUD instance.
pub struct TouchHud {
    enabled: bool,
    touch: TouchHandler,
    dispatcher: ActionDispatcher,
}

impl TouchHud {
    /// Build a HUD from configuration.
    pub fn new(
        config: &HudConfig,
        platform: Option<Box<dyn FeedbackPlatform>>,
    ) -> Result<Self, HudError> {
        let panels = PanelState::new(config.panel_order.clone())?;
        config.validate()?;

        let feedback =
            FeedbackEmitter::new(config.audio_feedback, config.haptic_feedback, platform);

        Ok(Self {
            enabled: config.enabled,
            touch: TouchHandler::new(config.swipe_threshold_px),
            dispatcher: ActionDispatcher::new(panels, feedback),
        })
    }

    /// Attach a telemetry bridge. See [`ActionDispatcher::attach_telemetry`].
    pub fn with_telemetry(mut self, bridge: Box<dyn TelemetryBridge>) -> Self {
        self.dispatcher.attach_telemetry(bridge);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn active_panel(&self) -> PanelName {
        self.dispatcher.panels().current()
    }

    pub fn dispatcher(&self) -> &ActionDispatcher {
        &self.dispatcher
    }

    pub fn touch(&self) -> &TouchHandler {
        &self.touch
    }

    /// Feed a raw touch event.
    ///
    /// Returns an outcome when the event completes a gesture.
    pub fn handle_touch(
        &mut self,
        ctx: &mut HostContext<'_>,
        event: TouchEvent,
    ) -> Option<OutcomeEvent> {
        if !self.enabled {
            return None;
        }

        let gesture = self.touch.handle_event(event)?;
        tracing::debug!("Classified gesture: {:?}", gesture);
        Some(self.dispatch_input(ctx, InputId::Gesture(gesture)))
    }

    /// Dispatch an already classified gesture.
    pub fn handle_gesture(
        &mut self,
        ctx: &mut HostContext<'_>,
        gesture: Gesture,
    ) -> Option<OutcomeEvent> {
        self.handle_input(ctx, InputId::Gesture(gesture))
    }

    /// Handle a button press by action name.
    pub fn handle_button(&mut self, ctx: &mut HostContext<'_>, action: &str) -> Option<OutcomeEvent> {
        if !self.enabled {
            return None;
        }

        let command = CommandMap::resolve_action(action);
        Some(self.dispatcher.dispatch(ctx, command))
    }

    /// Handle a panel tab press by panel name.
    pub fn handle_tab(&mut self, ctx: &mut HostContext<'_>, panel: &str) -> Option<OutcomeEvent> {
        if !self.enabled {
            return None;
        }

        let command = CommandMap::resolve_panel(panel);
        Some(self.dispatcher.dispatch(ctx, command))
    }

    /// Map and dispatch a typed input.
    pub fn handle_input(
        &mut self,
        ctx: &mut HostContext<'_>,
        input: InputId,
    ) -> Option<OutcomeEvent> {
        if !self.enabled {
            return None;
        }

        Some(self.dispatch_input(ctx, input))
    }

    fn dispatch_input(&mut self, ctx: &mut HostContext<'_>, input: InputId) -> OutcomeEvent {
        let command = CommandMap::map(&input);
        self.dispatcher.dispatch(ctx, command)
    }
}
