//! Broadcast hooks for other modules to react to HUD actions.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Hook fired after a successful primary action.
pub const PRIMARY_ACTION_HOOK: &str = "touchhud.primaryAction";

/// A named hook notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookEvent {
    pub name: String,
    pub payload: serde_json::Value,
}

/// Fire-and-forget hook channel.
#[derive(Debug)]
pub struct HookBus {
    tx: broadcast::Sender<HookEvent>,
}

impl Default for HookBus {
    fn default() -> Self {
        Self::new(64)
    }
}

impl HookBus {
    /// Create a bus that buffers up to `capacity` events per subscriber.
    ///
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Notify all subscribers.
    ///
    /// Returns how many subscribers received the event.
    pub fn emit(&self, name: &str, payload: serde_json::Value) -> usize {
        let event = HookEvent {
            name: name.to_string(),
            payload,
        };
        self.tx.send(event).unwrap_or(0)
    }

    /// Subscribe to hook events.
    pub fn subscribe(&self) -> broadcast::Receiver<HookEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
