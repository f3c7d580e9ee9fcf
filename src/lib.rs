//! TouchHud - Touch Control Core for Tabletop Game Overlays
//!
//! Classifies touch interactions into taps and swipes, maps gestures and HUD
//! button presses to game commands, and dispatches those commands to a host
//! application with audio and haptic feedback.

pub mod audio;
pub mod hud;
pub mod input;
pub mod replay;
pub mod storage;

// Re-export commonly used types
pub use hud::{ActionDispatcher, Command, CommandMap, OutcomeEvent, PanelState, TouchHud};
pub use input::{GestureClassifier, TouchHandler};
pub use storage::config::HudConfig;
