//! Audio & Haptic Feedback Module
//!
//! Provides short confirmation tones and haptic pulses for HUD actions.

pub mod feedback;
#[cfg(feature = "audio")]
pub mod tones;

use thiserror::Error;

// Re-export main types
pub use feedback::{FeedbackCategory, FeedbackEmitter, FeedbackPlatform, Tone};
#[cfg(feature = "audio")]
pub use tones::RodioFeedback;

/// Errors reported by feedback platforms
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Feedback unavailable: {0}")]
    Unavailable(String),
}

/// Feedback platform for the current build, if any.
pub fn default_platform() -> Option<Box<dyn FeedbackPlatform>> {
    #[cfg(feature = "audio")]
    {
        Some(Box::new(RodioFeedback::new()))
    }
    #[cfg(not(feature = "audio"))]
    {
        None
    }
}
