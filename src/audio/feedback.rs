//! Action Feedback
//!
//! Maps feedback categories to tones and haptic pulses and forwards them to
//! the platform. Emission is fire-and-forget: platform failures are logged
//! and swallowed.

use super::FeedbackError;
use serde::{Deserialize, Serialize};

/// Standard tone frequencies for feedback categories.
pub mod frequencies {
    /// Button press
    pub const CLICK: f32 = 800.0;
    /// Panel swipe
    pub const SWIPE: f32 = 600.0;
    /// Rejected action
    pub const ERROR: f32 = 400.0;
    /// Completed action
    pub const SUCCESS: f32 = 1000.0;
    /// Fallback for unknown categories
    pub const DEFAULT: f32 = SWIPE;
}

/// Length of every feedback tone in milliseconds.
pub const TONE_DURATION_MS: u64 = 100;

/// Length of the haptic pulse in milliseconds.
pub const HAPTIC_PULSE_MS: u64 = 10;

/// Feedback categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackCategory {
    Click,
    Swipe,
    Error,
    Success,
    /// Any category name not in the table
    Unknown,
}

impl FeedbackCategory {
    /// Parse a category name, falling back to `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "click" => Self::Click,
            "swipe" => Self::Swipe,
            "error" => Self::Error,
            "success" => Self::Success,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Swipe => "swipe",
            Self::Error => "error",
            Self::Success => "success",
            Self::Unknown => "unknown",
        }
    }

    /// Get the tone for this category.
    pub fn tone(&self) -> Tone {
        let frequency_hz = match self {
            Self::Click => frequencies::CLICK,
            Self::Swipe => frequencies::SWIPE,
            Self::Error => frequencies::ERROR,
            Self::Success => frequencies::SUCCESS,
            Self::Unknown => frequencies::DEFAULT,
        };
        Tone::new(frequency_hz, TONE_DURATION_MS)
    }
}

impl std::fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single tone with frequency and duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Frequency in Hz
    pub frequency_hz: f32,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl Tone {
    /// Create a new tone.
    pub fn new(frequency_hz: f32, duration_ms: u64) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }
}

/// Platform capable of producing feedback.
///
/// Both operations may be missing on a given device; implementations report
/// that with [`FeedbackError::Unavailable`].
pub trait FeedbackPlatform: Send {
    /// Start playing a tone. Must not wait for playback to finish.
    fn play_tone(&self, frequency_hz: f32, duration_ms: u64) -> Result<(), FeedbackError>;

    /// Pulse the vibration motor.
    fn vibrate(&self, duration_ms: u64) -> Result<(), FeedbackError>;
}

/// Stateless feedback emitter.
pub struct FeedbackEmitter {
    audio: bool,
    haptic: bool,
    platform: Option<Box<dyn FeedbackPlatform>>,
}

impl std::fmt::Debug for FeedbackEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackEmitter")
            .field("audio", &self.audio)
            .field("haptic", &self.haptic)
            .field("platform", &self.platform.is_some())
            .finish()
    }
}

impl Default for FeedbackEmitter {
    fn default() -> Self {
        Self::disabled()
    }
}

impl FeedbackEmitter {
    /// Create an emitter for the given platform.
    pub fn new(audio: bool, haptic: bool, platform: Option<Box<dyn FeedbackPlatform>>) -> Self {
        Self {
            audio,
            haptic,
            platform,
        }
    }

    /// Create an emitter that never produces feedback.
    pub fn disabled() -> Self {
        Self::new(false, false, None)
    }

    /// Check if any feedback can be produced.
    pub fn is_enabled(&self) -> bool {
        (self.audio || self.haptic) && self.platform.is_some()
    }

    /// Request feedback for a completed action.
    pub fn emit(&self, category: FeedbackCategory) {
        if !self.audio && !self.haptic {
            return;
        }
        let Some(platform) = self.platform.as_deref() else {
            tracing::trace!("No feedback platform, dropping {} feedback", category);
            return;
        };

        if self.audio {
            let tone = category.tone();
            if let Err(e) = platform.play_tone(tone.frequency_hz, tone.duration_ms) {
                tracing::trace!("Tone feedback degraded: {}", e);
            }
        }

        if self.haptic {
            if let Err(e) = platform.vibrate(HAPTIC_PULSE_MS) {
                tracing::trace!("Haptic feedback degraded: {}", e);
            }
        }
    }
}
