//! Gesture recognition for touch and mouse input.
//!
//! Classifies a single touch interaction as a tap or a directional swipe.
//! Classification is purely positional: no duration window separates taps
//! from swipes.

use super::touch::TouchSample;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Default minimum swipe distance along the dominant axis.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Result of one complete touch interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    /// Interaction ended below the swipe threshold
    Tap,
    /// Swipe in a direction
    Swipe(SwipeDirection),
    /// No interaction was active
    None,
}

/// Direction of a swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SwipeDirection {
    /// Detect swipe direction from a movement vector.
    ///
    /// The axis with the larger absolute displacement wins, horizontal on a
    /// tie. That displacement must be strictly greater than `threshold`.
    pub fn from_delta(delta: Vec2, threshold: f32) -> Option<Self> {
        let horizontal = delta.x.abs() >= delta.y.abs();
        let magnitude = if horizontal {
            delta.x.abs()
        } else {
            delta.y.abs()
        };

        if magnitude <= threshold {
            return None;
        }

        if horizontal {
            if delta.x > 0.0 {
                Some(SwipeDirection::Right)
            } else {
                Some(SwipeDirection::Left)
            }
        } else if delta.y > 0.0 {
            Some(SwipeDirection::Down)
        } else {
            Some(SwipeDirection::Up)
        }
    }

    /// Get the lowercase label used in event payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeDirection::Up => "up",
            SwipeDirection::Down => "down",
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        }
    }
}

impl std::fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracking state for the active interaction.
#[derive(Debug, Clone, Copy)]
struct GestureState {
    origin: TouchSample,
    last_sample: TouchSample,
    /// First direction that crossed the threshold
    provisional: Option<SwipeDirection>,
}

/// Single-touch gesture classifier.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    /// Minimum swipe distance
    threshold: f32,
    state: Option<GestureState>,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl GestureClassifier {
    /// Create a classifier with the given swipe threshold.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            state: None,
        }
    }

    /// Start tracking an interaction.
    ///
    /// Returns `false` and changes nothing if an interaction is already active.
    pub fn begin(&mut self, sample: TouchSample) -> bool {
        if self.state.is_some() {
            return false;
        }

        self.state = Some(GestureState {
            origin: sample,
            last_sample: sample,
            provisional: None,
        });
        true
    }

    /// Record a move sample for the active interaction.
    pub fn update(&mut self, sample: TouchSample) {
        let threshold = self.threshold;
        let Some(state) = self.state.as_mut() else {
            return;
        };

        state.last_sample = sample;
        if state.provisional.is_none() {
            state.provisional =
                SwipeDirection::from_delta(sample.delta_from(&state.origin), threshold);
        }
    }

    /// Finish the active interaction and classify it.
    pub fn end(&mut self, sample: TouchSample) -> Gesture {
        if self.state.is_none() {
            return Gesture::None;
        }

        self.update(sample);
        match self.state.take().and_then(|s| s.provisional) {
            Some(direction) => Gesture::Swipe(direction),
            None => Gesture::Tap,
        }
    }

    /// Drop the active interaction without classifying it.
    pub fn cancel(&mut self) {
        self.state = None;
    }

    /// Check if an interaction is being tracked.
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Direction detected so far in the active interaction.
    pub fn provisional_direction(&self) -> Option<SwipeDirection> {
        self.state.and_then(|s| s.provisional)
    }

    /// Most recent sample of the active interaction.
    pub fn last_sample(&self) -> Option<TouchSample> {
        self.state.map(|s| s.last_sample)
    }

    /// Get the swipe threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Set the swipe threshold.
    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold;
    }
}
