//! Touch input handling.
//!
//! Provides touch samples, raw touch events, and primary-touch tracking.

use super::gestures::{Gesture, GestureClassifier};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single pointer position sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchSample {
    /// Horizontal screen position
    pub x: f32,
    /// Vertical screen position (grows downward)
    pub y: f32,
    /// Sample time in milliseconds
    pub timestamp_ms: u64,
}

impl TouchSample {
    /// Create a new sample.
    pub fn new(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self { x, y, timestamp_ms }
    }

    /// Get the sample position as a vector.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get the displacement from `origin` to this sample.
    pub fn delta_from(&self, origin: &TouchSample) -> Vec2 {
        self.position() - origin.position()
    }
}

/// Touch event types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum TouchEvent {
    /// Touch started
    Start { id: u64, sample: TouchSample },
    /// Touch moved
    Move { id: u64, sample: TouchSample },
    /// Touch ended
    End { id: u64, sample: TouchSample },
    /// Touch cancelled
    Cancel { id: u64 },
}

impl TouchEvent {
    /// Get the touch ID.
    pub fn id(&self) -> u64 {
        match self {
            TouchEvent::Start { id, .. } => *id,
            TouchEvent::Move { id, .. } => *id,
            TouchEvent::End { id, .. } => *id,
            TouchEvent::Cancel { id } => *id,
        }
    }

    /// Get the sample, if available.
    pub fn sample(&self) -> Option<TouchSample> {
        match self {
            TouchEvent::Start { sample, .. } => Some(*sample),
            TouchEvent::Move { sample, .. } => Some(*sample),
            TouchEvent::End { sample, .. } => Some(*sample),
            TouchEvent::Cancel { .. } => None,
        }
    }
}

/// Single-touch input handler.
///
/// Only the first touch to start is followed; events for any other touch id
/// are dropped until the primary touch ends or is cancelled.
#[derive(Debug, Default)]
pub struct TouchHandler {
    /// Id of the touch currently being classified
    primary: Option<u64>,
    classifier: GestureClassifier,
}

impl TouchHandler {
    /// Create a handler with the given swipe threshold.
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            primary: None,
            classifier: GestureClassifier::new(swipe_threshold),
        }
    }

    /// Handle a touch event.
    ///
    /// Returns the classified gesture when the primary touch ends.
    pub fn handle_event(&mut self, event: TouchEvent) -> Option<Gesture> {
        match event {
            TouchEvent::Start { id, sample } => {
                if let Some(primary) = self.primary {
                    tracing::trace!("Ignoring touch {} while touch {} is active", id, primary);
                    return None;
                }
                if self.classifier.begin(sample) {
                    self.primary = Some(id);
                }
                None
            }
            TouchEvent::Move { id, sample } => {
                if self.primary == Some(id) {
                    self.classifier.update(sample);
                }
                None
            }
            TouchEvent::End { id, sample } => {
                if self.primary != Some(id) {
                    return None;
                }
                self.primary = None;
                Some(self.classifier.end(sample))
            }
            TouchEvent::Cancel { id } => {
                if self.primary == Some(id) {
                    self.primary = None;
                    self.classifier.cancel();
                }
                None
            }
        }
    }

    /// Get the id of the tracked touch.
    pub fn primary_touch(&self) -> Option<u64> {
        self.primary
    }

    /// Check if a touch is being tracked.
    pub fn is_touching(&self) -> bool {
        self.primary.is_some()
    }

    /// Access the underlying classifier.
    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }
}
