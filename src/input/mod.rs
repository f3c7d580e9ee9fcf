//! Input handling module for touch and gesture support.
//!
//! Turns raw touch events into classified gestures.

pub mod gestures;
pub mod touch;

// Re-export types
pub use gestures::{Gesture, GestureClassifier, SwipeDirection, DEFAULT_SWIPE_THRESHOLD};
pub use touch::{TouchEvent, TouchHandler, TouchSample};
