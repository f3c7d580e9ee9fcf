//! Recording feedback platform for integration tests.

use std::sync::{Arc, Mutex};
use touchhud::audio::{FeedbackCategory, FeedbackError, FeedbackPlatform};

/// Feedback platform that remembers every request.
#[derive(Debug, Default, Clone)]
pub struct RecordingFeedback {
    tones: Arc<Mutex<Vec<(f32, u64)>>>,
    pulses: Arc<Mutex<Vec<u64>>>,
}

impl RecordingFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boxed(&self) -> Option<Box<dyn FeedbackPlatform>> {
        Some(Box::new(self.clone()))
    }

    pub fn tones(&self) -> Vec<(f32, u64)> {
        self.tones.lock().unwrap().clone()
    }

    pub fn pulses(&self) -> Vec<u64> {
        self.pulses.lock().unwrap().clone()
    }

    /// Number of tones played for a category.
    pub fn count(&self, category: FeedbackCategory) -> usize {
        let frequency = category.tone().frequency_hz;
        self.tones().iter().filter(|(f, _)| *f == frequency).count()
    }
}

impl FeedbackPlatform for RecordingFeedback {
    fn play_tone(&self, frequency_hz: f32, duration_ms: u64) -> Result<(), FeedbackError> {
        self.tones.lock().unwrap().push((frequency_hz, duration_ms));
        Ok(())
    }

    fn vibrate(&self, duration_ms: u64) -> Result<(), FeedbackError> {
        self.pulses.lock().unwrap().push(duration_ms);
        Ok(())
    }
}
