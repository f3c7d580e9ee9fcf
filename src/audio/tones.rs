//! Tone Playback
//!
//! Feedback platform backed by rodio sine waves. One worker thread owns the
//! output device and plays queued tones so the caller never waits for it.

use super::feedback::FeedbackPlatform;
use super::FeedbackError;
use rodio::source::SineWave;
use rodio::{OutputStream, Sink, Source};
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::time::Duration;

/// Default output level (0.0 - 1.0)
const DEFAULT_VOLUME: f32 = 0.1;

/// Tones waiting for the worker; further requests are dropped.
const TONE_QUEUE_LEN: usize = 8;

#[derive(Debug, Clone, Copy)]
struct ToneRequest {
    frequency_hz: f32,
    duration_ms: u64,
    volume: f32,
}

/// Tone feedback using the default audio output device.
#[derive(Debug, Clone)]
pub struct RodioFeedback {
    volume: f32,
    queue: Option<SyncSender<ToneRequest>>,
}

impl Default for RodioFeedback {
    fn default() -> Self {
        Self::new()
    }
}

impl RodioFeedback {
    /// Create a new tone player and start its playback worker.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::sync_channel(TONE_QUEUE_LEN);
        let queue = match std::thread::Builder::new()
            .name("touchhud-tone".to_string())
            .spawn(move || run_worker(rx))
        {
            Ok(_) => Some(tx),
            Err(e) => {
                tracing::trace!("Tone worker not started: {}", e);
                None
            }
        };

        Self {
            volume: DEFAULT_VOLUME,
            queue,
        }
    }

    /// Set the volume level (0.0 - 1.0).
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume.clamp(0.0, 1.0);
        self
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }
}

/// Play queued tones until every sender is gone.
fn run_worker(rx: Receiver<ToneRequest>) {
    // Output stream must live on the playback thread
    let (_stream, stream_handle) = match OutputStream::try_default() {
        Ok(s) => s,
        Err(e) => {
            tracing::trace!("Audio device not available: {}", e);
            return;
        }
    };

    let sink = match Sink::try_new(&stream_handle) {
        Ok(s) => s,
        Err(e) => {
            tracing::trace!("Tone playback failed: {}", e);
            return;
        }
    };

    while let Ok(tone) = rx.recv() {
        if sink.len() >= TONE_QUEUE_LEN {
            tracing::trace!("Tone dropped, playback backlog full");
            continue;
        }

        let source = SineWave::new(tone.frequency_hz)
            .take_duration(Duration::from_millis(tone.duration_ms))
            .amplify(tone.volume);
        sink.append(source);
    }
}

impl FeedbackPlatform for RodioFeedback {
    fn play_tone(&self, frequency_hz: f32, duration_ms: u64) -> Result<(), FeedbackError> {
        if frequency_hz <= 0.0 {
            return Ok(());
        }

        let queue = self
            .queue
            .as_ref()
            .ok_or_else(|| FeedbackError::Unavailable("tone worker not running".to_string()))?;

        let request = ToneRequest {
            frequency_hz,
            duration_ms,
            volume: self.volume,
        };
        match queue.try_send(request) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                Err(FeedbackError::Unavailable("tone queue full".to_string()))
            }
            Err(TrySendError::Disconnected(_)) => Err(FeedbackError::Unavailable(
                "audio device not available".to_string(),
            )),
        }
    }

    fn vibrate(&self, _duration_ms: u64) -> Result<(), FeedbackError> {
        Err(FeedbackError::Unavailable(
            "no vibration motor on this platform".to_string(),
        ))
    }
}
