//! Simulated audio device
//!
//! Owns the single `DeviceState` and `AudioBuffer` of a process and runs the
//! playback simulation that command handlers trigger.

use log::{debug, info, warn};
use serde::Serialize;

use super::buffer::{AudioBuffer, AUDIO_BUFFER_CAPACITY};
use super::state::DeviceState;
use crate::config::PlaybackConfig;

/// Point-in-time view of the device, used by `status json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceSnapshot {
    pub state: DeviceState,
    pub buffered_chunks: usize,
    pub buffer_capacity: usize,
    pub buffer_head: usize,
    pub buffer_tail: usize,
}

/// Outcome of one simulated playback pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackReport {
    pub enqueued: usize,
    pub dropped: usize,
    pub consumed: Vec<String>,
}

/// Device state plus its chunk buffer
#[derive(Debug, Clone)]
pub struct AudioDevice {
    state: DeviceState,
    buffer: AudioBuffer,
    playback: PlaybackConfig,
    /// Sequence number of the next synthetic chunk
    next_chunk: u64,
}

impl Default for AudioDevice {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl AudioDevice {
    pub fn new(playback: PlaybackConfig) -> Self {
        Self {
            state: DeviceState::new(),
            buffer: AudioBuffer::new(),
            playback,
            next_chunk: 1,
        }
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DeviceState {
        &mut self.state
    }

    pub fn buffer(&self) -> &AudioBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut AudioBuffer {
        &mut self.buffer
    }

    pub fn snapshot(&self) -> DeviceSnapshot {
        DeviceSnapshot {
            state: self.state,
            buffered_chunks: self.buffer.len(),
            buffer_capacity: AUDIO_BUFFER_CAPACITY,
            buffer_head: self.buffer.head(),
            buffer_tail: self.buffer.tail(),
        }
    }

    /// Start playback unless muted, then stream synthetic chunks
    ///
    /// Returns `None` when mute suppressed the request. Full and empty
    /// buffer conditions along the way are logged and tolerated.
    pub fn play(&mut self, label: &str) -> Option<PlaybackReport> {
        if self.state.is_muted() {
            warn!("Playback suppressed: device is muted");
            self.state.print_state();
            return None;
        }

        self.state.set_playing(true);
        let report = self.simulate_playback(label);
        self.state.print_state();
        self.buffer.print_state();
        Some(report)
    }

    fn simulate_playback(&mut self, label: &str) -> PlaybackReport {
        let mut report = PlaybackReport::default();

        for _ in 0..self.playback.chunks_per_play {
            let chunk = if label.is_empty() {
                format!("audio_chunk_{}", self.next_chunk)
            } else {
                format!("{}:audio_chunk_{}", label, self.next_chunk)
            };
            self.next_chunk += 1;

            match self.buffer.enqueue(&chunk) {
                Ok(()) => {
                    debug!("Enqueued {}", chunk);
                    report.enqueued += 1;
                }
                Err(e) => {
                    info!("{}. Cannot enqueue chunk: {}", e, chunk);
                    report.dropped += 1;
                }
            }
        }

        for _ in 0..self.playback.chunks_consumed_per_play {
            match self.buffer.dequeue() {
                Ok(chunk) => {
                    info!("Playing chunk: {}", chunk);
                    report.consumed.push(chunk);
                }
                Err(e) => {
                    info!("{}. Cannot dequeue chunk.", e);
                    break;
                }
            }
        }

        report
    }

    pub fn stop(&mut self) {
        self.state.set_playing(false);
        self.state.print_state();
    }

    /// Stop playback and drop everything buffered
    pub fn pause(&mut self) {
        self.state.set_playing(false);
        self.buffer.reset();
        self.state.print_state();
    }
}
