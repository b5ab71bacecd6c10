//! Audio Engine Module
//!
//! Simulated device internals:
//! - Device state (volume, playing/muted flags)
//! - Circular chunk buffer
//! - The owning device context and playback simulation

pub mod buffer;
pub mod device;
pub mod state;

pub use buffer::{
    truncate_utf8, AudioBuffer, AUDIO_BUFFER_CAPACITY, AUDIO_CHUNK_SIZE, MAX_CHUNK_LEN,
};
pub use device::{AudioDevice, DeviceSnapshot, PlaybackReport};
pub use state::{DeviceState, DEFAULT_VOLUME, MAX_VOLUME, VOLUME_STEP};
