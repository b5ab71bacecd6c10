//! Audiocmd - Simulated Audio Device Controller
//!
//! Accepts line-based commands (`play`, `stop`, `pause`, `volumeUp`, ...),
//! keeps the device state, and buffers synthetic audio chunks in a bounded
//! ring while playback is simulated.
//!
//! # Architecture
//!
//! - Engine: device state, circular chunk buffer, playback simulation
//! - Dispatch: dynamic command registry with prefix matching
//! - Controller: one registry plus one device, fed by the CLI session loop

pub mod cli;
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod logger;

pub use config::PlaybackConfig;
pub use controller::AudioController;
pub use dispatch::{CommandContext, CommandRegistry, DispatchOutcome};
pub use engine::{AudioBuffer, AudioDevice, DeviceState};
pub use error::{AudioCmdError, Result};
