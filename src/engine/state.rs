//! Device State for audiocmd
//!
//! Volume and transport flags of the simulated device. Volume is kept in
//! `0..=MAX_VOLUME` by construction: every mutation clamps.

use std::fmt;

use log::info;
use serde::Serialize;

/// Volume after startup and after `reset`
pub const DEFAULT_VOLUME: u8 = 50;

/// Upper volume bound
pub const MAX_VOLUME: u8 = 100;

/// Amount applied by a single volume up/down
pub const VOLUME_STEP: u8 = 10;

/// Volume and playback flags of the simulated device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceState {
    volume: u8,
    is_playing: bool,
    is_muted: bool,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceState {
    /// Create the power-on state: volume 50, not playing, not muted
    ///
    /// # Example
    /// ```
    /// use audiocmd::engine::DeviceState;
    /// let state = DeviceState::new();
    /// assert_eq!(state.volume(), 50);
    /// assert!(!state.is_playing());
    /// ```
    pub fn new() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            is_playing: false,
            is_muted: false,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Restore power-on defaults and log the result
    pub fn reset(&mut self) {
        *self = Self::new();
        info!(
            "System reset: volume = {} | playing = {} | muted = {}",
            self.volume, self.is_playing as u8, self.is_muted as u8
        );
    }

    /// Raise volume by one step, saturating at 100
    ///
    /// # Example
    /// ```
    /// use audiocmd::engine::DeviceState;
    /// let mut state = DeviceState::new();
    /// for _ in 0..20 {
    ///     state.volume_up();
    /// }
    /// assert_eq!(state.volume(), 100);
    /// ```
    pub fn volume_up(&mut self) {
        self.volume = self.volume.saturating_add(VOLUME_STEP).min(MAX_VOLUME);
    }

    /// Lower volume by one step, saturating at 0
    pub fn volume_down(&mut self) {
        self.volume = self.volume.saturating_sub(VOLUME_STEP);
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.is_muted = muted;
    }

    /// Log a human-readable status line
    pub fn print_state(&self) {
        info!("System Status: {}", self);
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Volume: {} | Playing: {} | Muted: {}",
            self.volume,
            yes_no(self.is_playing),
            yes_no(self.is_muted)
        )
    }
}
