//! Runtime settings for the playback simulation
//!
//! Buffer geometry is fixed at compile time (see `engine::buffer`); only the
//! number of chunks moved by a `play` command can be tuned, from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AudioCmdError, Result};

/// Chunks enqueued by each `play`
pub const DEFAULT_CHUNKS_PER_PLAY: usize = 5;

/// Chunks dequeued right after each `play` fill
pub const DEFAULT_CHUNKS_CONSUMED_PER_PLAY: usize = 2;

/// How many synthetic chunks a `play` command produces and consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybackConfig {
    pub chunks_per_play: usize,
    pub chunks_consumed_per_play: usize,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            chunks_per_play: DEFAULT_CHUNKS_PER_PLAY,
            chunks_consumed_per_play: DEFAULT_CHUNKS_CONSUMED_PER_PLAY,
        }
    }
}

impl PlaybackConfig {
    /// Parse and validate settings from JSON text. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PlaybackConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AudioCmdError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::debug!("Loaded playback config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Reject settings that would make `play` a no-op
    pub fn validate(&self) -> Result<()> {
        if self.chunks_per_play == 0 {
            return Err(AudioCmdError::InvalidConfig {
                reason: "chunks_per_play must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
