//! Error handling for audiocmd
//!
//! Core failures (full/empty buffer, bad registration) are absorbed and
//! logged by their callers; only startup failures reach `main`. Bad input
//! lines are reported through `DispatchOutcome`, not as errors.

use thiserror::Error;

/// Result type alias for audiocmd operations
pub type Result<T> = std::result::Result<T, AudioCmdError>;

/// Main error type for audiocmd operations
#[derive(Error, Debug)]
pub enum AudioCmdError {
    // Registry Errors
    #[error("Invalid command registration: {reason}")]
    InvalidRegistration { reason: String },

    // Buffer Errors
    #[error("Audio buffer is full ({capacity} chunks)")]
    BufferFull { capacity: usize },

    #[error("Audio buffer is empty")]
    BufferEmpty,

    // Configuration Errors
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // File Errors
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AudioCmdError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            AudioCmdError::InvalidRegistration { .. } => "INVALID_REGISTRATION",
            AudioCmdError::BufferFull { .. } => "BUFFER_FULL",
            AudioCmdError::BufferEmpty => "BUFFER_EMPTY",
            AudioCmdError::InvalidConfig { .. } => "INVALID_CONFIG",
            AudioCmdError::FileNotFound { .. } => "FILE_NOT_FOUND",
            AudioCmdError::Io(_) => "IO_ERROR",
            AudioCmdError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AudioCmdError::BufferFull { capacity: 10 };
        assert_eq!(err.error_code(), "BUFFER_FULL");
        assert_eq!(err.to_string(), "Audio buffer is full (10 chunks)");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: AudioCmdError = io.into();
        assert_eq!(err.error_code(), "IO_ERROR");
    }
}
