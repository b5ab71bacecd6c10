//! Command Dispatch Module
//!
//! Dynamic command registration, line matching and the built-in audio
//! command set.

pub mod handlers;
pub mod registry;

pub use handlers::register_audio_commands;
pub use registry::{
    CommandContext, CommandEntry, CommandHandler, CommandRegistry, DispatchOutcome,
    MAX_COMMAND_LEN, MAX_COMMAND_LENGTH,
};
