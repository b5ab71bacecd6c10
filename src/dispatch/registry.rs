//! Command registry and dispatch
//!
//! Commands are registered at startup as (name, handler) pairs. Dispatch
//! matches an input line against the names, newest registration first, and
//! calls the first handler whose name is followed by a space or the end of
//! the line. Whatever follows that space is the handler's argument.

use std::fmt;

use log::{debug, error, info, warn};

use crate::engine::{truncate_utf8, AudioDevice};
use crate::error::{AudioCmdError, Result};

/// Size of the dispatch working buffer, terminator included
pub const MAX_COMMAND_LENGTH: usize = 100;

/// Input bytes considered by dispatch; the rest is silently dropped
pub const MAX_COMMAND_LEN: usize = MAX_COMMAND_LENGTH - 1;

/// What a handler can reach while it runs
pub struct CommandContext<'a> {
    /// The device the command acts on
    pub device: &'a mut AudioDevice,
    /// The registry performing the dispatch (read-only)
    pub registry: &'a CommandRegistry,
}

/// Handler invoked with the command's argument text
pub type CommandHandler = Box<dyn Fn(&mut CommandContext<'_>, &str)>;

/// One registered command
pub struct CommandEntry {
    name: String,
    description: String,
    handler: CommandHandler,
}

impl CommandEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Result of dispatching one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A handler ran
    Handled { command: String, argument: String },
    /// Nothing matched; a warning was logged
    Unknown { input: String },
    /// The line was empty; an error was logged
    Rejected,
}

impl DispatchOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, DispatchOutcome::Handled { .. })
    }
}

/// Return the argument if `input` invokes `name`
fn match_command<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    let rest = input.strip_prefix(name)?;
    if rest.is_empty() {
        Some("")
    } else {
        rest.strip_prefix(' ')
    }
}

/// Ordered set of commands with line dispatch
///
/// Names need not be unique: a later registration shadows earlier ones
/// with the same name.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    /// Registration order; matching walks it back to front
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a command without a description
    pub fn register<F>(&mut self, name: &str, handler: F) -> Result<()>
    where
        F: Fn(&mut CommandContext<'_>, &str) + 'static,
    {
        self.register_entry(name, "", Some(Box::new(handler)))
    }

    /// Register a command with a one-line description for `help`
    pub fn register_with_description<F>(
        &mut self,
        name: &str,
        description: &str,
        handler: F,
    ) -> Result<()>
    where
        F: Fn(&mut CommandContext<'_>, &str) + 'static,
    {
        self.register_entry(name, description, Some(Box::new(handler)))
    }

    /// Register a prebuilt handler
    ///
    /// Empty names and missing handlers are logged and skipped; the rest of
    /// the command set is unaffected.
    pub fn register_entry(
        &mut self,
        name: &str,
        description: &str,
        handler: Option<CommandHandler>,
    ) -> Result<()> {
        if name.is_empty() {
            error!("Cannot register command: name is empty");
            return Err(AudioCmdError::InvalidRegistration {
                reason: "command name is empty".to_string(),
            });
        }
        let Some(handler) = handler else {
            error!("Cannot register command '{}': handler is missing", name);
            return Err(AudioCmdError::InvalidRegistration {
                reason: format!("command '{}' has no handler", name),
            });
        };

        if self.contains(name) {
            warn!("Command '{}' shadows an earlier registration", name);
        }

        self.entries.push(CommandEntry {
            name: name.to_string(),
            description: description.to_string(),
            handler,
        });
        debug!("Registered command '{}'", name);
        Ok(())
    }

    /// Match `line` against the registered commands and run the handler
    ///
    /// Input beyond `MAX_COMMAND_LEN` bytes is dropped, as is anything after
    /// an embedded line break. Unknown input only produces a warning.
    pub fn dispatch(&self, device: &mut AudioDevice, line: &str) -> DispatchOutcome {
        if line.is_empty() {
            error!("Received empty command");
            return DispatchOutcome::Rejected;
        }

        let mut working = truncate_utf8(line, MAX_COMMAND_LEN);
        if working.len() < line.len() {
            debug!("Command truncated to {} bytes", working.len());
        }
        if let Some(end) = working.find(|c: char| c == '\r' || c == '\n') {
            working = &working[..end];
        }

        let matched = self
            .entries
            .iter()
            .rev()
            .find_map(|entry| match_command(working, &entry.name).map(|arg| (entry, arg)));

        match matched {
            Some((entry, argument)) => {
                debug!("Dispatching '{}' with argument \"{}\"", entry.name, argument);
                let mut ctx = CommandContext {
                    device,
                    registry: self,
                };
                (entry.handler)(&mut ctx, argument);
                DispatchOutcome::Handled {
                    command: entry.name.clone(),
                    argument: argument.to_string(),
                }
            }
            None => {
                warn!("Unknown command received: \"{}\"", working);
                DispatchOutcome::Unknown {
                    input: working.to_string(),
                }
            }
        }
    }

    /// Release every entry. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let released = self.entries.len();
        self.entries.clear();
        info!("Command registry freed ({} commands)", released);
    }

    /// Check if a command with this exact name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// Entries in match order (most recent first)
    pub fn entries(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter().rev()
    }

    /// Registered names in match order
    pub fn command_names(&self) -> Vec<&str> {
        self.entries().map(CommandEntry::name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
