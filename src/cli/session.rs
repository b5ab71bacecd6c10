//! Session loop
//!
//! Feeds lines from a file or stdin to the controller until end of input
//! or an `exit`/`quit` line.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use log::{error, info};

use crate::controller::AudioController;
use crate::dispatch::DispatchOutcome;
use crate::error::{AudioCmdError, Result};
use crate::logger::{log_message, LogLevel};

/// Counters for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Non-blank lines read, exit line included
    pub lines: usize,
    pub handled: usize,
    pub unknown: usize,
    pub rejected: usize,
    /// Session ended on `exit`/`quit` rather than end of input
    pub exited: bool,
}

fn is_exit(line: &str) -> bool {
    matches!(line, "exit" | "quit")
}

/// Run every line of `reader` through the controller
pub fn run_session<R: BufRead>(
    reader: R,
    controller: &mut AudioController,
) -> Result<SessionSummary> {
    run_lines(reader, controller, None::<&mut io::Stdout>)
}

/// Run the commands stored in a file
pub fn run_file(path: &Path, controller: &mut AudioController) -> Result<SessionSummary> {
    if !path.exists() {
        return Err(AudioCmdError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let file = File::open(path)?;
    info!("Reading commands from file: {}", path.display());
    run_session(BufReader::new(file), controller)
}

/// Read commands from stdin, prompting before each line
pub fn run_interactive(controller: &mut AudioController) -> Result<SessionSummary> {
    info!("Interactive mode: type 'help' for commands, 'exit' to quit");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_lines(stdin.lock(), controller, Some(&mut stdout))
}

fn run_lines<R: BufRead, W: Write>(
    mut reader: R,
    controller: &mut AudioController,
    mut prompt: Option<&mut W>,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    let mut raw = Vec::new();

    loop {
        if let Some(out) = prompt.as_mut() {
            write!(out, "> ")?;
            out.flush()?;
        }

        raw.clear();
        if reader.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        let text = String::from_utf8_lossy(&raw);
        if matches!(text, std::borrow::Cow::Owned(_)) {
            error!("Input line is not valid UTF-8; invalid bytes replaced");
        }

        let line = text.trim();
        if line.is_empty() {
            continue;
        }
        summary.lines += 1;
        log_message(LogLevel::Input, format_args!("Received: \"{}\"", line));

        if is_exit(line) {
            info!("Exit requested");
            summary.exited = true;
            break;
        }

        match controller.dispatch(line) {
            DispatchOutcome::Handled { .. } => summary.handled += 1,
            DispatchOutcome::Unknown { .. } => summary.unknown += 1,
            DispatchOutcome::Rejected => summary.rejected += 1,
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_blank_lines_skipped() {
        let mut controller = AudioController::default();
        let input = Cursor::new("\n   \r\nplay\n\n");
        let summary = run_session(input, &mut controller).unwrap();

        assert_eq!(summary.lines, 1);
        assert_eq!(summary.handled, 1);
        assert!(!summary.exited);
    }

    #[test]
    fn test_exit_stops_session() {
        let mut controller = AudioController::default();
        let input = Cursor::new("mute\nexit\nunmute\n");
        let summary = run_session(input, &mut controller).unwrap();

        assert!(summary.exited);
        assert_eq!(summary.handled, 1);
        assert!(controller.device().state().is_muted());
    }

    #[test]
    fn test_lines_trimmed_before_dispatch() {
        let mut controller = AudioController::default();
        let input = Cursor::new("   volumeUp   \r\n");
        run_session(input, &mut controller).unwrap();
        assert_eq!(controller.device().state().volume(), 60);
    }

    #[test]
    fn test_invalid_utf8_does_not_abort() {
        let mut controller = AudioController::default();
        let input = Cursor::new(b"pl\xffay\nplay\n".to_vec());
        let summary = run_session(input, &mut controller).unwrap();

        assert_eq!(summary.unknown, 1);
        assert_eq!(summary.handled, 1);
    }

    #[test]
    fn test_prompt_written_per_line() {
        let mut controller = AudioController::default();
        let mut out = Vec::new();
        run_lines(Cursor::new("help\n"), &mut controller, Some(&mut out)).unwrap();
        assert_eq!(out, b"> > ");
    }
}
