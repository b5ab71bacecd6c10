//! CLI Module
//!
//! Command-line surface and the line-source session loop.

pub mod session;

use clap::Parser;
use std::path::PathBuf;

pub use session::{run_file, run_interactive, run_session, SessionSummary};

/// Audiocmd - simulated audio device driven by text commands
#[derive(Parser, Debug)]
#[command(name = "audiocmd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File with one command per line (reads stdin when omitted)
    pub commands_file: Option<PathBuf>,

    /// JSON file with playback simulation settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_and_flags() {
        let cli = Cli::parse_from(["audiocmd", "commands.txt", "-v", "--config", "play.json"]);
        assert_eq!(cli.commands_file, Some(PathBuf::from("commands.txt")));
        assert_eq!(cli.config, Some(PathBuf::from("play.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_interactive() {
        let cli = Cli::parse_from(["audiocmd"]);
        assert!(cli.commands_file.is_none());
        assert!(!cli.verbose);
    }
}
