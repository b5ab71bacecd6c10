//! Audiocmd CLI - Simulated Audio Device
//!
//! Runs a command file, or an interactive stdin session, against the
//! simulated audio device.

use anyhow::Context;
use clap::Parser;
use log::{error, info};

use audiocmd::cli::{run_file, run_interactive, Cli, SessionSummary};
use audiocmd::{logger, AudioController, PlaybackConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init(cli.verbose);

    info!("Audiocmd v{}", env!("CARGO_PKG_VERSION"));

    let playback = match &cli.config {
        Some(path) => PlaybackConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => PlaybackConfig::default(),
    };

    let mut controller = AudioController::new(playback);
    let summary = run(&cli, &mut controller);
    controller.teardown();

    let summary = summary?;
    info!(
        "Session finished: {} handled | {} unknown | {} rejected",
        summary.handled, summary.unknown, summary.rejected
    );
    Ok(())
}

fn run(cli: &Cli, controller: &mut AudioController) -> anyhow::Result<SessionSummary> {
    let result = match &cli.commands_file {
        Some(path) => run_file(path, controller),
        None => run_interactive(controller),
    };

    result.map_err(|e| {
        error!("Session aborted [{}]: {}", e.error_code(), e);
        match &cli.commands_file {
            Some(path) => anyhow::Error::new(e)
                .context(format!("Failed to run commands from: {}", path.display())),
            None => anyhow::Error::new(e),
        }
    })
}
