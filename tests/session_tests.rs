//! Session Tests
//!
//! Command files run through the same loop the CLI uses.

use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use audiocmd::cli::{run_file, SessionSummary};
use audiocmd::{AudioController, PlaybackConfig};

fn command_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_run_command_file() {
    let file = command_file(
        "play\r\n\
         volumeUp\n\
         \n\
         frobnicate\n\
         mute\n\
         play\n\
         help\n",
    );
    let mut controller = AudioController::default();
    let summary = run_file(file.path(), &mut controller).unwrap();

    assert_eq!(
        summary,
        SessionSummary {
            lines: 6,
            handled: 5,
            unknown: 1,
            rejected: 0,
            exited: false,
        }
    );
    let state = controller.device().state();
    assert_eq!(state.volume(), 60);
    assert!(state.is_muted());
    // Muted play does not clear an already playing device
    assert!(state.is_playing());
}

#[test]
fn test_exit_line_ends_file() {
    let file = command_file("volumeDown\nexit\nvolumeDown\n");
    let mut controller = AudioController::default();
    let summary = run_file(file.path(), &mut controller).unwrap();

    assert!(summary.exited);
    assert_eq!(controller.device().state().volume(), 40);
}

#[test]
fn test_missing_file() {
    let mut controller = AudioController::default();
    let err = run_file(std::path::Path::new("/nonexistent/commands.txt"), &mut controller)
        .unwrap_err();
    assert_eq!(err.error_code(), "FILE_NOT_FOUND");
}

#[test]
fn test_config_changes_play_volume() {
    let config = PlaybackConfig::from_json_str(
        r#"{ "chunks_per_play": 10, "chunks_consumed_per_play": 0 }"#,
    )
    .unwrap();
    let file = command_file("play\nplay\n");
    let mut controller = AudioController::new(config);
    run_file(file.path(), &mut controller).unwrap();

    assert!(controller.device().buffer().is_full());
}
