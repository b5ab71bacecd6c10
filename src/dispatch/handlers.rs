//! Built-in audio commands
//!
//! The fixed command set registered at startup. Each handler receives the
//! text after the command name.

use log::{error, info, warn};

use super::registry::{CommandContext, CommandRegistry};
use crate::engine::MAX_VOLUME;

/// Register all built-in audio commands into a registry.
///
/// Returns how many registrations succeeded.
pub fn register_audio_commands(registry: &mut CommandRegistry) -> usize {
    let commands: [(&str, &str, fn(&mut CommandContext<'_>, &str)); 13] = [
        ("play", "Start playback and stream chunks", handle_play),
        ("stop", "Stop playback, keep buffered chunks", handle_stop),
        ("pause", "Stop playback and clear the buffer", handle_pause),
        ("volumeUp", "Raise volume by 10", handle_volume_up),
        ("volumeDown", "Lower volume by 10", handle_volume_down),
        ("volume up", "Alias for volumeUp", handle_volume_up),
        ("volume down", "Alias for volumeDown", handle_volume_down),
        ("mute", "Mute output", handle_mute),
        ("unmute", "Unmute output", handle_unmute),
        ("reset", "Restore default device state", handle_reset),
        ("status", "Show device and buffer state [json]", handle_status),
        ("help", "List available commands", handle_help),
        ("invalid", "Report an invalid command", handle_invalid),
    ];

    let mut registered = 0;
    for (name, description, handler) in commands {
        if registry
            .register_with_description(name, description, handler)
            .is_ok()
        {
            registered += 1;
        }
    }
    registered
}

// ---------------------------------------------------------------------------
// transport
// ---------------------------------------------------------------------------

fn handle_play(ctx: &mut CommandContext<'_>, arg: &str) {
    info!("Handling play command: {}", arg);
    ctx.device.play(arg);
}

fn handle_stop(ctx: &mut CommandContext<'_>, arg: &str) {
    info!("Handling stop command: {}", arg);
    ctx.device.stop();
}

fn handle_pause(ctx: &mut CommandContext<'_>, arg: &str) {
    info!("Handling pause command: {}", arg);
    ctx.device.pause();
}

// ---------------------------------------------------------------------------
// volume & mute
// ---------------------------------------------------------------------------

fn handle_volume_up(ctx: &mut CommandContext<'_>, arg: &str) {
    info!("Handling volume up command: {}", arg);
    let state = ctx.device.state_mut();
    if state.volume() == MAX_VOLUME {
        info!("Volume already at maximum");
    }
    state.volume_up();
    state.print_state();
}

fn handle_volume_down(ctx: &mut CommandContext<'_>, arg: &str) {
    info!("Handling volume down command: {}", arg);
    let state = ctx.device.state_mut();
    if state.volume() == 0 {
        info!("Volume already at minimum");
    }
    state.volume_down();
    state.print_state();
}

fn handle_mute(ctx: &mut CommandContext<'_>, _arg: &str) {
    let state = ctx.device.state_mut();
    state.set_muted(true);
    state.print_state();
}

fn handle_unmute(ctx: &mut CommandContext<'_>, _arg: &str) {
    let state = ctx.device.state_mut();
    state.set_muted(false);
    state.print_state();
}

// ---------------------------------------------------------------------------
// system
// ---------------------------------------------------------------------------

fn handle_reset(ctx: &mut CommandContext<'_>, arg: &str) {
    info!("Handling reset command: {}", arg);
    // Device state only; buffered chunks survive a reset
    ctx.device.state_mut().reset();
}

fn handle_status(ctx: &mut CommandContext<'_>, arg: &str) {
    match arg {
        "" => {
            ctx.device.state().print_state();
            ctx.device.buffer().print_state();
        }
        "json" => match serde_json::to_string(&ctx.device.snapshot()) {
            Ok(json) => info!("{}", json),
            Err(e) => error!("Failed to serialize device state: {}", e),
        },
        other => warn!("Unknown status format: \"{}\"", other),
    }
}

fn handle_help(ctx: &mut CommandContext<'_>, _arg: &str) {
    info!("Available commands:");
    for entry in ctx.registry.entries() {
        if entry.description().is_empty() {
            info!("  {}", entry.name());
        } else {
            info!("  {:<12} {}", entry.name(), entry.description());
        }
    }
}

fn handle_invalid(_ctx: &mut CommandContext<'_>, arg: &str) {
    error!("Invalid command received: {}", arg);
}
