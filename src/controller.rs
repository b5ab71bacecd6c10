//! Audio controller
//!
//! Pairs the command registry with the device it drives. One controller
//! exists per process; the main loop feeds it lines.

use log::info;

use crate::config::PlaybackConfig;
use crate::dispatch::{register_audio_commands, CommandContext, CommandRegistry, DispatchOutcome};
use crate::engine::AudioDevice;
use crate::error::Result;

/// Registry plus device
#[derive(Debug)]
pub struct AudioController {
    registry: CommandRegistry,
    device: AudioDevice,
}

impl Default for AudioController {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl AudioController {
    /// Create a controller with the built-in audio commands registered
    ///
    /// # Example
    /// ```
    /// use audiocmd::AudioController;
    /// let mut controller = AudioController::default();
    /// controller.dispatch("play");
    /// assert!(controller.device().state().is_playing());
    /// ```
    pub fn new(playback: PlaybackConfig) -> Self {
        let mut registry = CommandRegistry::new();
        let registered = register_audio_commands(&mut registry);
        info!("Command Processor Initialized ({} commands).", registered);
        Self::with_registry(registry, AudioDevice::new(playback))
    }

    /// Create a controller around a caller-built command set
    pub fn with_registry(registry: CommandRegistry, device: AudioDevice) -> Self {
        Self { registry, device }
    }

    /// Register an extra command; it takes priority over same-named ones
    pub fn register<F>(&mut self, name: &str, description: &str, handler: F) -> Result<()>
    where
        F: Fn(&mut CommandContext<'_>, &str) + 'static,
    {
        self.registry
            .register_with_description(name, description, handler)
    }

    /// Dispatch one input line
    pub fn dispatch(&mut self, line: &str) -> DispatchOutcome {
        self.registry.dispatch(&mut self.device, line)
    }

    /// Release all registered commands; later dispatches match nothing
    pub fn teardown(&mut self) {
        self.registry.teardown();
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn device(&self) -> &AudioDevice {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut AudioDevice {
        &mut self.device
    }
}
