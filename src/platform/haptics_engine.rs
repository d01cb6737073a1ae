//! Haptic engine driver seam.

use parking_lot::Mutex;
use tracing::info;

use crate::haptics::HapticType;

/// Raw feedback driver. Owned by exactly one session at a time; the
/// coordinator only ever issues start/stop commands through this seam.
pub trait HapticEngine: Send + Sync {
    /// Begin a repeating feedback session, replacing any current one.
    fn start(&self, haptic_type: HapticType);

    /// End the current session. Must tolerate being called when no
    /// session is active.
    fn stop(&self);
}

/// Engine for hosts without real actuators; logs session boundaries.
pub struct LoggingHapticEngine;

impl HapticEngine for LoggingHapticEngine {
    fn start(&self, haptic_type: HapticType) {
        info!(pattern = haptic_type.as_str(), "haptic session started");
    }

    fn stop(&self) {
        info!("haptic session stopped");
    }
}

/// Test engine that records every command it receives.
#[derive(Default)]
pub struct RecordingHapticEngine {
    commands: Mutex<Vec<EngineCommand>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCommand {
    Start(HapticType),
    Stop,
}

impl RecordingHapticEngine {
    pub fn commands(&self) -> Vec<EngineCommand> {
        self.commands.lock().clone()
    }
}

impl HapticEngine for RecordingHapticEngine {
    fn start(&self, haptic_type: HapticType) {
        self.commands.lock().push(EngineCommand::Start(haptic_type));
    }

    fn stop(&self) {
        self.commands.lock().push(EngineCommand::Stop);
    }
}
