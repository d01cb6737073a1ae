//! Effects scheduled by the root coordinator.

use chrono::{DateTime, Local};

use crate::haptics::HapticType;

use super::intent::AppIntent;

/// Asynchronous side effects emitted by a reduction step and executed
/// by the runtime. Any result re-enters the action stream as a new
/// intent appended at the end, never out of turn.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Feed a follow-up intent back into the stream.
    Dispatch(AppIntent),

    /// Read the persisted preferences; completes as
    /// `Settings(SettingsLoaded(_))`.
    LoadSettings,

    /// Persist the selected haptic pattern.
    PersistHapticType(HapticType),

    /// Start the repeating one-second tick task. Replaces any tick task
    /// already pending, so a fresh start invalidates stale ticks.
    StartTickLoop,

    /// Abort the pending tick task, if any.
    StopTickLoop,

    /// Drive the haptic engine.
    StartHaptics(HapticType),
    StopHaptics,

    /// Background runtime session, bound to the Running phase.
    StartRuntimeSession,
    EndRuntimeSession,

    /// Schedule / cancel the completion notice for the deadline.
    ScheduleCompletionNotice(DateTime<Local>),
    CancelCompletionNotice,

    /// Atomically consume the background-completion flag; a positive
    /// result re-enters as `BackgroundCompletionDetected`.
    CheckBackgroundCompletion,
}
