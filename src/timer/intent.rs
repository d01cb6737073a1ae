//! Intents for the countdown timer.

use crate::mvi::Intent;

use super::state::TimerMode;

/// Intents that can be dispatched to the timer reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerIntent {
    /// Arm the countdown from the current picker selection.
    Start,

    /// Periodic recomputation while running, driven by the runtime's
    /// tick effect. A tick arriving outside Running is a no-op.
    Tick,

    /// Completion reported by the notification bridge or the background
    /// detector, bypassing the live tick sequence.
    BackgroundTimerFinished,

    /// Abort the running countdown.
    CancelTimer,

    /// Recompute the displayed remaining time from the deadline without
    /// any phase transition. Used on resume to correct suspend drift.
    UpdateTimerDisplay,

    /// Completion screen was dismissed by the user.
    DismissCompletionView,

    // Picker changes, only honored while Idle.
    MinutesSelected(u32),
    HourSelected(u32),
    MinuteSelected(u32),
    ModeSelected(TimerMode),
}

impl Intent for TimerIntent {}
