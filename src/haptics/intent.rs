//! Intents for haptic feedback sessions.

use crate::mvi::Intent;

use super::state::HapticType;

/// Intents that can be dispatched to the haptics reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HapticsIntent {
    /// Begin a repeating feedback session with the given pattern,
    /// replacing any session already active.
    StartHaptic(HapticType),

    /// End the feedback session. No-op when already inactive.
    StopHaptic,

    /// Record the user's preferred pattern. Never starts or stops an
    /// in-progress session.
    UpdateHapticSettings(HapticType),
}

impl Intent for HapticsIntent {}
