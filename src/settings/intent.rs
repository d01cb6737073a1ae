//! Intents for persisted user settings.

use crate::haptics::HapticType;
use crate::mvi::Intent;

/// Intents that can be dispatched to the settings reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsIntent {
    /// Request the initial read from the preference store.
    LoadSettings,

    /// Result of the load effect. Carries the stored preference, or the
    /// baseline default when the store was absent or unreadable.
    SettingsLoaded(HapticType),

    /// User picked a new haptic pattern.
    SelectHapticType(HapticType),
}

impl Intent for SettingsIntent {}
