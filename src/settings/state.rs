//! State for persisted user settings.

use crate::haptics::HapticType;
use crate::mvi::ModelState;

/// Settings slice of the application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsState {
    pub selected_haptic_type: HapticType,
    /// Transitions false → true exactly once per process lifetime,
    /// when the initial load from the preference store completes.
    pub is_loaded: bool,
}

impl ModelState for SettingsState {}
