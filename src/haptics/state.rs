//! State for haptic feedback sessions.

use serde::{Deserialize, Serialize};

use crate::mvi::ModelState;

/// Feedback pattern played by the haptic engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HapticType {
    #[default]
    Gentle,
    Strong,
    Pulse,
}

impl HapticType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HapticType::Gentle => "gentle",
            HapticType::Strong => "strong",
            HapticType::Pulse => "pulse",
        }
    }
}

/// Haptics slice of the application state.
///
/// `is_active` tracks a live repeating feedback session on the engine;
/// `preferred_type` is the user's configured pattern, pushed in from the
/// settings slice and left untouched by session start/stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HapticsState {
    pub is_active: bool,
    pub active_type: Option<HapticType>,
    pub preferred_type: HapticType,
}

impl ModelState for HapticsState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_inactive_gentle() {
        let state = HapticsState::default();
        assert!(!state.is_active);
        assert!(state.active_type.is_none());
        assert_eq!(state.preferred_type, HapticType::Gentle);
    }
}
