//! Reducer for persisted user settings.

use chrono::{DateTime, Local};

use crate::haptics::HapticType;
use crate::mvi::Reducer;

use super::intent::SettingsIntent;
use super::state::SettingsState;

/// Domain events announced by settings transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    /// The store should be read; the result re-enters the stream as
    /// [`SettingsIntent::SettingsLoaded`].
    LoadRequested,
    /// Initial load finished with this preference.
    Loaded(HapticType),
    /// User selection that should be persisted and propagated.
    Selected(HapticType),
}

/// Reducer for settings state transitions. The preference store itself
/// is only touched by the runtime, from the emitted events.
pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsState;
    type Intent = SettingsIntent;
    type Event = SettingsEvent;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
        _now: DateTime<Local>,
    ) -> (Self::State, Vec<Self::Event>) {
        match intent {
            SettingsIntent::LoadSettings => (state, vec![SettingsEvent::LoadRequested]),

            SettingsIntent::SettingsLoaded(haptic_type) => {
                state.selected_haptic_type = haptic_type;
                state.is_loaded = true;
                (state, vec![SettingsEvent::Loaded(haptic_type)])
            }

            SettingsIntent::SelectHapticType(haptic_type) => {
                state.selected_haptic_type = haptic_type;
                (state, vec![SettingsEvent::Selected(haptic_type)])
            }
        }
    }
}
