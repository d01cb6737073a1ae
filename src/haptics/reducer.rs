//! Reducer for haptic feedback sessions.

use chrono::{DateTime, Local};

use crate::mvi::Reducer;

use super::intent::HapticsIntent;
use super::state::{HapticType, HapticsState};

/// Domain events announced by haptics transitions. The runtime maps
/// these onto the haptic-engine collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HapticsEvent {
    /// Engine should begin a repeating session with this pattern.
    EngineStart(HapticType),
    /// Engine should end the current session.
    EngineStop,
}

/// Reducer for haptics state transitions.
///
/// Pure function; the engine itself is driven by the runtime from the
/// emitted events. Stop on an inactive session emits nothing, which is
/// what keeps the engine call idempotent at the coordinator level.
pub struct HapticsReducer;

impl Reducer for HapticsReducer {
    type State = HapticsState;
    type Intent = HapticsIntent;
    type Event = HapticsEvent;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
        _now: DateTime<Local>,
    ) -> (Self::State, Vec<Self::Event>) {
        match intent {
            HapticsIntent::StartHaptic(haptic_type) => {
                state.is_active = true;
                state.active_type = Some(haptic_type);
                (state, vec![HapticsEvent::EngineStart(haptic_type)])
            }

            HapticsIntent::StopHaptic => {
                let was_active = state.is_active;
                state.is_active = false;
                state.active_type = None;
                if was_active {
                    (state, vec![HapticsEvent::EngineStop])
                } else {
                    (state, Vec::new())
                }
            }

            HapticsIntent::UpdateHapticSettings(haptic_type) => {
                state.preferred_type = haptic_type;
                (state, Vec::new())
            }
        }
    }
}
