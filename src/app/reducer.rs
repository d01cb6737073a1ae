//! Root coordinator reducer.
//!
//! Scopes each domain intent to its slice reducer, then turns the
//! emitted domain events into cross-cutting effects: navigation pushes,
//! haptic session commands, tick scheduling, and background-completion
//! reconciliation. This is the only place where slices interact.

use chrono::{DateTime, Local};
use tracing::debug;

use crate::haptics::{HapticsEvent, HapticsIntent, HapticsReducer};
use crate::mvi::Reducer;
use crate::settings::{SettingsEvent, SettingsIntent, SettingsReducer};
use crate::timer::{TimerEvent, TimerIntent, TimerReducer};

use super::effect::Effect;
use super::intent::{AppIntent, ScenePhase};
use super::navigation::Destination;
use super::state::AppState;

/// Run a slice reducer over one field of the aggregate state and hand
/// back the emitted domain events.
macro_rules! reduce_slice {
    ($state:expr, $field:ident, $reducer:ty, $intent:expr, $now:expr) => {{
        let (next, events) = <$reducer>::reduce(std::mem::take(&mut $state.$field), $intent, $now);
        $state.$field = next;
        events
    }};
}

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;
    type Event = Effect;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
        now: DateTime<Local>,
    ) -> (Self::State, Vec<Self::Event>) {
        match intent {
            AppIntent::OnAppear => (
                state,
                vec![Effect::Dispatch(AppIntent::Settings(
                    SettingsIntent::LoadSettings,
                ))],
            ),

            AppIntent::ScenePhaseChanged(ScenePhase::Active) => {
                if state.countdown_visible {
                    // Correct for wall-clock time elapsed while suspended
                    (
                        state,
                        vec![Effect::Dispatch(AppIntent::Timer(
                            TimerIntent::UpdateTimerDisplay,
                        ))],
                    )
                } else {
                    (state, vec![Effect::CheckBackgroundCompletion])
                }
            }
            AppIntent::ScenePhaseChanged(_) => (state, Vec::new()),

            AppIntent::BackgroundCompletionDetected => {
                if state.timer.completion_date.is_some() {
                    debug!("timer completed while suspended, showing completion screen");
                    // Route through the timer so the phase reaches
                    // Completed and the tick loop and session are torn
                    // down by the ordinary finish routing
                    (
                        state,
                        vec![Effect::Dispatch(AppIntent::Timer(
                            TimerIntent::BackgroundTimerFinished,
                        ))],
                    )
                } else {
                    (state, Vec::new())
                }
            }

            AppIntent::PathChanged(new_path) => {
                state.navigation_path = new_path;
                state.sync_countdown_visibility();
                (state, Vec::new())
            }

            AppIntent::PushScreen(destination) => {
                state.navigation_path.push(destination);
                state.sync_countdown_visibility();
                (state, Vec::new())
            }

            AppIntent::PopScreen => {
                // The binding layer already removed the path entry
                let effects = if state.haptics.is_active {
                    vec![Effect::Dispatch(AppIntent::Haptics(
                        HapticsIntent::StopHaptic,
                    ))]
                } else {
                    Vec::new()
                };
                (state, effects)
            }

            AppIntent::Timer(timer_intent) => {
                let events = reduce_slice!(state, timer, TimerReducer, timer_intent, now);
                let mut effects = Vec::new();
                for event in events {
                    route_timer_event(&mut state, event, &mut effects);
                }
                (state, effects)
            }

            AppIntent::Settings(settings_intent) => {
                let events = reduce_slice!(state, settings, SettingsReducer, settings_intent, now);
                let mut effects = Vec::new();
                for event in events {
                    match event {
                        SettingsEvent::LoadRequested => effects.push(Effect::LoadSettings),
                        SettingsEvent::Loaded(haptic_type) => {
                            effects.push(Effect::Dispatch(AppIntent::Haptics(
                                HapticsIntent::UpdateHapticSettings(haptic_type),
                            )));
                        }
                        SettingsEvent::Selected(haptic_type) => {
                            effects.push(Effect::PersistHapticType(haptic_type));
                            effects.push(Effect::Dispatch(AppIntent::Haptics(
                                HapticsIntent::UpdateHapticSettings(haptic_type),
                            )));
                        }
                    }
                }
                (state, effects)
            }

            AppIntent::Haptics(haptics_intent) => {
                let events = reduce_slice!(state, haptics, HapticsReducer, haptics_intent, now);
                let effects = events
                    .into_iter()
                    .map(|event| match event {
                        HapticsEvent::EngineStart(haptic_type) => Effect::StartHaptics(haptic_type),
                        HapticsEvent::EngineStop => Effect::StopHaptics,
                    })
                    .collect();
                (state, effects)
            }
        }
    }
}

/// Routing table from timer domain events to coordinator effects.
fn route_timer_event(state: &mut AppState, event: TimerEvent, effects: &mut Vec<Effect>) {
    match event {
        TimerEvent::Started { completion } => {
            debug!(%completion, "countdown started");
            effects.push(Effect::StartRuntimeSession);
            effects.push(Effect::StartTickLoop);
            effects.push(Effect::ScheduleCompletionNotice(completion));
        }

        TimerEvent::Finished {
            in_background: false,
        } => {
            debug!("countdown finished in foreground");
            effects.push(Effect::StopTickLoop);
            effects.push(Effect::EndRuntimeSession);
            effects.push(Effect::CancelCompletionNotice);
            // Independent slices: haptics start and the push are
            // unordered with respect to each other
            effects.push(Effect::Dispatch(AppIntent::Haptics(
                HapticsIntent::StartHaptic(state.settings.selected_haptic_type),
            )));
            effects.push(Effect::Dispatch(AppIntent::PushScreen(
                Destination::Completion,
            )));
        }

        TimerEvent::Finished {
            in_background: true,
        } => {
            debug!("countdown finished in background, no haptics");
            effects.push(Effect::StopTickLoop);
            effects.push(Effect::EndRuntimeSession);
            effects.push(Effect::Dispatch(AppIntent::PushScreen(
                Destination::Completion,
            )));
        }

        TimerEvent::Cancelled => {
            // Pop the countdown screen before stopping haptics
            state.navigation_path.pop();
            state.sync_countdown_visibility();
            effects.push(Effect::StopTickLoop);
            effects.push(Effect::EndRuntimeSession);
            effects.push(Effect::CancelCompletionNotice);
            effects.push(Effect::Dispatch(AppIntent::Haptics(
                HapticsIntent::StopHaptic,
            )));
        }

        TimerEvent::CompletionDismissed => {
            state.navigation_path.clear();
            state.sync_countdown_visibility();
            effects.push(Effect::Dispatch(AppIntent::Haptics(
                HapticsIntent::StopHaptic,
            )));
        }
    }
}
