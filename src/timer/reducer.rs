//! Reducer for the countdown timer.

use chrono::{DateTime, Local};

use crate::mvi::Reducer;

use super::intent::TimerIntent;
use super::state::{format_remaining, TimerPhase, TimerState};

/// Domain events announced by timer transitions.
///
/// The coordinator consumes these to wire cross-component effects
/// (navigation, haptics, tick scheduling) without inspecting the
/// timer's intent shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Countdown armed with the given deadline.
    Started { completion: DateTime<Local> },
    /// Deadline reached. `in_background` is true when completion was
    /// reported without a live tick sequence.
    Finished { in_background: bool },
    /// Running countdown aborted by the user.
    Cancelled,
    /// Completion screen dismissed.
    CompletionDismissed,
}

/// Reducer for timer state transitions.
///
/// Pure function. Tick scheduling, runtime-session bookkeeping, and
/// notification scheduling happen in the runtime, keyed off the events
/// emitted here.
pub struct TimerReducer;

impl Reducer for TimerReducer {
    type State = TimerState;
    type Intent = TimerIntent;
    type Event = TimerEvent;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
        now: DateTime<Local>,
    ) -> (Self::State, Vec<Self::Event>) {
        match intent {
            TimerIntent::Start => match state.phase {
                TimerPhase::Idle => {
                    let completion = state.completion_from(now);
                    state.phase = TimerPhase::Running;
                    state.completion_date = Some(completion);
                    state.refresh_display(now);
                    (state, vec![TimerEvent::Started { completion }])
                }
                _ => (state, Vec::new()),
            },

            TimerIntent::Tick => match state.phase {
                TimerPhase::Running => {
                    state.refresh_display(now);
                    if state.remaining_seconds == 0 {
                        state.phase = TimerPhase::Completed;
                        (state, vec![TimerEvent::Finished { in_background: false }])
                    } else {
                        (state, Vec::new())
                    }
                }
                // Stale tick after cancel or completion
                _ => (state, Vec::new()),
            },

            TimerIntent::BackgroundTimerFinished => match state.phase {
                TimerPhase::Running => {
                    state.phase = TimerPhase::Completed;
                    state.remaining_seconds = 0;
                    state.display_time = format_remaining(0);
                    (state, vec![TimerEvent::Finished { in_background: true }])
                }
                _ => (state, Vec::new()),
            },

            TimerIntent::CancelTimer => match state.phase {
                TimerPhase::Running => {
                    state.phase = TimerPhase::Idle;
                    state.completion_date = None;
                    state.remaining_seconds = 0;
                    state.display_time = format_remaining(0);
                    (state, vec![TimerEvent::Cancelled])
                }
                _ => (state, Vec::new()),
            },

            TimerIntent::UpdateTimerDisplay => {
                // Drift correction only, never a phase transition
                state.refresh_display(now);
                (state, Vec::new())
            }

            TimerIntent::DismissCompletionView => match state.phase {
                TimerPhase::Completed => {
                    state.phase = TimerPhase::Idle;
                    state.completion_date = None;
                    (state, vec![TimerEvent::CompletionDismissed])
                }
                _ => (state, Vec::new()),
            },

            TimerIntent::MinutesSelected(minutes) => {
                if state.phase == TimerPhase::Idle {
                    state.selected_minutes = minutes.clamp(1, 59);
                }
                (state, Vec::new())
            }

            TimerIntent::HourSelected(hour) => {
                if state.phase == TimerPhase::Idle {
                    state.selected_hour = hour.min(23);
                }
                (state, Vec::new())
            }

            TimerIntent::MinuteSelected(minute) => {
                if state.phase == TimerPhase::Idle {
                    state.selected_minute = minute.min(59);
                }
                (state, Vec::new())
            }

            TimerIntent::ModeSelected(mode) => {
                if state.phase == TimerPhase::Idle {
                    state.mode = mode;
                }
                (state, Vec::new())
            }
        }
    }
}
