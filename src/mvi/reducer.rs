//! Reducer trait for MVI architecture.

use chrono::{DateTime, Local};

use super::intent::Intent;
use super::state::ModelState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. It must
/// be a pure function of `(State, Intent, now)`: the current wall-clock
/// instant is injected by the runtime so time-dependent transitions stay
/// deterministic under test.
///
/// What happened during the transition is reported as typed domain
/// events, consumed by the coordinator to schedule cross-cutting
/// effects. A reducer never performs I/O itself.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: ModelState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Domain events announced alongside the state update.
    type Event;

    /// Process an intent and return the new state plus emitted events.
    fn reduce(
        state: Self::State,
        intent: Self::Intent,
        now: DateTime<Local>,
    ) -> (Self::State, Vec<Self::Event>);
}
