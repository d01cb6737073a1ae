//! Countdown timer domain: state machine, intents, and reducer.

mod intent;
mod reducer;
mod state;

pub use intent::TimerIntent;
pub use reducer::{TimerEvent, TimerReducer};
pub use state::{TimerMode, TimerPhase, TimerState};
