//! Settings domain: persisted haptic preference, intents, and reducer.

mod intent;
mod reducer;
mod state;

pub use intent::SettingsIntent;
pub use reducer::{SettingsEvent, SettingsReducer};
pub use state::SettingsState;
