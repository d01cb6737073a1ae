//! Haptic feedback domain: session state, intents, and reducer.

mod intent;
mod reducer;
mod state;

pub use intent::HapticsIntent;
pub use reducer::{HapticsEvent, HapticsReducer};
pub use state::{HapticType, HapticsState};
