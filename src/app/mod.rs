//! Application root: aggregate state, navigation, and the coordinator
//! reducer that wires the domain slices together.

mod effect;
mod intent;
mod navigation;
mod reducer;
mod state;

pub use effect::Effect;
pub use intent::{AppIntent, ScenePhase};
pub use navigation::Destination;
pub use reducer::AppReducer;
pub use state::AppState;
