//! Aggregate application state.

use crate::haptics::HapticsState;
use crate::mvi::ModelState;
use crate::settings::SettingsState;
use crate::timer::TimerState;

use super::navigation::Destination;

/// Root state composing the domain slices plus the navigation stack.
///
/// Created once at process start with defaults and destroyed with the
/// process; there is no explicit teardown.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// Pushed destinations, root screen excluded. Bound to the host's
    /// navigation surface, which may shrink it without a pop intent.
    pub navigation_path: Vec<Destination>,
    /// Whether the countdown screen is the one currently displayed.
    /// Derived from the path at every mutation site so lifecycle logic
    /// never inspects the stack shape directly.
    pub countdown_visible: bool,
    pub timer: TimerState,
    pub haptics: HapticsState,
    pub settings: SettingsState,
}

impl ModelState for AppState {}

impl AppState {
    /// Recompute `countdown_visible`. Must be called after every
    /// navigation-path mutation.
    pub(crate) fn sync_countdown_visibility(&mut self) {
        self.countdown_visible = self.navigation_path.last() == Some(&Destination::Countdown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_empty_path() {
        let state = AppState::default();
        assert!(state.navigation_path.is_empty());
        assert!(!state.countdown_visible);
        assert!(!state.settings.is_loaded);
        assert!(!state.haptics.is_active);
    }

    #[test]
    fn visibility_tracks_last_path_entry() {
        let mut state = AppState::default();
        state.navigation_path.push(Destination::Countdown);
        state.sync_countdown_visibility();
        assert!(state.countdown_visible);

        state.navigation_path.push(Destination::Completion);
        state.sync_countdown_visibility();
        assert!(!state.countdown_visible);
    }
}
