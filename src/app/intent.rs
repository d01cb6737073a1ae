//! Intents for the application root.

use crate::haptics::HapticsIntent;
use crate::mvi::Intent;
use crate::settings::SettingsIntent;
use crate::timer::TimerIntent;

use super::navigation::Destination;

/// Host-process lifecycle phase, as reported by the scene layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenePhase {
    Active,
    Inactive,
    Background,
}

/// Intents that can be dispatched to the root coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppIntent {
    /// First appearance of the UI; triggers the settings load.
    OnAppear,

    /// Scene moved between foreground and background.
    ScenePhaseChanged(ScenePhase),

    /// The background detector's check-and-clear returned true. Emitted
    /// by the runtime, never by the UI.
    BackgroundCompletionDetected,

    /// The bound navigation surface replaced the path wholesale.
    PathChanged(Vec<Destination>),

    /// Push one destination onto the stack.
    PushScreen(Destination),

    /// The user navigated back. The binding layer has already removed
    /// the entry; this only runs the associated side effects.
    PopScreen,

    Timer(TimerIntent),
    Haptics(HapticsIntent),
    Settings(SettingsIntent),
}

impl Intent for AppIntent {}
