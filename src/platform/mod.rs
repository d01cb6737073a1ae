//! Injected platform collaborators.
//!
//! Everything here sits behind a trait so the runtime can be exercised
//! with fakes: wall clock, preference persistence, the background
//! completion detector, the notification bridge, and the haptic engine.

mod background;
mod clock;
mod haptics_engine;
mod notifications;
mod preferences;

pub use background::{
    BackgroundCompletionDetector, FileCompletionFlag, InMemoryCompletionFlag,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use haptics_engine::{EngineCommand, HapticEngine, LoggingHapticEngine, RecordingHapticEngine};
pub use notifications::{
    NoticeError, NoticeScheduler, NotificationBridge, TokioNoticeScheduler,
    TIMER_COMPLETED_CATEGORY,
};
pub use preferences::{InMemoryPreferences, PreferenceStore, StoreError, TomlPreferenceStore};
