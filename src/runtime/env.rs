//! Injected collaborator set handed to the effect executor.

use std::sync::Arc;

use crate::platform::{
    BackgroundCompletionDetector, Clock, FileCompletionFlag, HapticEngine, LoggingHapticEngine,
    NoticeScheduler, PreferenceStore, SystemClock, TokioNoticeScheduler, TomlPreferenceStore,
};

/// Collaborators the runtime needs to execute effects. Every field is a
/// trait object so tests can substitute fakes piecewise.
#[derive(Clone)]
pub struct AppEnv {
    pub clock: Arc<dyn Clock>,
    pub preferences: Arc<dyn PreferenceStore>,
    pub haptic_engine: Arc<dyn HapticEngine>,
    pub detector: Arc<dyn BackgroundCompletionDetector>,
    pub notices: Arc<dyn NoticeScheduler>,
}

impl AppEnv {
    /// Production wiring: system clock, file-backed persistence, and
    /// the tokio notice scheduler feeding the file-backed detector.
    pub fn live() -> Self {
        let detector: Arc<dyn BackgroundCompletionDetector> =
            Arc::new(FileCompletionFlag::at_default_location());
        Self {
            clock: Arc::new(SystemClock),
            preferences: Arc::new(TomlPreferenceStore::at_default_location()),
            haptic_engine: Arc::new(LoggingHapticEngine),
            notices: Arc::new(TokioNoticeScheduler::new(Arc::clone(&detector))),
            detector,
        }
    }
}
