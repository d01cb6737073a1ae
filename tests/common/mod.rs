//! Shared test utilities and fake collaborators.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};
use hushcue::haptics::HapticType;
use hushcue::platform::{
    Clock, FixedClock, InMemoryCompletionFlag, InMemoryPreferences, NoticeError, NoticeScheduler,
    PreferenceStore, RecordingHapticEngine, StoreError,
};
use hushcue::runtime::AppEnv;
use parking_lot::Mutex;

/// Fixed reference instant used across the suites.
pub fn noon() -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
}

/// Notice scheduler that records every schedule/cancel call.
#[derive(Default)]
pub struct RecordingNoticeScheduler {
    scheduled: Mutex<Vec<DateTime<Local>>>,
    cancelled: AtomicUsize,
}

impl RecordingNoticeScheduler {
    pub fn scheduled_deadlines(&self) -> Vec<DateTime<Local>> {
        self.scheduled.lock().clone()
    }

    pub fn cancel_count(&self) -> usize {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl NoticeScheduler for RecordingNoticeScheduler {
    fn schedule(&self, deadline: DateTime<Local>) -> Result<(), NoticeError> {
        self.scheduled.lock().push(deadline);
        Ok(())
    }

    fn cancel(&self) {
        self.cancelled.fetch_add(1, Ordering::SeqCst);
    }
}

/// Scheduler behaving as if notification permission was denied.
pub struct DeniedNoticeScheduler;

impl NoticeScheduler for DeniedNoticeScheduler {
    fn schedule(&self, _deadline: DateTime<Local>) -> Result<(), NoticeError> {
        Err(NoticeError::PermissionDenied)
    }

    fn cancel(&self) {}
}

/// Preference store whose reads and writes always fail.
pub struct FailingPreferences;

impl PreferenceStore for FailingPreferences {
    fn haptic_type(&self) -> Result<HapticType, StoreError> {
        Err(read_failure())
    }

    fn set_haptic_type(&self, _haptic_type: HapticType) -> Result<(), StoreError> {
        Err(read_failure())
    }

    fn is_first_launch(&self) -> Result<bool, StoreError> {
        Err(read_failure())
    }

    fn mark_launched(&self) -> Result<(), StoreError> {
        Err(read_failure())
    }
}

fn read_failure() -> StoreError {
    StoreError::Read {
        path: PathBuf::from("/nonexistent/preferences.toml"),
        source: std::io::Error::new(std::io::ErrorKind::Other, "store unavailable"),
    }
}

/// Fully faked environment pinned to [`noon`].
pub struct TestEnv {
    pub env: AppEnv,
    pub clock: Arc<FixedClock>,
    pub engine: Arc<RecordingHapticEngine>,
    pub detector: Arc<InMemoryCompletionFlag>,
    pub notices: Arc<RecordingNoticeScheduler>,
    pub preferences: Arc<InMemoryPreferences>,
}

pub fn test_env() -> TestEnv {
    let clock = Arc::new(FixedClock::new(noon()));
    let engine = Arc::new(RecordingHapticEngine::default());
    let detector = Arc::new(InMemoryCompletionFlag::default());
    let notices = Arc::new(RecordingNoticeScheduler::default());
    let preferences = Arc::new(InMemoryPreferences::default());
    let env = AppEnv {
        clock: clock.clone(),
        preferences: preferences.clone(),
        haptic_engine: engine.clone(),
        detector: detector.clone(),
        notices: notices.clone(),
    };
    TestEnv {
        env,
        clock,
        engine,
        detector,
        notices,
        preferences,
    }
}
