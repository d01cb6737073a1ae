//! Background-completion detector.
//!
//! Persists, across host suspension, whether the countdown deadline
//! passed while the app could not run. The flag is written by the
//! notice expiry mechanism and consumed by the coordinator through a
//! single atomic check-and-clear; a plain read is deliberately not part
//! of the surface, so the at-most-once contract cannot be bypassed.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::warn;

pub trait BackgroundCompletionDetector: Send + Sync {
    /// Bound to the timer entering Running.
    fn start_session(&self);

    /// Bound to the timer leaving Running (cancel or completion).
    fn end_session(&self);

    /// Record that the deadline passed while the app could not run.
    /// Ignored outside an active session, so a late expiry after the
    /// timer already finished in the foreground cannot raise the flag.
    fn record_background_completion(&self);

    /// Atomically consume the flag. Two consecutive calls without an
    /// intervening record return `true` then `false`.
    fn check_and_clear(&self) -> bool;
}

/// Purely in-memory detector, for tests and headless hosts.
#[derive(Default)]
pub struct InMemoryCompletionFlag {
    session_active: AtomicBool,
    completed: AtomicBool,
}

impl BackgroundCompletionDetector for InMemoryCompletionFlag {
    fn start_session(&self) {
        self.session_active.store(true, Ordering::SeqCst);
    }

    fn end_session(&self) {
        self.session_active.store(false, Ordering::SeqCst);
    }

    fn record_background_completion(&self) {
        if self.session_active.swap(false, Ordering::SeqCst) {
            self.completed.store(true, Ordering::SeqCst);
        }
    }

    fn check_and_clear(&self) -> bool {
        self.completed.swap(false, Ordering::SeqCst)
    }
}

/// Detector whose flag survives process restarts as a marker file.
///
/// Check-and-clear maps onto `remove_file`: whichever caller removes the
/// marker observes `true`, every other caller observes `false`.
pub struct FileCompletionFlag {
    path: PathBuf,
    session_active: AtomicBool,
}

impl FileCompletionFlag {
    pub fn at(path: PathBuf) -> Self {
        Self {
            path,
            session_active: AtomicBool::new(false),
        }
    }

    /// Marker under the user config directory, next to the preferences.
    pub fn at_default_location() -> Self {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::at(config_dir.join("hushcue").join("completed-in-background"))
    }
}

impl BackgroundCompletionDetector for FileCompletionFlag {
    fn start_session(&self) {
        self.session_active.store(true, Ordering::SeqCst);
    }

    fn end_session(&self) {
        self.session_active.store(false, Ordering::SeqCst);
    }

    fn record_background_completion(&self) {
        if !self.session_active.swap(false, Ordering::SeqCst) {
            return;
        }
        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!(?err, "failed to prepare background-completion marker dir");
                return;
            }
        }
        if let Err(err) = fs::write(&self.path, b"1") {
            warn!(?err, "failed to write background-completion marker");
        }
    }

    fn check_and_clear(&self) -> bool {
        match fs::remove_file(&self.path) {
            Ok(()) => true,
            Err(err) if err.kind() == ErrorKind::NotFound => false,
            Err(err) => {
                warn!(?err, "failed to clear background-completion marker");
                false
            }
        }
    }
}
