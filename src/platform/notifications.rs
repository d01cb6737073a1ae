//! Local-notification scheduling and the bridge back into the stream.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{DateTime, Local};
use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::app::AppIntent;
use crate::timer::TimerIntent;

use super::background::BackgroundCompletionDetector;

/// Category tag carried by timer-completion notifications. Responses
/// with any other category are ignored by the bridge.
pub const TIMER_COMPLETED_CATEGORY: &str = "timer-completed";

#[derive(Debug, Error)]
pub enum NoticeError {
    /// Notifications are not authorized. Non-fatal: background-detected
    /// completion degrades to foreground-only detection on next resume.
    #[error("notification permission denied")]
    PermissionDenied,
}

/// Schedules the one pending completion notice.
pub trait NoticeScheduler: Send + Sync {
    fn schedule(&self, deadline: DateTime<Local>) -> Result<(), NoticeError>;
    fn cancel(&self);
}

/// Tokio-backed scheduler that records a background completion on the
/// detector when the notice deadline passes without cancellation.
///
/// The task fires one second past the deadline so a live foreground
/// tick always completes and cancels the notice first.
pub struct TokioNoticeScheduler {
    detector: Arc<dyn BackgroundCompletionDetector>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl TokioNoticeScheduler {
    pub fn new(detector: Arc<dyn BackgroundCompletionDetector>) -> Self {
        Self {
            detector,
            task: Mutex::new(None),
        }
    }
}

impl NoticeScheduler for TokioNoticeScheduler {
    fn schedule(&self, deadline: DateTime<Local>) -> Result<(), NoticeError> {
        self.cancel();

        let delay = (deadline - Local::now())
            .to_std()
            .unwrap_or(StdDuration::ZERO)
            + StdDuration::from_secs(1);
        let detector = Arc::clone(&self.detector);
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!("completion notice expired without cancellation");
            detector.record_background_completion();
        });
        *self.task.lock() = Some(task);
        Ok(())
    }

    fn cancel(&self) {
        if let Some(task) = self.task.lock().take() {
            task.abort();
        }
    }
}

impl Drop for TokioNoticeScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Turns a system notification response into intents on the stream.
pub struct NotificationBridge {
    intents: UnboundedSender<AppIntent>,
    scheduler: Arc<dyn NoticeScheduler>,
}

impl NotificationBridge {
    pub fn new(intents: UnboundedSender<AppIntent>, scheduler: Arc<dyn NoticeScheduler>) -> Self {
        Self { intents, scheduler }
    }

    /// Handle a notification response tagged with `category`.
    ///
    /// A timer-completion response cancels the pending notice and
    /// reports the finish into the stream; the coordinator's routing
    /// then navigates to the completion screen without haptics. Any
    /// other category is ignored.
    pub fn handle_response(&self, category: &str) {
        if category != TIMER_COMPLETED_CATEGORY {
            debug!(category, "ignoring notification response");
            return;
        }
        self.scheduler.cancel();
        if self
            .intents
            .send(AppIntent::Timer(TimerIntent::BackgroundTimerFinished))
            .is_err()
        {
            warn!("intent stream closed, dropping notification response");
        }
    }
}
