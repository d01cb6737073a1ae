//! The store: owned state plus the single-writer intent loop.

use std::mem;
use std::time::Duration as StdDuration;

use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::warn;

use crate::app::{AppIntent, AppReducer, AppState, Effect};
use crate::haptics::HapticType;
use crate::mvi::Reducer;
use crate::settings::SettingsIntent;
use crate::timer::TimerIntent;

use super::env::AppEnv;

/// Owns the aggregate state and processes intents strictly in arrival
/// order. Effects emitted by a reduction run immediately after it;
/// their follow-up intents are appended to the end of the stream.
pub struct Store {
    state: AppState,
    env: AppEnv,
    tx: UnboundedSender<AppIntent>,
    rx: mpsc::UnboundedReceiver<AppIntent>,
    /// The one pending tick task. Replacing or aborting this slot is
    /// what makes the tick effect cancellable and keyed.
    tick_task: Option<JoinHandle<()>>,
}

impl Store {
    pub fn new(env: AppEnv) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            env,
            tx,
            rx,
            tick_task: None,
        }
    }

    /// Sender half of the intent stream, for the UI binding layer and
    /// the notification bridge.
    pub fn intents(&self) -> UnboundedSender<AppIntent> {
        self.tx.clone()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn send(&self, intent: AppIntent) {
        let _ = self.tx.send(intent);
    }

    /// Process intents until the stream closes. Production entry point.
    pub async fn run(mut self) {
        while let Some(intent) = self.rx.recv().await {
            self.process(intent);
        }
        self.abort_tick_task();
    }

    /// Process everything currently queued, then return once the stream
    /// is quiescent. Lets cooperative hosts and tests interleave
    /// dispatching with state inspection.
    pub async fn drain(&mut self) {
        loop {
            // Give spawned effect tasks a chance to enqueue follow-ups
            for _ in 0..4 {
                tokio::task::yield_now().await;
            }
            match self.rx.try_recv() {
                Ok(intent) => self.process(intent),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    fn process(&mut self, intent: AppIntent) {
        let now = self.env.clock.now();
        let (state, effects) = AppReducer::reduce(mem::take(&mut self.state), intent, now);
        self.state = state;
        for effect in effects {
            self.execute(effect);
        }
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::Dispatch(intent) => {
                let _ = self.tx.send(intent);
            }

            Effect::LoadSettings => {
                let preferences = self.env.preferences.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let haptic_type = preferences.haptic_type().unwrap_or_else(|err| {
                        warn!(%err, "falling back to default haptic type");
                        HapticType::default()
                    });
                    let _ = tx.send(AppIntent::Settings(SettingsIntent::SettingsLoaded(
                        haptic_type,
                    )));
                });
            }

            Effect::PersistHapticType(haptic_type) => {
                let preferences = self.env.preferences.clone();
                tokio::spawn(async move {
                    if let Err(err) = preferences.set_haptic_type(haptic_type) {
                        warn!(%err, "failed to persist haptic type");
                    }
                });
            }

            Effect::StartTickLoop => {
                self.abort_tick_task();
                let tx = self.tx.clone();
                self.tick_task = Some(tokio::spawn(async move {
                    let mut ticker = tokio::time::interval(StdDuration::from_secs(1));
                    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                    // An interval fires immediately; the countdown's
                    // first tick belongs one second in
                    ticker.tick().await;
                    loop {
                        ticker.tick().await;
                        if tx.send(AppIntent::Timer(TimerIntent::Tick)).is_err() {
                            break;
                        }
                    }
                }));
            }

            Effect::StopTickLoop => self.abort_tick_task(),

            Effect::StartHaptics(haptic_type) => self.env.haptic_engine.start(haptic_type),
            Effect::StopHaptics => self.env.haptic_engine.stop(),

            Effect::StartRuntimeSession => self.env.detector.start_session(),
            Effect::EndRuntimeSession => self.env.detector.end_session(),

            Effect::ScheduleCompletionNotice(deadline) => {
                if let Err(err) = self.env.notices.schedule(deadline) {
                    // Degrades to foreground-only detection
                    warn!(%err, "could not schedule completion notice");
                }
            }
            Effect::CancelCompletionNotice => self.env.notices.cancel(),

            Effect::CheckBackgroundCompletion => {
                if self.env.detector.check_and_clear() {
                    let _ = self.tx.send(AppIntent::BackgroundCompletionDetected);
                }
            }
        }
    }

    fn abort_tick_task(&mut self) {
        if let Some(task) = self.tick_task.take() {
            task.abort();
        }
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        self.abort_tick_task();
    }
}
