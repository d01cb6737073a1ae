//! Store runtime tests: the serialized loop, the cancellable tick task,
//! and collaborator wiring, all under paused tokio time with fakes.

mod common;

use std::sync::Arc;

use chrono::Duration;
use common::{noon, test_env, DeniedNoticeScheduler, FailingPreferences};
use hushcue::app::{AppIntent, Destination, ScenePhase};
use hushcue::haptics::HapticType;
use hushcue::platform::{BackgroundCompletionDetector, EngineCommand, PreferenceStore};
use hushcue::runtime::Store;
use hushcue::timer::{TimerIntent, TimerPhase};

#[tokio::test(start_paused = true)]
async fn one_minute_timer_completes_through_the_tick_task() {
    let fakes = test_env();
    let mut store = Store::new(fakes.env.clone());

    store.send(AppIntent::Timer(TimerIntent::MinutesSelected(1)));
    store.send(AppIntent::Timer(TimerIntent::Start));
    store.send(AppIntent::PushScreen(Destination::Countdown));
    store.drain().await;

    assert!(store.state().timer.is_running());
    assert_eq!(
        fakes.notices.scheduled_deadlines(),
        vec![noon() + Duration::minutes(1)]
    );

    // Let the deadline pass; the tick task wakes and the reducer
    // recomputes from the fixed clock
    fakes.clock.advance(Duration::seconds(60));
    tokio::time::advance(std::time::Duration::from_secs(60)).await;
    store.drain().await;

    assert_eq!(store.state().timer.phase, TimerPhase::Completed);
    assert_eq!(
        store.state().navigation_path,
        vec![Destination::Countdown, Destination::Completion]
    );
    assert!(store.state().haptics.is_active);
    assert_eq!(
        fakes.engine.commands(),
        vec![EngineCommand::Start(HapticType::Gentle)]
    );
    // Foreground completion cancels the pending notice
    assert!(fakes.notices.cancel_count() >= 1);
}

#[tokio::test(start_paused = true)]
async fn cancel_aborts_the_tick_task() {
    let fakes = test_env();
    let mut store = Store::new(fakes.env.clone());

    store.send(AppIntent::Timer(TimerIntent::Start));
    store.send(AppIntent::PushScreen(Destination::Countdown));
    store.drain().await;
    store.send(AppIntent::Timer(TimerIntent::CancelTimer));
    store.drain().await;

    assert_eq!(store.state().timer.phase, TimerPhase::Idle);
    assert!(store.state().timer.completion_date.is_none());
    assert!(store.state().navigation_path.is_empty());

    // Well past the old deadline: no tick may fire anymore
    fakes.clock.advance(Duration::minutes(5));
    tokio::time::advance(std::time::Duration::from_secs(300)).await;
    store.drain().await;

    assert_eq!(store.state().timer.phase, TimerPhase::Idle);
    assert!(fakes.engine.commands().is_empty());
}

#[tokio::test(start_paused = true)]
async fn restart_replaces_the_pending_tick_task() {
    let fakes = test_env();
    let mut store = Store::new(fakes.env.clone());

    store.send(AppIntent::Timer(TimerIntent::MinutesSelected(1)));
    store.send(AppIntent::Timer(TimerIntent::Start));
    store.drain().await;
    store.send(AppIntent::Timer(TimerIntent::CancelTimer));
    store.send(AppIntent::Timer(TimerIntent::MinutesSelected(2)));
    store.send(AppIntent::Timer(TimerIntent::Start));
    store.drain().await;

    // Only the fresh countdown's deadline matters now
    fakes.clock.advance(Duration::seconds(60));
    tokio::time::advance(std::time::Duration::from_secs(60)).await;
    store.drain().await;
    assert!(store.state().timer.is_running());
    assert_eq!(store.state().timer.remaining_seconds, 60);

    fakes.clock.advance(Duration::seconds(60));
    tokio::time::advance(std::time::Duration::from_secs(60)).await;
    store.drain().await;
    assert_eq!(store.state().timer.phase, TimerPhase::Completed);
}

#[tokio::test(start_paused = true)]
async fn background_completion_is_consumed_exactly_once() {
    let fakes = test_env();
    let mut store = Store::new(fakes.env.clone());

    store.send(AppIntent::Timer(TimerIntent::Start));
    store.drain().await;

    // The notice expiry mechanism records completion while suspended
    fakes.detector.record_background_completion();

    store.send(AppIntent::ScenePhaseChanged(ScenePhase::Active));
    store.drain().await;
    assert_eq!(store.state().timer.phase, TimerPhase::Completed);
    assert_eq!(store.state().navigation_path, vec![Destination::Completion]);
    assert!(!store.state().haptics.is_active);
    assert!(fakes.engine.commands().is_empty());

    // The tick task was torn down with the finish; letting the old
    // deadline pass must not start haptics or push a second screen
    fakes.clock.advance(Duration::minutes(2));
    tokio::time::advance(std::time::Duration::from_secs(120)).await;
    store.drain().await;
    assert_eq!(store.state().navigation_path, vec![Destination::Completion]);
    assert!(fakes.engine.commands().is_empty());

    // Dismissal from the completion screen resets everything
    store.send(AppIntent::Timer(TimerIntent::DismissCompletionView));
    store.drain().await;
    assert!(store.state().navigation_path.is_empty());
    assert_eq!(store.state().timer.phase, TimerPhase::Idle);

    // A second resume must not duplicate the completion screen
    store.send(AppIntent::ScenePhaseChanged(ScenePhase::Active));
    store.drain().await;
    assert!(store.state().navigation_path.is_empty());
}

#[tokio::test(start_paused = true)]
async fn settings_load_falls_back_when_the_store_is_unreadable() {
    let fakes = test_env();
    let mut env = fakes.env.clone();
    env.preferences = Arc::new(FailingPreferences);
    let mut store = Store::new(env);

    store.send(AppIntent::OnAppear);
    store.drain().await;

    assert!(store.state().settings.is_loaded);
    assert_eq!(
        store.state().settings.selected_haptic_type,
        HapticType::Gentle
    );
}

#[tokio::test(start_paused = true)]
async fn settings_load_propagates_the_stored_preference() {
    let fakes = test_env();
    fakes
        .preferences
        .set_haptic_type(HapticType::Pulse)
        .expect("in-memory store");
    let mut store = Store::new(fakes.env.clone());

    store.send(AppIntent::OnAppear);
    store.drain().await;

    assert!(store.state().settings.is_loaded);
    assert_eq!(
        store.state().settings.selected_haptic_type,
        HapticType::Pulse
    );
    assert_eq!(store.state().haptics.preferred_type, HapticType::Pulse);
}

#[tokio::test(start_paused = true)]
async fn denied_notifications_degrade_to_foreground_detection() {
    let fakes = test_env();
    let mut env = fakes.env.clone();
    env.notices = Arc::new(DeniedNoticeScheduler);
    let mut store = Store::new(env);

    store.send(AppIntent::Timer(TimerIntent::Start));
    store.drain().await;

    // Scheduling failed, the countdown itself is unaffected
    assert!(store.state().timer.is_running());

    fakes.clock.advance(Duration::seconds(60));
    tokio::time::advance(std::time::Duration::from_secs(60)).await;
    store.drain().await;
    assert_eq!(store.state().timer.phase, TimerPhase::Completed);
}
