//! State for the countdown timer.

use chrono::{DateTime, Days, Duration, Local, TimeZone};

use crate::mvi::ModelState;

/// How the completion deadline is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerMode {
    /// Count down a fixed number of minutes from now.
    #[default]
    AfterMinutes,
    /// Count down to the next calendar occurrence of an hour:minute.
    AtTime,
}

/// Countdown lifecycle state machine.
///
/// Tracks the single run cycle: no countdown armed → counting down →
/// deadline reached, completion screen pending dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerPhase {
    #[default]
    Idle,
    Running,
    Completed,
}

/// Timer slice of the application state.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerState {
    pub mode: TimerMode,
    /// Picker value for [`TimerMode::AfterMinutes`], 1..=59.
    pub selected_minutes: u32,
    /// Picker values for [`TimerMode::AtTime`], 0..=23 / 0..=59.
    pub selected_hour: u32,
    pub selected_minute: u32,
    pub phase: TimerPhase,
    pub remaining_seconds: u64,
    pub display_time: String,
    /// Deadline of the active countdown. Set on start, cleared on cancel
    /// or dismissal; survives completion so a resume after a background
    /// finish can still recognize that a countdown existed.
    pub completion_date: Option<DateTime<Local>>,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            mode: TimerMode::default(),
            selected_minutes: 1,
            selected_hour: 0,
            selected_minute: 0,
            phase: TimerPhase::default(),
            remaining_seconds: 0,
            display_time: format_remaining(0),
            completion_date: None,
        }
    }
}

impl ModelState for TimerState {}

impl TimerState {
    pub fn is_running(&self) -> bool {
        matches!(self.phase, TimerPhase::Running)
    }

    /// Deadline for a countdown started at `now` under the current mode.
    pub fn completion_from(&self, now: DateTime<Local>) -> DateTime<Local> {
        match self.mode {
            TimerMode::AfterMinutes => now + Duration::minutes(i64::from(self.selected_minutes)),
            TimerMode::AtTime => next_occurrence(now, self.selected_hour, self.selected_minute),
        }
    }

    /// Recompute `remaining_seconds` and `display_time` against `now`.
    /// No-op when no countdown deadline is set.
    pub fn refresh_display(&mut self, now: DateTime<Local>) {
        if let Some(completion) = self.completion_date {
            self.remaining_seconds = (completion - now).num_seconds().max(0) as u64;
            self.display_time = format_remaining(self.remaining_seconds);
        }
    }
}

/// Next local occurrence of `hour:minute` strictly after `now`.
///
/// A target equal to the current instant rolls forward a full day, so a
/// zero-length countdown can never be produced.
pub fn next_occurrence(now: DateTime<Local>, hour: u32, minute: u32) -> DateTime<Local> {
    for days_ahead in 0..=1 {
        let Some(date) = now.date_naive().checked_add_days(Days::new(days_ahead)) else {
            continue;
        };
        let Some(naive) = date.and_hms_opt(hour, minute, 0) else {
            continue;
        };
        // earliest() picks the first valid instant across DST transitions
        if let Some(candidate) = Local.from_local_datetime(&naive).earliest() {
            if candidate > now {
                return candidate;
            }
        }
    }
    now + Duration::days(1)
}

/// Render remaining seconds as `MM:SS`, or `H:MM:SS` from one hour up.
pub fn format_remaining(remaining_seconds: u64) -> String {
    let hours = remaining_seconds / 3600;
    let minutes = (remaining_seconds % 3600) / 60;
    let seconds = remaining_seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
