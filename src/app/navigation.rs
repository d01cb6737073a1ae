//! Navigable screen identifiers.

/// Screens reachable from the root timer-start screen.
///
/// The navigation surface is a shallow stack: root plus at most one
/// pushed destination. `TimerStart` names the root itself and is never
/// pushed onto the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Settings,
    Countdown,
    Completion,
    TimerStart,
}
