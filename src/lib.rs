//! HushCue: a silent countdown timer core.
//!
//! The crate implements the state-management layer of a wearable
//! countdown timer: pick a duration or a target time, count down across
//! host suspension, and signal completion with haptic feedback and a
//! screen transition, even when the deadline passed while the process
//! could not run.
//!
//! All state lives behind a single serialized intent stream
//! ([`runtime::Store`]); domain slices ([`timer`], [`haptics`],
//! [`settings`]) are pure reducers composed by the root coordinator
//! ([`app::AppReducer`]), and everything side-effecting sits behind the
//! injected collaborators in [`platform`].

pub mod app;
pub mod haptics;
pub mod mvi;
pub mod platform;
pub mod runtime;
pub mod settings;
pub mod timer;
