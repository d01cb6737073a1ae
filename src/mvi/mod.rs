//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the state layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Events) ──→ Coordinator ──→ Effects
//!    ↑                                                         │
//!    └─────────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a domain slice
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//!   and announces what happened as typed domain events
//!
//! Reducers never touch collaborators; everything side-effecting is
//! scheduled by the coordinator from the emitted events and executed by
//! the runtime, which feeds results back as new intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ModelState;
