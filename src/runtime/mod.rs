//! Serialized runtime: one action stream, one reducer, spawned effects.
//!
//! Exactly one intent is reduced at a time; reduction is synchronous
//! and non-suspending. Anything that suspends (preference I/O, the tick
//! loop, the completion notice) runs as a spawned task and reports back
//! by sending a new intent to the end of the same stream, so there is
//! never a second writer.

mod env;
mod store;

pub use env::AppEnv;
pub use store::Store;
