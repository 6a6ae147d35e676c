//! Speed-triggered auto-lock engine.
//!
//! The engine watches a stream of speed samples and reports when speed has
//! stayed above a threshold for longer than a lock delay:
//!
//! - **Disarmed**: not timing anything (initial phase)
//! - **Armed**: over threshold, delay not yet exceeded
//! - **Due**: over threshold for longer than the delay
//!
//! Any sample at or below the threshold returns the engine to `Disarmed`.
//! Time comes from an injected [`TimeSource`](crate::clock::TimeSource).

mod error;
mod machine;
mod phase;
mod policy;

pub use error::PolicyError;
pub use machine::AutoLockEngine;
pub use phase::LockPhase;
pub use policy::{
    LockPolicy, LockPolicyBuilder, DEFAULT_LOCK_DELAY_MS, DEFAULT_SPEED_THRESHOLD,
};
