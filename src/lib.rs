//! Autolock: a speed-triggered door lock decision engine
//!
//! The engine arms when speed rises above a threshold and reports that the
//! doors should lock once speed has stayed there longer than a lock delay.
//! It never reads a clock on its own: a [`TimeSource`] is handed in at
//! construction, so production code runs on the host clock while tests move
//! a [`ManualClock`] forward instantly.
//!
//! # Core Concepts
//!
//! - **TimeSource**: one-method capability returning milliseconds
//! - **AutoLockEngine**: the state machine, borrowing its time source
//! - **LockPolicy**: threshold and delay, 20 km/h and 5000 ms by default
//!
//! # Example
//!
//! ```rust
//! use autolock::{AutoLockEngine, ManualClock};
//!
//! let clock = ManualClock::new(0);
//! let mut engine = AutoLockEngine::new(&clock);
//!
//! assert!(!engine.sample(25.0)); // arms at 0
//! clock.set(4_999);
//! assert!(!engine.sample(25.0));
//! clock.set(5_001);
//! assert!(engine.sample(25.0)); // lock
//! ```

pub mod clock;
pub mod engine;

/// Vehicle speed in km/h. No range is enforced.
pub type Speed = f32;

// Re-export commonly used types
pub use clock::{ManualClock, MonotonicClock, SystemClock, TimeSource, Timestamp};
pub use engine::{AutoLockEngine, LockPhase, LockPolicy, PolicyError};
