//! Programmable clock for deterministic tests.

use super::{TimeSource, Timestamp};
use std::sync::atomic::{AtomicU32, Ordering};

/// Clock that only moves when told to.
///
/// `now` returns exactly the last value passed to [`set`](Self::set) (or
/// reached through [`advance`](Self::advance)). Setters take `&self`, so a
/// test can keep driving the clock while engines hold borrows of it, and
/// several engines can share one instance.
///
/// # Example
///
/// ```rust
/// use autolock::clock::ManualClock;
/// use autolock::engine::AutoLockEngine;
///
/// let clock = ManualClock::new(0);
/// let mut engine = AutoLockEngine::new(&clock);
///
/// assert!(!engine.sample(25.0));
/// clock.set(6_000);
/// assert!(engine.sample(25.0));
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    current: AtomicU32,
}

impl ManualClock {
    /// Create a clock frozen at `start`.
    pub fn new(start: Timestamp) -> Self {
        Self {
            current: AtomicU32::new(start),
        }
    }

    /// Jump to an absolute time. Going backwards is allowed.
    pub fn set(&self, time: Timestamp) {
        self.current.store(time, Ordering::Relaxed);
    }

    /// Move forward by `millis`, wrapping at the timestamp width.
    pub fn advance(&self, millis: u32) {
        // fetch_add wraps on overflow
        self.current.fetch_add(millis, Ordering::Relaxed);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Timestamp {
        self.current.load(Ordering::Relaxed)
    }
}
