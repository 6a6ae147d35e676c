//! Time sources backed by the host clock.

use super::{TimeSource, Timestamp};
use chrono::Utc;
use std::time::Instant;

/// Wall-clock milliseconds since the Unix epoch, truncated to 32 bits.
///
/// Every call is a real clock read, so tests must not rely on its value.
/// Readings before the epoch map to `0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        let millis = Utc::now().timestamp_millis();
        if millis < 0 {
            return 0;
        }
        // Keep the low 32 bits; the counter wraps about every 49.7 days.
        (millis as u64 & u64::from(u32::MAX)) as Timestamp
    }
}

/// Milliseconds elapsed since this clock was created.
///
/// Unaffected by wall-clock adjustments. Starts at `0` and wraps after
/// about 49.7 days of uptime.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicClock {
    fn now(&self) -> Timestamp {
        let millis = self.origin.elapsed().as_millis();
        (millis & u128::from(u32::MAX)) as Timestamp
    }
}
