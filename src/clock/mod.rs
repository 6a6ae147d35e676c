//! Injectable time sources.
//!
//! Everything in the crate that needs the current time asks a [`TimeSource`]
//! for it instead of reading a clock directly. Production code wires in
//! [`SystemClock`] or [`MonotonicClock`]; tests wire in [`ManualClock`] (or a
//! plain closure) and move time forward without sleeping.
//!
//! # Timestamp width
//!
//! [`Timestamp`] is a 32-bit millisecond count, so a wall clock wraps roughly
//! every 49.7 days. Differences are taken with wrapping arithmetic: a reading
//! taken after the wrap still yields the true distance, while a clock that
//! runs backwards yields a very large distance.

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::{MonotonicClock, SystemClock};

/// Milliseconds since an arbitrary, non-decreasing epoch.
pub type Timestamp = u32;

/// A source of the current time in milliseconds.
///
/// `now` is total: implementations backed by a fallible clock must map the
/// failure to a fixed value rather than panic or return an error.
///
/// # Example
///
/// ```rust
/// use autolock::clock::{ManualClock, TimeSource};
///
/// let clock = ManualClock::new(1_000);
/// assert_eq!(clock.now(), 1_000);
///
/// clock.advance(500);
/// assert_eq!(clock.now(), 1_500);
/// ```
pub trait TimeSource {
    /// Current time in milliseconds.
    fn now(&self) -> Timestamp;
}

/// Closures act as stub clocks.
///
/// ```rust
/// use autolock::clock::TimeSource;
///
/// let stub = || 42u32;
/// assert_eq!(stub.now(), 42);
/// ```
impl<F> TimeSource for F
where
    F: Fn() -> Timestamp,
{
    fn now(&self) -> Timestamp {
        self()
    }
}

/// Milliseconds from `since` to `now`, wrapping at the timestamp width.
pub fn elapsed_between(since: Timestamp, now: Timestamp) -> u32 {
    now.wrapping_sub(since)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn closure_is_a_time_source() {
        let ticks = Cell::new(0u32);
        let clock = || {
            ticks.set(ticks.get() + 10);
            ticks.get()
        };

        assert_eq!(clock.now(), 10);
        assert_eq!(clock.now(), 20);
    }

    #[test]
    fn trait_objects_dispatch_to_implementor() {
        let manual = ManualClock::new(7);
        let by_ref: &dyn TimeSource = &manual;
        let boxed: Box<dyn TimeSource> = Box::new(ManualClock::new(9));

        assert_eq!(by_ref.now(), 7);
        assert_eq!(boxed.now(), 9);
    }

    #[test]
    fn elapsed_between_is_plain_difference_without_wrap() {
        assert_eq!(elapsed_between(1_000, 6_001), 5_001);
        assert_eq!(elapsed_between(0, 0), 0);
    }

    #[test]
    fn elapsed_between_crosses_epoch_wrap() {
        let armed = u32::MAX - 9;
        assert_eq!(elapsed_between(armed, 5), 15);
    }

    #[test]
    fn elapsed_between_backwards_clock_is_huge() {
        assert_eq!(elapsed_between(3_000, 2_000), u32::MAX - 999);
    }
}
