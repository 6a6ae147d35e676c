//! The auto-lock state machine.

use crate::clock::{elapsed_between, TimeSource, Timestamp};
use crate::engine::phase::LockPhase;
use crate::engine::policy::LockPolicy;
use crate::Speed;
use std::fmt;

/// Decides whether the vehicle should lock, given a stream of speed samples.
///
/// The engine borrows its [`TimeSource`]; it never creates or owns one. Wire a
/// real clock at the program's entry point and a [`ManualClock`] in tests.
///
/// The clock is read once per over-threshold sample and never for a sample at
/// or below the threshold. On the sample that arms the engine, elapsed is
/// measured from that same reading and is therefore zero.
///
/// A `true` result does not reset anything: every further over-threshold
/// sample keeps returning `true` until speed drops back to the threshold.
///
/// [`ManualClock`]: crate::clock::ManualClock
///
/// # Example
///
/// ```rust
/// use autolock::clock::ManualClock;
/// use autolock::engine::{AutoLockEngine, LockPhase};
///
/// let clock = ManualClock::new(0);
/// let mut engine = AutoLockEngine::new(&clock);
///
/// assert!(!engine.sample(25.0));
/// assert_eq!(engine.armed_since(), Some(0));
///
/// clock.set(5_000);
/// assert!(!engine.sample(25.0));
///
/// clock.set(5_001);
/// assert!(engine.sample(25.0));
/// assert_eq!(engine.phase(), LockPhase::Due);
///
/// assert!(!engine.sample(10.0));
/// assert_eq!(engine.phase(), LockPhase::Disarmed);
/// ```
pub struct AutoLockEngine<'a, C: TimeSource + ?Sized> {
    clock: &'a C,
    policy: LockPolicy,
    armed_since: Option<Timestamp>,
}

impl<'a, C: TimeSource + ?Sized> AutoLockEngine<'a, C> {
    /// Create a disarmed engine with the default policy.
    pub fn new(clock: &'a C) -> Self {
        Self::with_policy(clock, LockPolicy::default())
    }

    /// Create a disarmed engine with a custom policy.
    pub fn with_policy(clock: &'a C, policy: LockPolicy) -> Self {
        Self {
            clock,
            policy,
            armed_since: None,
        }
    }

    /// Feed one speed sample and return whether the lock should engage now.
    pub fn sample(&mut self, speed: Speed) -> bool {
        tracing::trace!(speed, armed_since = ?self.armed_since, "speed sample");

        if !self.policy.exceeds_threshold(speed) {
            if let Some(since) = self.armed_since.take() {
                tracing::debug!(speed, armed_since = since, "auto-lock disarmed");
            }
            return false;
        }

        let now = self.clock.now();
        let since = match self.armed_since {
            Some(since) => since,
            None => {
                tracing::debug!(speed, at = now, "auto-lock armed");
                self.armed_since = Some(now);
                now
            }
        };

        let elapsed = elapsed_between(since, now);
        let due = self.policy.is_due(elapsed);
        tracing::trace!(elapsed_ms = elapsed, due, "armed sample");
        due
    }

    /// When the current over-threshold interval began, if armed.
    pub fn armed_since(&self) -> Option<Timestamp> {
        self.armed_since
    }

    pub fn is_armed(&self) -> bool {
        self.armed_since.is_some()
    }

    /// Milliseconds since arming, read from the clock. `None` when disarmed.
    pub fn elapsed(&self) -> Option<u32> {
        self.armed_since
            .map(|since| elapsed_between(since, self.clock.now()))
    }

    /// Current phase, reading the clock when armed.
    pub fn phase(&self) -> LockPhase {
        match self.elapsed() {
            None => LockPhase::Disarmed,
            Some(elapsed) if self.policy.is_due(elapsed) => LockPhase::Due,
            Some(_) => LockPhase::Armed,
        }
    }

    pub fn policy(&self) -> &LockPolicy {
        &self.policy
    }
}

impl<C: TimeSource + ?Sized> fmt::Debug for AutoLockEngine<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoLockEngine")
            .field("policy", &self.policy)
            .field("armed_since", &self.armed_since)
            .finish_non_exhaustive()
    }
}
