//! Lock policy: the speed threshold and how long it must be exceeded.

use crate::engine::error::PolicyError;
use crate::Speed;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Speed above which the engine arms, in km/h.
pub const DEFAULT_SPEED_THRESHOLD: Speed = 20.0;

/// How long speed must stay above the threshold before locking, in ms.
pub const DEFAULT_LOCK_DELAY_MS: u32 = 5_000;

/// Decision parameters for an [`AutoLockEngine`](super::AutoLockEngine).
///
/// A sample arms the engine when `speed > speed_threshold` (strict), and the
/// engine reports a lock once `elapsed > lock_delay_ms` (strict).
///
/// # Example
///
/// ```rust
/// use autolock::engine::LockPolicy;
/// use std::time::Duration;
///
/// let policy = LockPolicy::builder()
///     .speed_threshold(15.0)
///     .lock_delay(Duration::from_secs(3))
///     .build()
///     .unwrap();
///
/// assert_eq!(policy.speed_threshold(), 15.0);
/// assert_eq!(policy.lock_delay_ms(), 3_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockPolicy {
    pub(crate) speed_threshold: Speed,
    pub(crate) lock_delay_ms: u32,
}

impl Default for LockPolicy {
    fn default() -> Self {
        Self {
            speed_threshold: DEFAULT_SPEED_THRESHOLD,
            lock_delay_ms: DEFAULT_LOCK_DELAY_MS,
        }
    }
}

impl LockPolicy {
    pub fn builder() -> LockPolicyBuilder {
        LockPolicyBuilder::new()
    }

    /// Parse a policy from JSON. Missing fields take their defaults.
    ///
    /// ```rust
    /// use autolock::engine::LockPolicy;
    ///
    /// let policy = LockPolicy::from_json(r#"{"lock_delay_ms": 2000}"#).unwrap();
    /// assert_eq!(policy.speed_threshold(), 20.0);
    /// assert_eq!(policy.lock_delay_ms(), 2_000);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let policy: Self =
            serde_json::from_str(json).map_err(|e| PolicyError::Parse(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn speed_threshold(&self) -> Speed {
        self.speed_threshold
    }

    pub fn lock_delay_ms(&self) -> u32 {
        self.lock_delay_ms
    }

    pub fn lock_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.lock_delay_ms))
    }

    /// Whether `speed` counts as over the threshold. NaN never does.
    pub fn exceeds_threshold(&self, speed: Speed) -> bool {
        speed > self.speed_threshold
    }

    /// Whether `elapsed` milliseconds is long enough to lock.
    pub fn is_due(&self, elapsed: u32) -> bool {
        elapsed > self.lock_delay_ms
    }

    fn validate(&self) -> Result<(), PolicyError> {
        if !self.speed_threshold.is_finite() {
            return Err(PolicyError::NonFiniteThreshold(self.speed_threshold));
        }
        Ok(())
    }
}

/// Builder for [`LockPolicy`]. Unset fields keep their defaults.
#[derive(Clone, Debug, Default)]
pub struct LockPolicyBuilder {
    policy: LockPolicy,
}

impl LockPolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the arming threshold in km/h
    pub fn speed_threshold(mut self, threshold: Speed) -> Self {
        self.policy.speed_threshold = threshold;
        self
    }

    /// Set the lock delay. Saturates at `u32::MAX` milliseconds.
    pub fn lock_delay(mut self, delay: Duration) -> Self {
        self.policy.lock_delay_ms = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        self
    }

    /// Build and validate the policy
    pub fn build(self) -> Result<LockPolicy, PolicyError> {
        self.policy.validate()?;
        Ok(self.policy)
    }
}
