//! Observable phases of the auto-lock engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the engine currently sits in its arming cycle.
///
/// The machine starts in `Disarmed` and has no terminal phase: any sample at
/// or below the threshold returns it to `Disarmed`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum LockPhase {
    /// Not timing an over-threshold interval.
    Disarmed,
    /// Timing an over-threshold interval; the lock delay has not yet passed.
    Armed,
    /// Over threshold for longer than the lock delay. Samples return `true`.
    Due,
}

impl LockPhase {
    /// Name used in logs and display.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Disarmed => "Disarmed",
            Self::Armed => "Armed",
            Self::Due => "Due",
        }
    }

    /// `true` for `Armed` and `Due`.
    pub fn is_armed(&self) -> bool {
        !matches!(self, Self::Disarmed)
    }
}

impl fmt::Display for LockPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_name_returns_correct_value() {
        assert_eq!(LockPhase::Disarmed.name(), "Disarmed");
        assert_eq!(LockPhase::Armed.name(), "Armed");
        assert_eq!(LockPhase::Due.name(), "Due");
    }

    #[test]
    fn is_armed_excludes_only_disarmed() {
        assert!(!LockPhase::Disarmed.is_armed());
        assert!(LockPhase::Armed.is_armed());
        assert!(LockPhase::Due.is_armed());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(LockPhase::Due.to_string(), "Due");
    }

    #[test]
    fn phase_serializes_correctly() {
        let json = serde_json::to_string(&LockPhase::Armed).unwrap();
        assert_eq!(json, "\"Armed\"");

        let deserialized: LockPhase = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, LockPhase::Armed);
    }
}
