//! Property-based tests for the auto-lock engine.
//!
//! These tests use proptest to verify the decision rule holds across
//! many randomly generated speed sequences and clock advances.

use autolock::clock::ManualClock;
use autolock::engine::{AutoLockEngine, LockPhase};
use proptest::prelude::*;

prop_compose! {
    fn slow_speed()(speed in -200.0f32..=20.0) -> f32 {
        speed
    }
}

prop_compose! {
    fn fast_speed()(speed in 20.001f32..400.0) -> f32 {
        speed
    }
}

proptest! {
    #[test]
    fn slow_sample_always_disarms(
        warmup in prop::collection::vec((0u32..20_000, -50.0f32..100.0), 0..10),
        speed in slow_speed(),
    ) {
        let clock = ManualClock::new(0);
        let mut engine = AutoLockEngine::new(&clock);

        for (advance, s) in warmup {
            clock.advance(advance);
            engine.sample(s);
        }

        prop_assert!(!engine.sample(speed));
        prop_assert_eq!(engine.phase(), LockPhase::Disarmed);
        prop_assert_eq!(engine.armed_since(), None);
    }

    #[test]
    fn fast_run_locks_iff_elapsed_exceeds_delay(
        start in 0u32..1_000_000,
        steps in prop::collection::vec((0u32..2_000, fast_speed()), 1..30),
    ) {
        let clock = ManualClock::new(start);
        let mut engine = AutoLockEngine::new(&clock);

        prop_assert!(!engine.sample(30.0));

        let mut elapsed = 0u32;
        for (advance, speed) in steps {
            clock.advance(advance);
            elapsed += advance;
            prop_assert_eq!(engine.sample(speed), elapsed > 5_000);
        }
    }

    #[test]
    fn due_stays_due_while_fast(
        extra in prop::collection::vec((0u32..10_000, fast_speed()), 1..20),
    ) {
        let clock = ManualClock::new(0);
        let mut engine = AutoLockEngine::new(&clock);

        engine.sample(25.0);
        clock.set(5_001);
        prop_assert!(engine.sample(25.0));

        for (advance, speed) in extra {
            clock.advance(advance);
            prop_assert!(engine.sample(speed));
        }
    }

    #[test]
    fn rearm_uses_time_of_new_fast_sample(
        first in 0u32..10_000,
        gap in 1u32..10_000,
        slow in slow_speed(),
        fast in fast_speed(),
    ) {
        let clock = ManualClock::new(first);
        let mut engine = AutoLockEngine::new(&clock);

        engine.sample(fast);
        clock.advance(gap);
        engine.sample(slow);
        clock.advance(gap);
        prop_assert!(!engine.sample(fast));
        prop_assert_eq!(engine.armed_since(), Some(first + 2 * gap));
    }

    #[test]
    fn sample_is_deterministic_for_identical_inputs(
        script in prop::collection::vec((0u32..3_000, -50.0f32..100.0), 1..25),
    ) {
        let clock_a = ManualClock::new(0);
        let clock_b = ManualClock::new(0);
        let mut a = AutoLockEngine::new(&clock_a);
        let mut b = AutoLockEngine::new(&clock_b);

        for (advance, speed) in script {
            clock_a.advance(advance);
            clock_b.advance(advance);
            prop_assert_eq!(a.sample(speed), b.sample(speed));
            prop_assert_eq!(a.armed_since(), b.armed_since());
        }
    }
}
