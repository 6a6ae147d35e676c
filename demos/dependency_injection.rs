//! Dependency Injection Demo
//!
//! This example wires the same auto-lock engine to two different clocks.
//!
//! Key concepts:
//! - The engine borrows a time source; it never builds one
//! - Production wiring injects the host clock
//! - Test wiring injects a manual clock and fast-forwards time
//!
//! Run with: cargo run --example dependency_injection
//! Set RUST_LOG=autolock=trace to see every sample.

use autolock::{AutoLockEngine, ManualClock, SystemClock, TimeSource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "autolock=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Dependency Injection Demo ===\n");

    println!("[1] Production context (host clock)");
    let host_clock = SystemClock::new();
    let mut production_car = AutoLockEngine::new(&host_clock);

    // A real clock would need five real seconds before this could lock.
    let locked = production_car.sample(25.0);
    println!("  Clock reads {} ms", host_clock.now());
    println!("  Engine armed: {}, locked: {}\n", production_car.is_armed(), locked);

    println!("[2] Testing context (manual clock)");
    let manual_clock = ManualClock::new(0);
    let mut test_car = AutoLockEngine::new(&manual_clock);

    test_car.sample(25.0);
    println!("  Armed at {:?} ms", test_car.armed_since());

    println!("  Fast-forwarding 6 seconds...");
    manual_clock.set(6_000);
    let locked = test_car.sample(25.0);

    if locked {
        println!("  SUCCESS: car locked using the manual clock ({})", test_car.phase());
    } else {
        println!("  FAILURE: lock did not engage ({})", test_car.phase());
    }

    println!("\n=== Demo Complete ===");
}
