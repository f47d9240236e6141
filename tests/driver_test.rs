//! Tests for the driver loop and its stop conditions.

use std::sync::atomic::AtomicBool;
use std::time::{Duration, Instant};

use triad_bandwidth::{Driver, RunMode, StopReason, TriadArrays, TriadKernel, shutdown};

fn initialized(len: usize) -> TriadArrays {
    let mut arrays = TriadArrays::new(len);
    arrays.initialize();
    arrays
}

#[test]
fn test_iterations_run_exact_count() {
    let mut arrays = initialized(64);
    let driver = Driver::new(TriadKernel::detect(), RunMode::Iterations { count: 7 });
    let outcome = driver
        .run(&mut arrays, &AtomicBool::new(false))
        .expect("Run should succeed");

    assert_eq!(outcome.passes, 7);
    assert_eq!(outcome.stop_reason, StopReason::IterationsReached);
    assert!(arrays.a().iter().all(|&v| v == 5.0));
}

#[test]
fn test_verified_run_succeeds() {
    let mut arrays = initialized(128);
    let driver = Driver::new(TriadKernel::detect(), RunMode::Iterations { count: 3 })
        .with_verification(true);
    let outcome = driver
        .run(&mut arrays, &AtomicBool::new(false))
        .expect("Verified run should succeed");

    assert_eq!(outcome.passes, 3);
}

#[test]
fn test_duration_stops_after_deadline() {
    let mut arrays = initialized(1024);
    let driver = Driver::new(TriadKernel::Volatile, RunMode::Duration { seconds: 0.05 });

    let start = Instant::now();
    let outcome = driver
        .run(&mut arrays, &AtomicBool::new(false))
        .expect("Run should succeed");

    assert!(start.elapsed() >= Duration::from_millis(50));
    assert_eq!(outcome.stop_reason, StopReason::DurationElapsed);
    assert!(outcome.passes > 0);
}

#[test]
fn test_stop_flag_set_before_run() {
    let mut arrays = initialized(16);
    let driver = Driver::new(TriadKernel::detect(), RunMode::Iterations { count: 100 });
    let outcome = driver
        .run(&mut arrays, &AtomicBool::new(true))
        .expect("Run should succeed");

    assert_eq!(outcome.passes, 0);
    assert_eq!(outcome.stop_reason, StopReason::ShutdownRequested);
    assert!(arrays.a().iter().all(|&v| v == 1.0));
}

#[test]
fn test_forever_stops_on_shutdown_request() {
    let mut arrays = initialized(1024);

    let stopper = std::thread::spawn(|| {
        std::thread::sleep(Duration::from_millis(20));
        shutdown::request();
    });

    let driver = Driver::new(TriadKernel::detect(), RunMode::Forever);
    let outcome = driver
        .run(&mut arrays, shutdown::flag())
        .expect("Run should succeed");
    stopper.join().expect("Stopper thread should not panic");

    assert_eq!(outcome.stop_reason, StopReason::ShutdownRequested);
    assert!(shutdown::is_requested());
}
