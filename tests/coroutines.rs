#![cfg(feature = "coroutines")]

use std::time::{Duration, Instant};

use thread_elapsed::block_on;
use thread_elapsed::coroutines;
use thread_elapsed::timer::sleep;
use thread_elapsed::LaunchConfig;

#[test]
fn thousand_sleeps_on_one_thread() {
    let report = coroutines::measure(&LaunchConfig::default());

    assert_eq!(report.joined(), 1000);
    assert!(report.seconds() >= 1.0);
    assert!(report.elapsed() < Duration::from_secs(100));
    assert!(report.to_string().starts_with("Coroutines elapsed: "));
}

#[test]
fn sleeps_overlap() {
    let dur = Duration::from_millis(100);
    let start = Instant::now();
    block_on(async {
        futures::join!(sleep(dur), sleep(dur), sleep(dur));
    });
    let elapsed = start.elapsed();
    assert!(elapsed >= dur);
    assert!(elapsed < dur * 3);
}

#[test]
fn later_sleep_after_earlier() {
    let start = Instant::now();
    block_on(async {
        sleep(Duration::from_millis(50)).await;
        sleep(Duration::from_millis(50)).await;
    });
    assert!(start.elapsed() >= Duration::from_millis(100));
}

#[test]
fn zero_duration() {
    block_on(sleep(Duration::ZERO));
}
