use std::time::Duration;

use thread_elapsed::config::{BASELINE_TASKS, DEFAULT_POOL_SIZE};
use thread_elapsed::{pool, sequential, LaunchConfig};

#[test]
fn sequential_adds_up_delays() {
    let report = sequential::measure(&LaunchConfig::baseline());

    assert_eq!(report.joined(), BASELINE_TASKS);
    assert!(report.seconds() >= 2.0);
    assert!(report.to_string().starts_with("Sequential elapsed: "));
}

#[test]
fn pool_overlaps_up_to_its_size() {
    let report = pool::measure(&LaunchConfig::baseline(), DEFAULT_POOL_SIZE).unwrap();

    assert_eq!(report.joined(), BASELINE_TASKS);
    assert!(report.seconds() >= 1.0);
    assert!(report.elapsed() < Duration::from_secs(2));
    assert!(report.to_string().starts_with("Pooled elapsed: "));
}

#[test]
fn small_pool_runs_in_waves() {
    let delay = Duration::from_millis(100);
    let config = LaunchConfig::new(6, delay).unwrap();
    let report = pool::measure(&config, 2).unwrap();

    assert_eq!(report.joined(), 6);
    // three waves of two
    assert!(report.elapsed() >= delay * 3);
}
