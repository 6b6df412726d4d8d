//! Baseline: the same delays one after another on the calling thread.

use std::thread;
use std::time::Instant;

use tracing::{debug, trace};

use crate::config::LaunchConfig;
use crate::report::Report;

const LABEL: &str = "Sequential";

/// Sleeps `config.delay()` once per configured worker, without any
/// concurrency.
pub fn measure(config: &LaunchConfig) -> Report {
    let count = config.workers();
    debug!(tasks = count, delay = ?config.delay(), "running sequentially");

    let start = Instant::now();
    for id in 0..count {
        thread::sleep(config.delay());
        trace!(task = id, "delay finished");
    }

    Report::new(LABEL, start.elapsed(), count, Vec::new())
}

/// Runs two one-second delays back to back and prints the elapsed time.
pub fn run() {
    let report = measure(&LaunchConfig::baseline());
    println!("{}", report);
}
