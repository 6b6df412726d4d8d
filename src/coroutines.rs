//! The same delays as the thread launcher, run as futures on one thread.

use std::time::Instant;

use futures_util::future::join_all;
use tracing::debug;

use crate::block_on_counted;
use crate::config::LaunchConfig;
use crate::report::Report;
use crate::timer::Sleep;

const LABEL: &str = "Coroutines";

/// Awaits `config.workers()` concurrent sleeps of `config.delay()`.
pub fn measure(config: &LaunchConfig) -> Report {
    let count = config.workers();
    debug!(tasks = count, delay = ?config.delay(), "launching");

    let start = Instant::now();
    let sleeps: Vec<Sleep> = (0..count).map(|_| Sleep::new(config.delay())).collect();
    let (done, polls) = block_on_counted(join_all(sleeps));
    let joined = done.len();
    let elapsed = start.elapsed();

    debug!(joined, polls, ?elapsed, "all tasks joined");
    Report::new(LABEL, elapsed, joined, Vec::new())
}

/// Runs 1000 one-second sleeps as futures and prints the elapsed time.
pub fn run() {
    let report = measure(&LaunchConfig::default());
    println!("{}", report);
}
