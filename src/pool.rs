//! The same delays handed to a fixed number of threads.
//!
//! Delays are queued up front and every pool thread pops until the queue is
//! empty, so at most `pool_size` delays overlap.

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering::*;
use std::thread;
use std::time::{Duration, Instant};

use concurrent_queue::ConcurrentQueue;
use tracing::{debug, trace};

use crate::config::{LaunchConfig, DEFAULT_POOL_SIZE, MAX_WORKERS, MIN_WORKERS};
use crate::error::LaunchError;
use crate::report::Report;

const LABEL: &str = "Pooled";

/// Runs `config.workers()` delays on `pool_size` threads and waits for all of
/// them.
pub fn measure(config: &LaunchConfig, pool_size: usize) -> Result<Report, LaunchError> {
    if !(MIN_WORKERS..=MAX_WORKERS).contains(&pool_size) {
        return Err(LaunchError::Config(format!(
            "pool size {} is outside {}..={}",
            pool_size, MIN_WORKERS, MAX_WORKERS
        )));
    }

    let count = config.workers();
    let delay = config.delay();
    debug!(tasks = count, pool_size, ?delay, "launching pool");

    let start = Instant::now();

    let queue = ConcurrentQueue::bounded(count);
    for id in 0..count {
        // Capacity is exactly `count`.
        let _ = queue.push(id);
    }
    queue.close();

    let done = AtomicUsize::new(0);

    thread::scope(|scope| {
        for ith in 0..pool_size.min(count) {
            let spawned = thread::Builder::new()
                .name(format!("pool-{}", ith))
                .spawn_scoped(scope, || drain(&queue, &done, delay));

            if let Err(source) = spawned {
                // Leave nothing for the threads already running.
                while queue.pop().is_ok() {}
                return Err(LaunchError::Spawn { id: ith, source });
            }
        }
        Ok(())
    })?;

    let joined = done.into_inner();
    let elapsed = start.elapsed();
    debug!(joined, ?elapsed, "pool drained");

    Ok(Report::new(LABEL, elapsed, joined, Vec::new()))
}

fn drain(queue: &ConcurrentQueue<usize>, done: &AtomicUsize, delay: Duration) {
    while let Ok(id) = queue.pop() {
        thread::sleep(delay);
        trace!(task = id, "delay finished");
        done.fetch_add(1, Relaxed);
    }
}

/// Runs two one-second delays on a pool of two threads and prints the
/// elapsed time.
pub fn run() -> Result<(), LaunchError> {
    let report = measure(&LaunchConfig::baseline(), DEFAULT_POOL_SIZE)?;
    println!("{}", report);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_size_bounds() {
        let config = LaunchConfig::new(1, Duration::ZERO).unwrap();
        assert!(matches!(measure(&config, 0), Err(LaunchError::Config(_))));
        assert!(measure(&config, MAX_WORKERS + 1).is_err());
    }

    #[test]
    fn pool_larger_than_tasks() {
        let config = LaunchConfig::new(3, Duration::from_millis(10)).unwrap();
        let report = measure(&config, 50).unwrap();
        assert_eq!(report.joined(), 3);
    }
}
