use std::time::Instant;

use tracing::{debug, warn};

use crate::config::LaunchConfig;
use crate::error::{LaunchError, WorkerError};
use crate::interrupt::InterruptHandle;
use crate::report::Report;
use crate::worker::Worker;

const LABEL: &str = "Threads";

/// Starts one OS thread per worker and measures how long they take together.
#[derive(Debug, Clone, Copy, Default)]
pub struct Launcher {
    config: LaunchConfig,
}

impl Launcher {
    pub fn new(config: LaunchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    /// Takes the start timestamp and spawns every worker.
    ///
    /// If a thread cannot be created, the workers spawned so far are
    /// interrupted and joined before the error is returned.
    pub fn launch(&self) -> Result<Launch, LaunchError> {
        let count = self.config.workers();
        let delay = self.config.delay();

        debug!(workers = count, ?delay, cpus = num_cpus::get(), "launching");

        let start = Instant::now();
        let mut workers = Vec::with_capacity(count);

        for id in 0..count {
            match Worker::spawn(id, delay) {
                Ok(worker) => workers.push(worker),
                Err(err) => {
                    warn!(spawned = workers.len(), "{}, stopping launched workers", err);
                    for worker in &workers {
                        worker.interrupt_handle().interrupt();
                    }
                    for worker in workers {
                        let _ = worker.join();
                    }
                    return Err(err);
                }
            }
        }

        Ok(Launch { start, workers })
    }

    /// Launches every worker and waits for all of them.
    pub fn run(&self) -> Result<Report, LaunchError> {
        Ok(self.launch()?.join())
    }
}

/// Workers that are running and the moment they were started.
pub struct Launch {
    start: Instant,
    workers: Vec<Worker>,
}

impl Launch {
    /// Number of workers started.
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Interrupts the worker with the given id. Returns `false` for an
    /// unknown id.
    pub fn interrupt(&self, id: usize) -> bool {
        match self.workers.get(id) {
            Some(worker) => {
                worker.interrupt_handle().interrupt();
                true
            }
            None => false,
        }
    }

    pub fn interrupt_all(&self) {
        for worker in &self.workers {
            worker.interrupt_handle().interrupt();
        }
    }

    /// Handles that can interrupt workers from other threads while
    /// [`Launch::join`] blocks. Indexed by worker id.
    pub fn interrupt_handles(&self) -> Vec<InterruptHandle> {
        self.workers
            .iter()
            .map(|worker| worker.interrupt_handle().clone())
            .collect()
    }

    /// Joins every worker in creation order. Interrupted workers are
    /// recorded in the report and otherwise treated as finished.
    pub fn join(self) -> Report {
        let mut joined = 0;
        let mut interrupted = Vec::new();

        for worker in self.workers {
            let id = worker.id();
            match worker.join() {
                Ok(()) => {}
                Err(WorkerError::Interrupted { .. }) => interrupted.push(id),
            }
            joined += 1;
        }

        let elapsed = self.start.elapsed();
        debug!(joined, interrupted = interrupted.len(), ?elapsed, "all workers joined");

        Report::new(LABEL, elapsed, joined, interrupted)
    }
}

/// Runs 1000 workers sleeping one second each and prints the elapsed time.
pub fn run() -> Result<(), LaunchError> {
    let report = Launcher::default().run()?;
    println!("{}", report);
    Ok(())
}
