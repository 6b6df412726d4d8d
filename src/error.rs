use std::io;

use thiserror::Error;

/// Why a single worker did not finish its delay.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerError {
    #[error("worker {id} was interrupted while sleeping")]
    Interrupted { id: usize },
}

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("invalid launch config: {0}")]
    Config(String),
    #[error("failed to spawn worker {id}: {source}")]
    Spawn {
        id: usize,
        #[source]
        source: io::Error,
    },
}
