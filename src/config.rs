use std::time::Duration;

use crate::error::LaunchError;

pub const DEFAULT_WORKERS: usize = 1000;

pub const DEFAULT_DELAY_MS: u64 = 1000;

pub const MIN_WORKERS: usize = 1;

pub const MAX_WORKERS: usize = 10000;

/// Tasks run by the sequential and pooled comparisons.
pub const BASELINE_TASKS: usize = 2;

pub const DEFAULT_POOL_SIZE: usize = 2;

/// How many workers a launch starts and how long each of them sleeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchConfig {
    workers: usize,
    delay: Duration,
}

impl LaunchConfig {
    pub fn new(workers: usize, delay: Duration) -> Result<Self, LaunchError> {
        if !(MIN_WORKERS..=MAX_WORKERS).contains(&workers) {
            return Err(LaunchError::Config(format!(
                "worker count {} is outside {}..={}",
                workers, MIN_WORKERS, MAX_WORKERS
            )));
        }
        Ok(Self { workers, delay })
    }

    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// `BASELINE_TASKS` delays of the default length.
    pub fn baseline() -> Self {
        Self {
            workers: BASELINE_TASKS,
            ..Self::default()
        }
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LaunchConfig::default();
        assert_eq!(config.workers(), 1000);
        assert_eq!(config.delay(), Duration::from_secs(1));
    }

    #[test]
    fn baseline() {
        let config = LaunchConfig::baseline();
        assert_eq!(config.workers(), BASELINE_TASKS);
        assert_eq!(config.delay(), LaunchConfig::default().delay());
    }

    #[test]
    fn bounds() {
        assert!(LaunchConfig::new(0, Duration::ZERO).is_err());
        assert!(LaunchConfig::new(MAX_WORKERS + 1, Duration::ZERO).is_err());
        assert!(LaunchConfig::new(MIN_WORKERS, Duration::ZERO).is_ok());
        assert!(LaunchConfig::new(MAX_WORKERS, Duration::ZERO).is_ok());
    }
}
