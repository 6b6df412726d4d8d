use std::fmt;
use std::time::Duration;

/// Result of one measured run, printed as `<label> elapsed: <seconds> sec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    label: &'static str,
    elapsed: Duration,
    joined: usize,
    interrupted: Vec<usize>,
    cpus: usize,
}

impl Report {
    pub(crate) fn new(
        label: &'static str,
        elapsed: Duration,
        joined: usize,
        interrupted: Vec<usize>,
    ) -> Self {
        Self {
            label,
            elapsed,
            joined,
            interrupted,
            cpus: num_cpus::get(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in seconds, at millisecond resolution.
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_millis() as f64 / 1000.0
    }

    /// Number of units that were waited on.
    pub fn joined(&self) -> usize {
        self.joined
    }

    /// Ids of the workers whose delay was interrupted, in join order.
    pub fn interrupted(&self) -> &[usize] {
        &self.interrupted
    }

    /// Logical processors available during the run.
    pub fn cpus(&self) -> usize {
        self.cpus
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} elapsed: ", self.label)?;
        let seconds = self.seconds();
        if seconds.fract() == 0.0 {
            write!(f, "{:.1}", seconds)?;
        } else {
            write!(f, "{}", seconds)?;
        }
        f.write_str(" sec")
    }
}
