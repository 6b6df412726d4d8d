//! Early wake-up for sleeping worker threads.
//!
//! A worker sleeps by parking its own thread until a deadline. Interrupting it
//! raises a flag and unparks the thread; the sleep observes the flag, clears it
//! and fails. A flag raised before the sleep starts fails the sleep at once.

use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering::*;
use std::sync::Arc;
use std::thread::{self, Thread};
use std::time::{Duration, Instant};

/// The sleep was cut short by an interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Interrupted;

/// Interrupt flag of one worker.
#[derive(Debug, Default)]
pub(crate) struct Interrupt {
    flag: AtomicBool,
}

impl Interrupt {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Clears the flag, returning whether it was set.
    #[inline]
    fn take(&self) -> bool {
        self.flag.swap(false, AcqRel)
    }

    #[inline]
    fn raise(&self) {
        self.flag.store(true, Release);
    }

    /// Blocks the current thread for `duration` unless interrupted.
    ///
    /// A duration past what `Instant` can represent sleeps until interrupted.
    /// Must be called from the thread the matching [`InterruptHandle`] unparks.
    pub(crate) fn sleep(&self, duration: Duration) -> Result<(), Interrupted> {
        let deadline = Instant::now().checked_add(duration);
        loop {
            if self.take() {
                return Err(Interrupted);
            }
            match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return Ok(());
                    }
                    thread::park_timeout(deadline - now);
                }
                None => thread::park(),
            }
        }
    }
}

/// Delivers interrupts to a single worker thread.
#[derive(Debug, Clone)]
pub struct InterruptHandle {
    interrupt: Arc<Interrupt>,
    thread: Thread,
}

impl InterruptHandle {
    pub(crate) fn new(interrupt: Arc<Interrupt>, thread: Thread) -> Self {
        Self { interrupt, thread }
    }

    /// Requests an early wake-up. Has no effect once the worker returned.
    pub fn interrupt(&self) {
        self.interrupt.raise();
        self.thread.unpark();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleeps_full_duration() {
        let dur = Duration::from_millis(50);
        let start = Instant::now();
        assert_eq!(Interrupt::new().sleep(dur), Ok(()));
        assert!(start.elapsed() >= dur);
    }

    #[test]
    fn raised_before_sleep() {
        let interrupt = Interrupt::new();
        interrupt.raise();
        let start = Instant::now();
        assert_eq!(interrupt.sleep(Duration::from_secs(10)), Err(Interrupted));
        assert!(start.elapsed() < Duration::from_secs(10));
        // the flag is consumed by the failed sleep
        assert_eq!(interrupt.sleep(Duration::ZERO), Ok(()));
    }

    #[test]
    fn wakes_sleeping_thread() {
        let interrupt = Interrupt::new();
        let sleeper = {
            let interrupt = interrupt.clone();
            thread::spawn(move || interrupt.sleep(Duration::from_secs(10)))
        };
        let handle = InterruptHandle::new(interrupt, sleeper.thread().clone());

        let start = Instant::now();
        thread::sleep(Duration::from_millis(20));
        handle.interrupt();

        assert_eq!(sleeper.join().unwrap(), Err(Interrupted));
        assert!(start.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn unrepresentable_deadline_waits_for_interrupt() {
        let interrupt = Interrupt::new();
        let sleeper = {
            let interrupt = interrupt.clone();
            thread::spawn(move || interrupt.sleep(Duration::MAX))
        };
        let handle = InterruptHandle::new(interrupt, sleeper.thread().clone());

        thread::sleep(Duration::from_millis(20));
        assert!(!sleeper.is_finished());
        handle.interrupt();

        assert_eq!(sleeper.join().unwrap(), Err(Interrupted));
    }
}
