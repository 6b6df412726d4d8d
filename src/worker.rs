use std::backtrace::Backtrace;
use std::panic;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{error, trace};

use crate::error::{LaunchError, WorkerError};
use crate::interrupt::{Interrupt, InterruptHandle, Interrupted};

/// What a worker reports back when joined.
pub(crate) type Outcome = Result<(), WorkerError>;

/// One OS thread performing a single blocking delay.
pub(crate) struct Worker {
    id: usize,
    handle: JoinHandle<Outcome>,
    interrupt: InterruptHandle,
}

impl Worker {
    /// Starts the worker thread right away.
    pub(crate) fn spawn(id: usize, delay: Duration) -> Result<Self, LaunchError> {
        let interrupt = Interrupt::new();

        let handle = thread::Builder::new()
            .name(format!("worker-{}", id))
            .spawn({
                let interrupt = interrupt.clone();
                move || sleep(id, &interrupt, delay)
            })
            .map_err(|source| LaunchError::Spawn { id, source })?;

        let interrupt = InterruptHandle::new(interrupt, handle.thread().clone());

        Ok(Self {
            id,
            handle,
            interrupt,
        })
    }

    #[inline]
    pub(crate) fn id(&self) -> usize {
        self.id
    }

    #[inline]
    pub(crate) fn interrupt_handle(&self) -> &InterruptHandle {
        &self.interrupt
    }

    /// Blocks until the worker thread has finished.
    ///
    /// A panic on the worker thread is resumed on the caller.
    pub(crate) fn join(self) -> Outcome {
        match self.handle.join() {
            Ok(outcome) => outcome,
            Err(payload) => panic::resume_unwind(payload),
        }
    }
}

/// Body of a worker thread. An interrupted delay is logged and handed back,
/// never raised.
fn sleep(id: usize, interrupt: &Interrupt, delay: Duration) -> Outcome {
    match interrupt.sleep(delay) {
        Ok(()) => {
            trace!(worker = id, "delay finished");
            Ok(())
        }
        Err(Interrupted) => {
            let err = WorkerError::Interrupted { id };
            error!(worker = id, backtrace = %Backtrace::force_capture(), "{}", err);
            Err(err)
        }
    }
}
