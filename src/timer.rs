//! Non-blocking sleep backed by one shared timer thread.
//!
//! Every [`Sleep`] hands its deadline to the timer thread through a lock-free
//! queue. The timer thread keeps the pending deadlines in a min-heap and parks
//! until the earliest one, so a thousand sleeps cost one thread, not a thousand.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use std::task::{Context, Poll, Waker};
use std::thread::{self, Thread};
use std::time::{Duration, Instant};

use concurrent_queue::ConcurrentQueue;
use tracing::debug;

static GLOBAL: OnceLock<Timer> = OnceLock::new();

/// Completes once its duration has passed, without blocking the polling
/// thread.
pub struct Sleep {
    shared_state: Arc<Mutex<SharedState>>,
}

#[derive(Default)]
struct SharedState {
    fired: bool,
    waker: Option<Waker>,
}

fn lock(state: &Mutex<SharedState>) -> MutexGuard<'_, SharedState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Sleep {
    /// The clock starts now, not at the first poll.
    ///
    /// A duration past what `Instant` can represent never completes.
    pub fn new(duration: Duration) -> Self {
        let shared_state = Arc::new(Mutex::new(SharedState::default()));

        if let Some(deadline) = Instant::now().checked_add(duration) {
            Timer::get().register(Entry {
                deadline,
                shared_state: shared_state.clone(),
            });
        }

        Self { shared_state }
    }
}

impl Future for Sleep {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut shared_state = lock(&self.shared_state);
        if shared_state.fired {
            return Poll::Ready(());
        }
        match &shared_state.waker {
            Some(waker) if waker.will_wake(cx.waker()) => {}
            _ => shared_state.waker = Some(cx.waker().clone()),
        }
        Poll::Pending
    }
}

/// Convenience for `Sleep::new(duration)`.
pub fn sleep(duration: Duration) -> Sleep {
    Sleep::new(duration)
}

struct Entry {
    deadline: Instant,
    shared_state: Arc<Mutex<SharedState>>,
}

impl Entry {
    fn fire(self) {
        let waker = {
            let mut shared_state = lock(&self.shared_state);
            shared_state.fired = true;
            shared_state.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
    }
}

// Reversed so that `BinaryHeap` pops the earliest deadline first.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.deadline.cmp(&self.deadline)
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline
    }
}

impl Eq for Entry {}

struct Timer {
    queue: Arc<ConcurrentQueue<Entry>>,
    thread: Thread,
}

impl Timer {
    /// Use singleton timer.
    #[inline]
    fn get() -> &'static Self {
        GLOBAL.get_or_init(|| {
            let queue = Arc::new(ConcurrentQueue::unbounded());

            let handle = thread::Builder::new()
                .name("timer".to_string())
                .spawn({
                    let queue = queue.clone();
                    move || Self::run(&queue)
                })
                .expect("spawn timer thread error");

            debug!("timer thread started");

            Self {
                queue,
                thread: handle.thread().clone(),
            }
        })
    }

    fn register(&self, entry: Entry) {
        // Unbounded queues only reject pushes once closed, and this one never is.
        let _ = self.queue.push(entry);
        self.thread.unpark();
    }

    fn run(queue: &ConcurrentQueue<Entry>) {
        let mut pending = BinaryHeap::new();

        loop {
            while let Ok(entry) = queue.pop() {
                pending.push(entry);
            }

            let now = Instant::now();
            while pending.peek().is_some_and(|entry: &Entry| entry.deadline <= now) {
                if let Some(entry) = pending.pop() {
                    entry.fire();
                }
            }

            match pending.peek() {
                Some(entry) => {
                    thread::park_timeout(entry.deadline.saturating_duration_since(Instant::now()))
                }
                None => thread::park(),
            }
        }
    }
}
