use std::future::Future;
use std::pin::pin;
use std::task::{Context, Poll};
use std::thread;

use crate::waker::current_thread_waker;

/// Runs a future to completion on the current thread, parking while it is
/// pending.
pub fn block_on<F: Future>(fut: F) -> F::Output {
    block_on_counted(fut).0
}

/// Like [`block_on`], also returning how many times the future was polled.
///
/// With many futures joined, the count shows how often the polling thread
/// was woken before everything finished.
pub fn block_on_counted<F: Future>(fut: F) -> (F::Output, usize) {
    let waker = current_thread_waker();
    let mut cx = Context::from_waker(&waker);
    let mut fut = pin!(fut);

    let mut polls = 0;
    loop {
        polls += 1;
        if let Poll::Ready(output) = fut.as_mut().poll(&mut cx) {
            return (output, polls);
        }
        thread::park();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_on_first_poll() {
        assert_eq!(block_on_counted(async { 1 }), (1, 1));
    }
}
