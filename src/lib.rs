mod interrupt;
mod worker;

pub mod config;
pub mod error;
pub mod launcher;
pub mod logger;
pub mod pool;
pub mod report;
pub mod sequential;

// `block_on` and its waker only drive the coroutine comparison.
#[cfg(feature = "coroutines")]
mod block_on;
#[cfg(feature = "coroutines")]
pub mod coroutines;
#[cfg(feature = "coroutines")]
pub mod timer;
#[cfg(feature = "coroutines")]
pub mod waker;

pub use config::LaunchConfig;
pub use error::{LaunchError, WorkerError};
pub use interrupt::InterruptHandle;
pub use launcher::{run, Launch, Launcher};
pub use report::Report;

#[cfg(feature = "coroutines")]
pub use block_on::{block_on, block_on_counted};
