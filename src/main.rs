use std::process::ExitCode;

use tracing::error;

fn main() -> ExitCode {
    thread_elapsed::logger::init();

    match thread_elapsed::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
