//! Process-wide hooks wired once at startup
//!
//! Both hooks run independently of the main control flow and are
//! fire-and-terminate: they log one line and exit the process immediately,
//! with no draining or cleanup.

use std::panic;
use std::process;
use std::sync::Arc;

use crate::logger::Logger;
use crate::runner::EXIT_FAILURE;

/// Exit code when the run is interrupted by an external signal.
pub const EXIT_INTERRUPTED: i32 = 130;

/// Install the interrupt (Ctrl-C) and panic hooks.
///
/// Must be called from within the async runtime; the interrupt watcher is
/// spawned onto it. A panic anywhere in the process is the last-resort
/// analogue of an unhandled asynchronous failure: logged once, then fatal.
pub fn install(logger: &Arc<Logger>) {
    let panic_logger = Arc::clone(logger);
    panic::set_hook(Box::new(move |info| {
        panic_logger.error(&format!("Fatal error: {info}"));
        process::exit(EXIT_FAILURE);
    }));

    let interrupt_logger = Arc::clone(logger);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            interrupt_logger.warn("Script interrupted by user");
            process::exit(EXIT_INTERRUPTED);
        }
    });
}
