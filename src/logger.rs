//! The scaffold logger
//!
//! Four severity-tagged write operations: `info` and `debug` go to stdout,
//! `warn` and `error` to stderr, each prefixed with a bracketed tag. `debug`
//! is suppressed unless the verbose flag is true *at call time*, so toggling
//! verbosity mid-run changes subsequent debug visibility immediately.
//!
//! The verbose flag is the one piece of shared mutable state in the scaffold.
//! Rather than a hidden global, the [`Logger`] is a value passed by reference
//! to call sites; the flag is atomic so the interrupt hook can share the same
//! instance through an `Arc`. For script bodies that prefer the `log` facade
//! macros, [`Logger::install`] registers a shared instance as the global
//! `log::Log` with identical tag and stream routing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{Level, Metadata, Record, SetLoggerError};

/// Leveled logger with a call-time verbose gate on `debug`.
#[derive(Debug, Default)]
pub struct Logger {
    verbose: AtomicBool,
}

impl Logger {
    /// Create a logger with the given initial verbosity.
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose: AtomicBool::new(verbose),
        }
    }

    /// Toggle debug visibility for all subsequent calls.
    pub fn set_verbose(&self, verbose: bool) {
        self.verbose.store(verbose, Ordering::Relaxed);
    }

    /// Whether debug output is currently enabled.
    pub fn verbose(&self) -> bool {
        self.verbose.load(Ordering::Relaxed)
    }

    /// Informational message on stdout.
    pub fn info(&self, message: &str) {
        println!("{}", format_line("INFO", message));
    }

    /// Warning on stderr.
    pub fn warn(&self, message: &str) {
        eprintln!("{}", format_line("WARN", message));
    }

    /// Error on stderr.
    pub fn error(&self, message: &str) {
        eprintln!("{}", format_line("ERROR", message));
    }

    /// Debug message on stdout; dropped unless verbose is set.
    pub fn debug(&self, message: &str) {
        if self.verbose() {
            println!("{}", format_line("DEBUG", message));
        }
    }

    /// Register a shared logger as the global `log::Log`, so `log::info!`
    /// and friends route through the same tags and streams.
    ///
    /// Fails if a global logger is already installed; callers may ignore the
    /// error and keep using the direct methods.
    pub fn install(logger: &Arc<Self>) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(Facade(Arc::clone(logger))))?;
        log::set_max_level(log::LevelFilter::Debug);
        Ok(())
    }
}

fn format_line(tag: &str, message: &str) -> String {
    format!("[{tag}] {message}")
}

/// Adapter routing `log` records onto a shared [`Logger`].
struct Facade(Arc<Logger>);

impl log::Log for Facade {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        // The verbose gate is applied at emit time, so every level is
        // enabled here and log_enabled! agrees with what log() does.
        true
    }

    fn log(&self, record: &Record) {
        let message = record.args().to_string();
        match record.level() {
            Level::Error => self.0.error(&message),
            Level::Warn => self.0.warn(&message),
            Level::Info => self.0.info(&message),
            Level::Debug | Level::Trace => self.0.debug(&message),
        }
    }

    fn flush(&self) {}
}
