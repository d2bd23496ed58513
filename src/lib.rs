//! scriptkit: a batteries-included scaffold for command-line utility scripts
//!
//! This crate is boilerplate meant to be copied and filled in when starting a
//! new script: argument parsing, a leveled logger, a usage printer, process
//! hooks, and a runner that turns the script body's outcome into a process
//! exit code. The interesting part of any generated script — the body — is a
//! placeholder here.
//!
//! # Features
//!
//! - **Pure argument scanning** with terminal outcomes returned to the
//!   caller, never `exit()` from inside the parser
//! - **Leveled logging** with bracketed tags, stdout/stderr routing, and a
//!   call-time verbose gate on debug output
//! - **Two-category error taxonomy**: expected script errors reported as a
//!   one-liner, everything else with a diagnostic chain under verbose mode
//! - **Fire-and-terminate process hooks** for interrupts (exit 130) and
//!   unhandled failures (exit 1)
//! - **Single async unit of work**: the body may await, nothing runs in
//!   parallel with it
//!
//! # Quick Start
//!
//! A generated script wires the pieces together exactly like the template
//! binary does:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use scriptkit::args::{parse_args, ParseOutcome};
//! use scriptkit::logger::Logger;
//! use scriptkit::usage::{program_name, usage};
//! use scriptkit::{hooks, runner};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let logger = Arc::new(Logger::new(false));
//!     hooks::install(&logger);
//!
//!     let options = match parse_args(std::env::args().skip(1)) {
//!         ParseOutcome::Run(options) => options,
//!         ParseOutcome::Version => {
//!             println!("{}", scriptkit::VERSION);
//!             std::process::exit(runner::EXIT_SUCCESS);
//!         }
//!         ParseOutcome::Unknown(token) => {
//!             eprintln!("Unknown option: {token}");
//!             eprintln!("{}", usage(&program_name()));
//!             std::process::exit(runner::EXIT_FAILURE);
//!         }
//!     };
//!
//!     if options.help {
//!         println!("{}", usage(&program_name()));
//!         std::process::exit(runner::EXIT_SUCCESS);
//!     }
//!
//!     logger.set_verbose(options.verbose);
//!
//!     let code = runner::run(&logger, || async {
//!         // The real script logic goes here.
//!         Ok(())
//!     })
//!     .await;
//!     std::process::exit(code);
//! }
//! ```
//!
//! # Exit codes
//!
//! `0` success or help shown; `1` handled or unexpected error, or unknown
//! option; `130` interrupted by an external signal.

pub use args::{parse_args, Options, ParseOutcome};
pub use error::{Result, ScriptError};
pub use logger::Logger;
pub use runner::{run, FailureReport, EXIT_FAILURE, EXIT_SUCCESS};
pub use usage::usage;

pub mod args;
pub mod cli_bin;
pub mod error;
pub mod hooks;
pub mod logger;
pub mod runner;
pub mod usage;

/// The fixed version string printed by `--version`.
pub const VERSION: &str = "1.0";
