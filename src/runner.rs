//! Main control flow: run a script body and translate its outcome into a
//! process exit code
//!
//! The runner brackets the body between a start and a success log line and
//! maps failures onto the two-category taxonomy in [`crate::error`]. Every
//! post-parse failure ends with exit code 1; causes are distinguished only in
//! the logged message, never in the exit code.

use std::future::Future;

use crate::error::ScriptError;
use crate::logger::Logger;

/// Exit code for a successful run (or help shown).
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for any handled or unexpected failure, or an unknown option.
pub const EXIT_FAILURE: i32 = 1;

/// What the runner reports for a failed body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    /// One-line message for the error stream, bracketed by the logger.
    pub message: String,
    /// Full diagnostic chain; present only for unexpected errors under
    /// verbose mode.
    pub trace: Option<String>,
}

impl FailureReport {
    /// Build the report for an error under the given verbosity.
    pub fn new(error: &ScriptError, verbose: bool) -> Self {
        match error {
            ScriptError::Script(message) => Self {
                message: format!("Script error: {message}"),
                trace: None,
            },
            ScriptError::Unexpected(source) => Self {
                message: format!("Unexpected error: {source}"),
                trace: verbose.then(|| format!("{source:?}")),
            },
        }
    }
}

/// Run a script body between the start and success log lines, returning the
/// process exit code.
///
/// The body is a single asynchronous unit of work awaited exactly once; it
/// may suspend wherever it chooses to await, but nothing runs in parallel
/// with it.
pub async fn run<F, Fut>(logger: &Logger, body: F) -> i32
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = crate::error::Result<()>>,
{
    logger.info("Script started");

    match body().await {
        Ok(()) => {
            logger.info("Script completed successfully");
            EXIT_SUCCESS
        }
        Err(error) => {
            let report = FailureReport::new(&error, logger.verbose());
            logger.error(&report.message);
            if let Some(trace) = &report.trace {
                eprintln!("{trace}");
            }
            EXIT_FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_for_script_error() {
        let error = ScriptError::script("boom");

        let report = FailureReport::new(&error, false);
        assert_eq!(report.message, "Script error: boom");
        assert_eq!(report.trace, None);

        // Verbose mode never adds a trace for the expected kind.
        let report = FailureReport::new(&error, true);
        assert_eq!(report.trace, None);
    }

    #[test]
    fn test_report_for_unexpected_error() {
        let error: ScriptError = anyhow::anyhow!("wires crossed").into();

        let report = FailureReport::new(&error, false);
        assert_eq!(report.message, "Unexpected error: wires crossed");
        assert_eq!(report.trace, None);

        let report = FailureReport::new(&error, true);
        assert!(report.trace.is_some());
    }

    #[test]
    fn test_trace_includes_the_error_chain() {
        let source: anyhow::Result<()> = Err(anyhow::anyhow!("root cause"));
        let error: ScriptError = source.context("outer context").unwrap_err().into();

        let report = FailureReport::new(&error, true);
        assert_eq!(report.message, "Unexpected error: outer context");
        let trace = report.trace.unwrap();
        assert!(trace.contains("root cause"));
    }

    #[tokio::test]
    async fn test_successful_body_exits_zero() {
        let logger = Logger::new(false);
        let code = run(&logger, || async { Ok(()) }).await;
        assert_eq!(code, EXIT_SUCCESS);
    }

    #[tokio::test]
    async fn test_failing_body_exits_one() {
        let logger = Logger::new(false);
        let code = run(&logger, || async { Err(ScriptError::script("boom")) }).await;
        assert_eq!(code, EXIT_FAILURE);
    }

    #[tokio::test]
    async fn test_unexpected_failure_also_exits_one() {
        let logger = Logger::new(true);
        let code = run(&logger, || async {
            Err(anyhow::anyhow!("wires crossed").into())
        })
        .await;
        assert_eq!(code, EXIT_FAILURE);
    }
}
