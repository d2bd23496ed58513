//! The template script body and its extension points
//!
//! This module is the part of the scaffold a developer replaces when starting
//! a new script. [`validate_input`] and [`process_data`] are placeholder
//! hooks; [`script_body`] is the logic run between the runner's start and
//! success log lines.
//!
//! Whatever replaces [`process_data`] must keep its error-wrapping contract:
//! any internal failure is re-raised as the expected error kind via
//! [`ScriptError::processing`], preserving the original message, so the
//! top-level handler can print a clean one-line report.

use crate::error::{Result, ScriptError};
use crate::logger::Logger;

/// Whether `value` is acceptable input.
///
/// Placeholder predicate; the template accepts everything.
pub fn validate_input(value: &str) -> bool {
    // Add the real validation logic here.
    let _ = value;
    true
}

/// Transform `data`, or fail with a processing error carrying a descriptive
/// message.
///
/// Placeholder transform; the template returns its input unchanged. A real
/// implementation wraps internal failures like so:
///
/// ```
/// use scriptkit::error::{Result, ScriptError};
///
/// fn process_data(data: &str) -> Result<String> {
///     data.parse::<i64>()
///         .map(|n| (n * 2).to_string())
///         .map_err(ScriptError::processing)
/// }
/// # assert!(process_data("21").is_ok());
/// # assert!(process_data("x").is_err());
/// ```
pub fn process_data(data: &str) -> Result<String> {
    // Add the real processing logic here.
    Ok(data.to_string())
}

/// The user-supplied logic executed between the start and success log points.
///
/// May suspend wherever it awaits; nothing runs in parallel with it. Return
/// [`ScriptError::Script`] for expected failures the user should see as a
/// one-liner, and let everything else bubble up as unexpected.
pub async fn script_body(logger: &Logger) -> Result<()> {
    // Replace this walkthrough of the hooks with the real script logic.
    let input = "example";

    if !validate_input(input) {
        return Err(ScriptError::script(format!("Invalid input: {input}")));
    }

    let output = process_data(input)?;
    logger.debug(&format!("Processed data: {output}"));

    Ok(())
}
