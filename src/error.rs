//! Error types for the scriptkit scaffold
//!
//! Failures raised by a script body fall into exactly two categories, and the
//! runner treats them differently:
//!
//! - [`ScriptError::Script`]: an *expected* failure the script itself raised.
//!   The runner reports only its message, with no diagnostic trace.
//! - [`ScriptError::Unexpected`]: anything else. The runner reports a generic
//!   message and, in verbose mode only, the full diagnostic chain.
//!
//! Processing hooks are expected to wrap internal failures into the expected
//! kind (see [`ScriptError::processing`]) before they escape, so the top-level
//! handler can give a clean one-line message. Anything not wrapped is treated
//! as unexpected.

use thiserror::Error;

/// The error type for script bodies run under the scaffold.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// An expected, script-specific failure carrying a human-readable message.
    #[error("{0}")]
    Script(String),

    /// Any other failure, reported with its full diagnostic chain in verbose
    /// mode.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl ScriptError {
    /// Create an expected script error from a message.
    pub fn script(message: impl Into<String>) -> Self {
        Self::Script(message.into())
    }

    /// Wrap a processing failure into the expected kind, preserving the
    /// original message.
    pub fn processing(cause: impl std::fmt::Display) -> Self {
        Self::Script(format!("Failed to process data: {cause}"))
    }

    /// Whether this is the expected, message-only kind.
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Script(_))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ScriptError>;
