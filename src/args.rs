//! Command line argument parsing for the scaffold
//!
//! The scaffold recognises a deliberately tiny flag set (`-h`/`--help`,
//! `-v`/`--verbose`, `--version`) scanned left to right. There is no grammar
//! engine: no flag bundling, no `--opt=value`, no subcommands. Scripts that
//! outgrow this replace the module wholesale.
//!
//! The parser is pure. It never prints and never exits the process; terminal
//! conditions (`--version`, an unknown token) are returned as
//! [`ParseOutcome`] variants and the caller performs the actual side effects.

/// Options recognised by every generated script.
///
/// Built fresh per invocation and immutable once parsing completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Print usage and exit successfully.
    pub help: bool,
    /// Enable debug-level logging and diagnostic traces for the run.
    pub verbose: bool,
}

/// The result of scanning the argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// All tokens recognised; proceed with these options.
    Run(Options),
    /// `--version` was seen: print the version string and exit 0.
    Version,
    /// An unrecognised token was seen: report it, print usage to stderr and
    /// exit 1.
    Unknown(String),
}

/// Scan command line tokens (program name excluded) into a [`ParseOutcome`].
///
/// Tokens are processed left to right. `help` and `verbose` are set-true, so
/// repeats are harmless. The first terminal token (`--version` or anything
/// unrecognised) wins and stops the scan.
pub fn parse_args<I, S>(tokens: I) -> ParseOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = Options::default();

    for token in tokens {
        match token.as_ref() {
            "-h" | "--help" => options.help = true,
            "-v" | "--verbose" => options.verbose = true,
            "--version" => return ParseOutcome::Version,
            other => return ParseOutcome::Unknown(other.to_string()),
        }
    }

    ParseOutcome::Run(options)
}
