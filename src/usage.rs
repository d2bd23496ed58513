//! Usage/help text for the scaffold

/// Build the multi-line usage text for the given program name.
///
/// Pure function of the name; the caller picks the stream (stdout when help
/// was requested, stderr after an unknown option).
pub fn usage(program: &str) -> String {
    format!(
        "\
Usage: {program} [OPTIONS]

Description of what this script does.

OPTIONS:
    -h, --help          Show this help message
    -v, --verbose       Enable verbose output
    --version           Show version information

EXAMPLES:
    {program} --help
    {program} --verbose
"
    )
}

/// The invoking program's name: the basename of the first process argument,
/// falling back to the crate's binary name.
pub fn program_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .map(std::path::Path::new)
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_mentions_every_flag() {
        let text = usage("myscript");
        assert!(text.starts_with("Usage: myscript [OPTIONS]"));
        for flag in ["-h, --help", "-v, --verbose", "--version"] {
            assert!(text.contains(flag), "missing flag: {flag}");
        }
        assert!(text.contains("EXAMPLES:"));
        assert!(text.contains("myscript --verbose"));
    }

    #[test]
    fn test_program_name_is_a_basename() {
        let name = program_name();
        assert!(!name.is_empty());
        assert!(!name.contains(std::path::MAIN_SEPARATOR));
    }
}
