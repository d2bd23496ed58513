//! End-to-end tests for the template binary: streams and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

fn scriptkit() -> Command {
    Command::cargo_bin("scriptkit").unwrap()
}

#[test]
fn test_help_prints_usage_on_stdout() {
    scriptkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("-h, --help"))
        .stdout(predicate::str::contains("-v, --verbose"))
        .stdout(predicate::str::contains("--version"));
}

#[test]
fn test_help_wins_over_the_run_regardless_of_position() {
    scriptkit()
        .args(["-v", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Script started").not());
}

#[test]
fn test_version_prints_exactly_the_fixed_string() {
    scriptkit().arg("--version").assert().success().stdout("1.0\n");
}

#[test]
fn test_version_ignores_earlier_recognised_flags() {
    scriptkit()
        .args(["-v", "--version"])
        .assert()
        .success()
        .stdout("1.0\n");
}

#[test]
fn test_unknown_option_prints_usage_on_stderr() {
    scriptkit()
        .arg("--bogus")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown option: --bogus"))
        .stderr(predicate::str::contains("Usage:"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_first_terminal_token_wins() {
    // --bogus comes first, so --help never gets a say.
    scriptkit()
        .args(["--bogus", "--help"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown option: --bogus"));
}

#[test]
fn test_default_run_logs_start_then_success() {
    scriptkit()
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(
                r"(?s)\[INFO\] Script started.*\[INFO\] Script completed successfully",
            )
            .unwrap(),
        )
        .stdout(predicate::str::contains("[DEBUG]").not());
}

#[test]
fn test_verbose_run_emits_debug_output() {
    scriptkit()
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("[DEBUG] Processed data: example"));
}
