//! Shared testing utilities for lp-seed CLI tests.

use assert_cmd::Command;

/// Build a command for invoking the compiled `lp-seed` binary.
pub fn cli() -> Command {
    Command::cargo_bin("lp-seed").expect("Failed to locate lp-seed binary")
}
