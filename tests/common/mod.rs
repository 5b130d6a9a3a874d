//! Common test utilities for solid-demo integration tests.
//!
//! - `run`: invoke the built binary and capture its output
//! - `DEFAULT_OUTPUT`: the exact stdout of a bare run

#![allow(dead_code)]

use std::process::Command;

/// Exact stdout of `solid-demo` with no arguments
pub const DEFAULT_OUTPUT: &str = "PDF: Report Data\n\
Sending to network printer: Network printing...\n\
Scanning document...\n\
Faxing document...\n";

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run solid-demo with `args` and a clean environment
pub fn run(args: &[&str]) -> TestResult {
    let output = Command::new(env!("CARGO_BIN_EXE_solid-demo"))
        .args(args)
        .env_clear()
        .output()
        .expect("Failed to execute solid-demo");

    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
