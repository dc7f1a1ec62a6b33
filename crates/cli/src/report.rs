// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable pass/fail diagnostics.
//!
//! Everything goes to a single writer (stdout for the binary) so that an
//! orchestrator capturing combined output sees the failure context inline.
//! Write errors are ignored: a broken report stream must not mask the
//! result being reported.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use goldcheck_capture::Invocation;

use crate::runner::ExpectedExit;

/// Announce a command about to be run with an expected outcome.
pub fn expecting<W: Write>(w: &mut W, expected: ExpectedExit, invocation: &Invocation) {
    let _ = writeln!(w, "Expecting {} from: \"{}\"", expected, invocation);
}

/// Exit code differed from the expected one.
pub fn unexpected_exit<W: Write>(w: &mut W, failure_msg: &str, output: &str) {
    let _ = writeln!(w, "FAILURE: {}", failure_msg);
    let _ = writeln!(w, "Program output:");
    let _ = writeln!(w, "{}", output);
}

/// Captured output differed from its fixture.
pub fn output_mismatch<W: Write>(w: &mut W, diff: &str) {
    let _ = writeln!(w, "\nOutput doesn't match fixture!\n");
    write_diff(w, diff);
}

/// A file on disk differed from its fixture.
pub fn fixture_mismatch<W: Write>(w: &mut W, diff: &str) {
    let _ = writeln!(w, "\nFAILURE: Fixture doesn't match");
    write_diff(w, diff);
}

pub fn fixture_verified<W: Write>(w: &mut W, name: &str) {
    let _ = writeln!(w, "Successfully verified fixture for \"{}\"", name);
}

/// Announce a timed run.
pub fn running_for<W: Write>(w: &mut W, duration: Duration, invocation: &Invocation) {
    let _ = writeln!(
        w,
        "Going to run this for {}s: \"{}\"",
        duration.as_secs_f64(),
        invocation
    );
}

fn write_diff<W: Write>(w: &mut W, diff: &str) {
    let _ = writeln!(w, "\nDiff:\n{}", diff);
}

/// Print an error message to stdout.
///
/// Displays in red when stdout is a terminal, plain text otherwise.
pub fn print_error(msg: impl Display) {
    let is_tty = io::stdout().is_terminal();
    write_error(&mut io::stdout(), msg, is_tty);
}

/// Write an error message to a writer with explicit terminal flag.
fn write_error<W: Write>(writer: &mut W, msg: impl Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
