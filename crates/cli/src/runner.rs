// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run a program to completion and check its exit code and output.

use std::fmt;
use std::io::Write;

use clap::ValueEnum;
use goldcheck_capture::{capture, Invocation};
use tracing::debug;

use crate::diff::{context_diff, EXPECTED, GENERATED};
use crate::error::HarnessError;
use crate::fixture::{normalize_line_endings, FixtureDir, Policy};
use crate::report;

/// Exit code a caller expects from an invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExpectedExit {
    /// Exit code 0.
    Success,
    /// Exit code 1.
    Failure,
}

impl ExpectedExit {
    pub fn code(self) -> i32 {
        match self {
            ExpectedExit::Success => 0,
            ExpectedExit::Failure => 1,
        }
    }
}

impl fmt::Display for ExpectedExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedExit::Success => write!(f, "success"),
            ExpectedExit::Failure => write!(f, "failure"),
        }
    }
}

/// Runs invocations and checks them against an expected exit code and,
/// optionally, a golden fixture.
///
/// Diagnostics are written to `out`; every failure is also returned as a
/// [`HarnessError`] so the caller decides whether to stop.
pub struct CommandRunner<W> {
    fixtures: FixtureDir,
    out: W,
}

impl<W: Write> CommandRunner<W> {
    pub fn new(fixtures: FixtureDir, out: W) -> Self {
        Self { fixtures, out }
    }

    pub fn fixtures(&self) -> &FixtureDir {
        &self.fixtures
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Run `invocation` to completion and return its combined output.
    ///
    /// Fails with [`HarnessError::UnexpectedExitCode`] when the exit code is
    /// not `expected`, and with [`HarnessError::FixtureMismatch`] when a
    /// `fixture` is named and the output differs from it (ignoring
    /// whitespace around each line).
    pub async fn call(
        &mut self,
        expected: ExpectedExit,
        invocation: &Invocation,
        failure_msg: &str,
        fixture: Option<&str>,
    ) -> Result<String, HarnessError> {
        let outcome = capture(invocation).await?;

        if outcome.exit_code != expected.code() {
            report::unexpected_exit(&mut self.out, failure_msg, &outcome.output);
            return Err(HarnessError::UnexpectedExitCode {
                expected: expected.code(),
                actual: outcome.exit_code,
                message: failure_msg.to_string(),
                output: outcome.output,
            });
        }

        if let Some(name) = fixture {
            let expected_text = self.fixtures.load(name).await?;
            if !Policy::Trimmed.matches(&outcome.output, &expected_text) {
                let generated: String = normalize_line_endings(&outcome.output)
                    .lines()
                    .map(|l| format!("{l}\n"))
                    .collect();
                let diff = context_diff(
                    &generated,
                    &normalize_line_endings(&expected_text),
                    GENERATED,
                    EXPECTED,
                );
                report::output_mismatch(&mut self.out, &diff);
                return Err(HarnessError::FixtureMismatch {
                    name: name.to_string(),
                    diff,
                });
            }
            debug!(fixture = name, "output matches fixture");
        }

        Ok(outcome.output)
    }

    /// Announce and run `invocation`, expecting exit code 0.
    pub async fn expect_success(
        &mut self,
        invocation: &Invocation,
        failure_msg: &str,
        fixture: Option<&str>,
    ) -> Result<String, HarnessError> {
        self.expect(ExpectedExit::Success, invocation, failure_msg, fixture)
            .await
    }

    /// Announce and run `invocation`, expecting exit code 1.
    pub async fn expect_failure(
        &mut self,
        invocation: &Invocation,
        failure_msg: &str,
        fixture: Option<&str>,
    ) -> Result<String, HarnessError> {
        self.expect(ExpectedExit::Failure, invocation, failure_msg, fixture)
            .await
    }

    /// Announce and run `invocation` with the given expectation.
    pub async fn expect(
        &mut self,
        expected: ExpectedExit,
        invocation: &Invocation,
        failure_msg: &str,
        fixture: Option<&str>,
    ) -> Result<String, HarnessError> {
        report::expecting(&mut self.out, expected, invocation);
        self.call(expected, invocation, failure_msg, fixture).await
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
