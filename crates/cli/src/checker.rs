// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compare files written by a test run against their golden fixtures.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::diff::{context_diff, EXPECTED, GENERATED};
use crate::error::HarnessError;
use crate::fixture::{normalize_line_endings, read_text, FixtureDir, Policy};
use crate::report;

/// Checks `<workdir>/<name>` against `<fixtures>/<name>`.
pub struct FixtureChecker<W> {
    fixtures: FixtureDir,
    workdir: PathBuf,
    out: W,
}

impl<W: Write> FixtureChecker<W> {
    /// Checker reading generated files from the current directory.
    pub fn new(fixtures: FixtureDir, out: W) -> Self {
        Self {
            fixtures,
            workdir: PathBuf::from("."),
            out,
        }
    }

    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = workdir.into();
        self
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Compare the generated file `name` with the fixture of the same name.
    ///
    /// Contents must be identical apart from line endings.
    pub async fn check(&mut self, name: &str) -> Result<(), HarnessError> {
        let generated = read_text(&self.workdir.join(name)).await?;
        let expected = self.fixtures.load(name).await?;

        if !Policy::Exact.matches(&generated, &expected) {
            let diff = context_diff(
                &normalize_line_endings(&generated),
                &normalize_line_endings(&expected),
                GENERATED,
                EXPECTED,
            );
            report::fixture_mismatch(&mut self.out, &diff);
            return Err(HarnessError::FixtureMismatch {
                name: name.to_string(),
                diff,
            });
        }

        report::fixture_verified(&mut self.out, name);
        Ok(())
    }
}

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;
