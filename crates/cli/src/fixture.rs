// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden fixture lookup and comparison policies.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::env;
use crate::error::HarnessError;

/// Fixtures live next to the directory tests run from.
pub const DEFAULT_FIXTURES_DIR: &str = "../fixtures";

/// Directory holding golden fixture files, addressed by file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureDir {
    root: PathBuf,
}

impl FixtureDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `GOLDCHECK_FIXTURES_DIR` if set, otherwise [`DEFAULT_FIXTURES_DIR`].
    pub fn from_env() -> Self {
        env::fixtures_dir().map(Self::new).unwrap_or_default()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Read a fixture's full text. Fixtures are never written.
    pub async fn load(&self, name: &str) -> Result<String, HarnessError> {
        let path = self.path(name);
        let text = read_text(&path).await?;
        debug!(fixture = name, path = %path.display(), bytes = text.len(), "loaded fixture");
        Ok(text)
    }
}

impl Default for FixtureDir {
    fn default() -> Self {
        Self::new(DEFAULT_FIXTURES_DIR)
    }
}

/// How captured text is compared with a fixture.
///
/// Program output captured in memory is compared line by line ignoring
/// surrounding whitespace. Files written to disk must match exactly apart
/// from line endings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Trim each line and compare the `\n`-joined result.
    Trimmed,
    /// Compare full contents after line-ending normalization.
    Exact,
}

impl Policy {
    pub fn normalize(self, text: &str) -> String {
        match self {
            Policy::Trimmed => normalize_line_endings(text)
                .lines()
                .map(str::trim)
                .collect::<Vec<_>>()
                .join("\n"),
            Policy::Exact => normalize_line_endings(text),
        }
    }

    pub fn matches(self, generated: &str, expected: &str) -> bool {
        self.normalize(generated) == self.normalize(expected)
    }
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

pub(crate) async fn read_text(path: &Path) -> Result<String, HarnessError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => HarnessError::MissingFixture {
                path: path.to_path_buf(),
                source,
            },
            _ => HarnessError::Io(source),
        })
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
