// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors returned by the runners and the fixture checker.

use std::path::PathBuf;

use goldcheck_capture::CaptureError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("{message} (expected exit code {expected}, got {actual})")]
    UnexpectedExitCode {
        expected: i32,
        actual: i32,
        message: String,
        output: String,
    },

    #[error("Output doesn't match fixture \"{name}\"")]
    FixtureMismatch { name: String, diff: String },

    #[error("Missing file {}: {source}", path.display())]
    MissingFixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HarnessError {
    /// Whether the full diagnostic was already written to the report output.
    ///
    /// Callers only need to print errors for which this is false.
    pub fn is_reported(&self) -> bool {
        matches!(
            self,
            HarnessError::UnexpectedExitCode { .. } | HarnessError::FixtureMismatch { .. }
        )
    }
}
