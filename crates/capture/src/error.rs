// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Invalid command line: {0}")]
    InvalidInvocation(String),

    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to stop process {pid}: {reason}")]
    Terminate { pid: u32, reason: String },

    #[error("Process I/O error: {0}")]
    Io(#[from] std::io::Error),
}
