// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by goldcheck are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

/// `GOLDCHECK_FIXTURES_DIR`: Fixtures directory override.
pub fn fixtures_dir() -> Option<PathBuf> {
    non_empty(names::GOLDCHECK_FIXTURES_DIR).map(PathBuf::from)
}

/// `GOLDCHECK_LOG`: Log filter directives (`tracing_subscriber::EnvFilter` syntax).
pub fn log_filter() -> Option<String> {
    non_empty(names::GOLDCHECK_LOG)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
