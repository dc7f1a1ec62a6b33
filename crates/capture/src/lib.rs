// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess capture for golden-fixture tests.
//!
//! This crate runs external programs with their stdout and stderr merged
//! into a single stream, and provides the platform-specific means of
//! stopping a detached child after a fixed run time.

mod error;
mod invocation;
mod process;
pub mod terminate;

pub use error::CaptureError;
pub use invocation::Invocation;
pub use process::{capture, spawn_detached, Outcome};
pub use terminate::Terminate;
