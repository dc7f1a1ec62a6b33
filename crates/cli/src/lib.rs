// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden-fixture test harness.
//!
//! Runs programs under test, checks their exit codes, and compares what they
//! produce against golden fixture files, printing a context diff on mismatch.
//! Every operation returns a `Result`; the caller decides whether a failure
//! ends the run.
//!
#![doc = include_str!("../README.md")]

pub mod checker;
pub mod cli;
pub mod diff;
pub mod env;
pub mod error;
pub mod fixture;
pub mod report;
pub mod runner;
pub mod timed;

pub use checker::FixtureChecker;
pub use error::HarnessError;
pub use fixture::{FixtureDir, Policy};
pub use goldcheck_capture::{Invocation, Outcome};
pub use runner::{CommandRunner, ExpectedExit};
pub use timed::TimedRunner;
