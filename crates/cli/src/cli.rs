// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use goldcheck_capture::{CaptureError, Invocation};

use crate::fixture::FixtureDir;
use crate::runner::ExpectedExit;

/// Run programs under test and compare their output against golden fixtures
#[derive(Parser, Debug)]
#[command(name = "goldcheck", version)]
pub struct Cli {
    /// Directory holding golden fixture files [default: $GOLDCHECK_FIXTURES_DIR, then ../fixtures]
    #[arg(long, global = true, value_name = "DIR")]
    pub fixtures: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// `--fixtures` if given, otherwise the environment override or the default.
    pub fn fixture_dir(&self) -> FixtureDir {
        self.fixtures
            .clone()
            .map(FixtureDir::new)
            .unwrap_or_else(FixtureDir::from_env)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a command and check its exit code, and optionally its output
    Run(RunArgs),
    /// Run a command for a fixed time, then stop it
    RunFor(RunForArgs),
    /// Compare generated files against the fixtures of the same name
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Exit status the command must finish with
    #[arg(long, value_enum, default_value = "success")]
    pub expect: ExpectedExit,

    /// Message printed when the exit status is not the expected one
    #[arg(short, long)]
    pub message: Option<String>,

    /// Fixture the command's output must match
    #[arg(long)]
    pub fixture: Option<String>,

    /// Command to run
    #[arg(last = true, required = true)]
    pub command: Vec<String>,
}

impl RunArgs {
    pub fn invocation(&self) -> Result<Invocation, CaptureError> {
        Invocation::try_from(self.command.clone())
    }

    pub fn failure_message(&self, invocation: &Invocation) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| format!("unexpected exit status from \"{}\"", invocation))
    }
}

#[derive(Args, Debug)]
pub struct RunForArgs {
    /// How long to let the command run before stopping it
    #[arg(value_name = "SECONDS", value_parser = parse_seconds)]
    pub duration: Duration,

    /// Command line as a JSON array of strings, e.g. '["sleep","10"]'
    #[arg(long, conflicts_with = "command")]
    pub command_json: Option<String>,

    /// Command to run
    #[arg(last = true, required_unless_present = "command_json")]
    pub command: Vec<String>,
}

impl RunForArgs {
    pub fn invocation(&self) -> Result<Invocation, CaptureError> {
        match self.command_json {
            Some(ref json) => Invocation::from_json(json),
            None => Invocation::try_from(self.command.clone()),
        }
    }
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Names of the generated files, each with a fixture of the same name
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Directory holding the generated files
    #[arg(long, default_value = ".")]
    pub workdir: PathBuf,
}

/// Parse a non-negative number of seconds, fractions allowed.
pub fn parse_seconds(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number of seconds"))?;
    Duration::try_from_secs_f64(secs).map_err(|e| format!("invalid duration '{s}': {e}"))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
