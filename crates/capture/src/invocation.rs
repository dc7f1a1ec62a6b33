// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Program-plus-arguments command lines.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CaptureError;

/// An ordered command line: the program followed by its arguments.
///
/// Always holds at least the program name. Serializes as a plain JSON array
/// of strings, which is the interchange format used to hand a command line
/// to another process.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Invocation {
    argv: Vec<String>,
}

impl Invocation {
    /// Build an invocation from a program and its arguments.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv = vec![program.into()];
        argv.extend(args.into_iter().map(Into::into));
        Self { argv }
    }

    /// Parse an invocation from a JSON array such as `["sleep", "10"]`.
    pub fn from_json(json: &str) -> Result<Self, CaptureError> {
        serde_json::from_str(json).map_err(|e| CaptureError::InvalidInvocation(e.to_string()))
    }

    /// Serialize to the JSON array interchange format.
    pub fn to_json(&self) -> String {
        // A Vec<String> always serializes.
        serde_json::to_string(&self.argv).unwrap_or_default()
    }

    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub(crate) fn command(&self) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(self.program());
        cmd.args(self.args());
        cmd
    }
}

impl TryFrom<Vec<String>> for Invocation {
    type Error = CaptureError;

    fn try_from(argv: Vec<String>) -> Result<Self, Self::Error> {
        if argv.is_empty() {
            return Err(CaptureError::InvalidInvocation(
                "command line is empty".to_string(),
            ));
        }
        Ok(Self { argv })
    }
}

impl From<Invocation> for Vec<String> {
    fn from(invocation: Invocation) -> Self {
        invocation.argv
    }
}

/// Space-joined, the way the command would be typed at a shell.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv.join(" "))
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
