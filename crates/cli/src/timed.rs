// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run a long-lived program for a fixed time, then stop it.

use std::io::Write;
use std::time::Duration;

use goldcheck_capture::terminate::{self, Terminate};
use goldcheck_capture::{spawn_detached, Invocation};
use tracing::debug;

use crate::error::HarnessError;
use crate::report;

/// Launches a program in the background and stops it after a delay.
pub struct TimedRunner<W> {
    terminator: Box<dyn Terminate>,
    out: W,
}

impl<W: Write> TimedRunner<W> {
    /// Use the host platform's termination strategy.
    pub fn new(out: W) -> Self {
        Self::with_terminator(terminate::platform(), out)
    }

    pub fn with_terminator(terminator: Box<dyn Terminate>, out: W) -> Self {
        Self { terminator, out }
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Start `invocation` with its output discarded, wait `duration`, then
    /// stop it. Does not wait for the program to exit afterwards.
    pub async fn run_for(
        &mut self,
        duration: Duration,
        invocation: &Invocation,
    ) -> Result<(), HarnessError> {
        report::running_for(&mut self.out, duration, invocation);

        let mut child = spawn_detached(invocation)?;
        tokio::time::sleep(duration).await;

        if let Some(status) = child.try_wait()? {
            debug!(program = invocation.program(), %status, "exited before deadline");
            return Ok(());
        }
        let Some(pid) = child.id() else {
            return Ok(());
        };

        debug!(
            pid,
            command = %invocation.to_json(),
            strategy = self.terminator.name(),
            "stopping after deadline"
        );
        self.terminator.stop(pid)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "timed_tests.rs"]
mod tests;
