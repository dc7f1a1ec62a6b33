// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stopping a running child process.
//!
//! POSIX systems can deliver SIGINT straight to the child, which gives the
//! program under test the same graceful-shutdown path as a Ctrl-C. Windows
//! has no equivalent for console children, so there the whole process tree
//! is force-killed instead. [`platform`] picks the right one once.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::CaptureError;

/// A way of stopping a process identified by its pid.
pub trait Terminate: Send + Sync {
    /// Ask the process to stop. Does not wait for it to exit.
    fn stop(&self, pid: u32) -> Result<(), CaptureError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Sends SIGINT to the process.
#[cfg(unix)]
#[derive(Clone, Copy, Debug, Default)]
pub struct Interrupt;

#[cfg(unix)]
impl Terminate for Interrupt {
    fn stop(&self, pid: u32) -> Result<(), CaptureError> {
        use nix::sys::signal::{kill, Signal};
        use nix::unistd::Pid;

        let raw = i32::try_from(pid).map_err(|e| CaptureError::Terminate {
            pid,
            reason: e.to_string(),
        })?;
        kill(Pid::from_raw(raw), Signal::SIGINT).map_err(|e| CaptureError::Terminate {
            pid,
            reason: e.to_string(),
        })?;
        debug!(pid, "sent SIGINT");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "interrupt"
    }
}

/// Force-kills the process and all of its descendants with `taskkill /F /T`.
#[derive(Clone, Copy, Debug, Default)]
pub struct KillTree;

impl Terminate for KillTree {
    fn stop(&self, pid: u32) -> Result<(), CaptureError> {
        let status = Command::new("taskkill")
            .args(["/F", "/T", "/PID", &pid.to_string()])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| CaptureError::Terminate {
                pid,
                reason: e.to_string(),
            })?;
        if !status.success() {
            return Err(CaptureError::Terminate {
                pid,
                reason: format!("taskkill exited with {status}"),
            });
        }
        debug!(pid, "killed process tree");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "kill-tree"
    }
}

/// The termination strategy for the host platform.
pub fn platform() -> Box<dyn Terminate> {
    #[cfg(unix)]
    {
        Box::new(Interrupt)
    }
    #[cfg(not(unix))]
    {
        Box::new(KillTree)
    }
}

#[cfg(test)]
#[path = "terminate_tests.rs"]
mod tests;
