// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Running programs and collecting what they print.

use std::io::Read;
use std::process::{ExitStatus, Stdio};

use tokio::process::Child;
use tracing::debug;

use crate::{CaptureError, Invocation};

/// A completed invocation.
///
/// A nonzero exit code is an ordinary outcome, not an error: callers decide
/// which code they expected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Exit code, or `128 + signal` when the process was killed by a signal.
    pub exit_code: i32,
    /// Everything written to stdout and stderr, in the order it was written.
    pub output: String,
}

/// Run an invocation to completion with stdout and stderr sharing one pipe.
pub async fn capture(invocation: &Invocation) -> Result<Outcome, CaptureError> {
    let (mut reader, writer) = std::io::pipe()?;

    let mut cmd = invocation.command();
    cmd.stdin(Stdio::null())
        .stdout(writer.try_clone()?)
        .stderr(writer);

    let mut child = cmd.spawn().map_err(|source| CaptureError::Spawn {
        program: invocation.program().to_string(),
        source,
    })?;
    // The builder still owns write ends of the pipe; the reader only sees
    // EOF once every write end is closed.
    drop(cmd);
    debug!(program = invocation.program(), pid = child.id(), "spawned for capture");

    let drain = tokio::task::spawn_blocking(move || {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).map(|_| buf)
    });

    let status = child.wait().await?;
    let bytes = drain.await.map_err(std::io::Error::other)??;

    let exit_code = exit_code(status);
    debug!(program = invocation.program(), exit_code, bytes = bytes.len(), "process exited");

    Ok(Outcome {
        exit_code,
        output: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Start an invocation in the background with all standard streams discarded.
///
/// The returned child is not killed on drop.
pub fn spawn_detached(invocation: &Invocation) -> Result<Child, CaptureError> {
    let child = invocation
        .command()
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| CaptureError::Spawn {
            program: invocation.program().to_string(),
            source,
        })?;
    debug!(program = invocation.program(), pid = child.id(), "spawned detached");
    Ok(child)
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
