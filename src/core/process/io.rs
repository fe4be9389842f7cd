// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output capture for running processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks (read to EOF, lossy UTF-8)
//!   wait | timeout --> kill + reap
//!   join readers
//!   --> ProcessOutput { stdout, stderr, exit_code }
//! ```
//!
//! Readers drain each pipe to EOF concurrently with `wait()`, so a child
//! that writes more than a pipe buffer never blocks.

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};
use crate::error::{DeckResult, ProcessError};

fn spawn_reader<R>(
    stream: Option<R>,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &'static str,
) -> Option<JoinHandle<String>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    if !flags.intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING) {
        return None;
    }
    let process_name = process_name.to_string();
    stream.map(|stream| {
        tokio::spawn(async move { read_stream(stream, flags, &process_name, stream_name).await })
    })
}

async fn read_stream<R>(
    mut reader: R,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &str,
) -> String
where
    R: AsyncRead + Unpin,
{
    let mut raw = Vec::new();
    if let Err(e) = reader.read_to_end(&mut raw).await {
        warn!(process = %process_name, stream = %stream_name, error = %e, "error reading stream");
    }
    let text = String::from_utf8_lossy(&raw).into_owned();

    if flags.contains(StreamFlags::FORWARD_TO_LOG) {
        for line in text.lines() {
            trace!(process = %process_name, stream = %stream_name, line = %line, "output");
        }
    }

    if flags.contains(StreamFlags::KEEP_IN_STRING) {
        text
    } else {
        String::new()
    }
}

async fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    match handle {
        Some(handle) => handle.await.unwrap_or_default(),
        None => String::new(),
    }
}

impl ProcessBuilder {
    /// Waits for the child while draining its output.
    pub(super) async fn run_child(
        &self,
        name: &str,
        cmd_line: &str,
        child: &mut Child,
    ) -> DeckResult<ProcessOutput> {
        let stdout_handle = spawn_reader(child.stdout.take(), self.stdout_stream(), name, "stdout");
        let stderr_handle = spawn_reader(child.stderr.take(), self.stderr_stream(), name, "stderr");

        let output_error = |e: std::io::Error| ProcessError::OutputError {
            command: cmd_line.to_string(),
            message: e.to_string(),
        };

        let exit_status = if let Some(limit) = self.timeout_duration() {
            match tokio::time::timeout(limit, child.wait()).await {
                Ok(status) => status.map_err(output_error)?,
                Err(_) => {
                    warn!(process = %name, timeout = ?limit, "process timed out");
                    child.kill().await.ok();
                    return Err(ProcessError::Timeout {
                        command: cmd_line.to_string(),
                        timeout_secs: limit.as_secs(),
                    }
                    .into());
                }
            }
        } else {
            child.wait().await.map_err(output_error)?
        };

        let stdout = join_reader(stdout_handle).await;
        let stderr = join_reader(stderr_handle).await;

        Ok(ProcessOutput::new(
            exit_status.code().unwrap_or(-1),
            stdout,
            stderr,
        ))
    }
}
