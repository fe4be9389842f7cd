// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bounded git command execution.
//!
//! ```text
//! GitExecutor::run(args)
//!        |
//!        v
//! ShellExecutor
//!   which("git") (cached)
//!   git -C <root> <args..>
//!   GCM_INTERACTIVE=never, GIT_TERMINAL_PROMPT=0
//!   timeout --> kill
//!        |
//!        v
//! CommandResult { success, output, error, exit_code }
//! ```
//!
//! An executor never returns `Err`: spawn failures, missing binaries and
//! timeouts all fold into a failed [`CommandResult`] with `exit_code = 1`.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::config::types::GitConfig;
use crate::core::process::builder::{ProcessBuilder, ProcessFlags};
use crate::error::{DeckError, ProcessError};

/// Uniform result of one git invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommandResult {
    pub success: bool,
    /// Stdout with trailing whitespace removed.
    pub output: String,
    /// Stderr, trimmed.
    pub error: String,
    pub exit_code: i32,
}

impl CommandResult {
    /// A successful result carrying `output`.
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            error: String::new(),
            exit_code: 0,
        }
    }

    /// A failed result with exit code 1.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: error.into(),
            exit_code: 1,
        }
    }
}

/// Runs git subcommands against one repository.
pub trait GitExecutor: Send + Sync {
    /// Working directory every command runs in.
    fn repo_root(&self) -> &Path;

    /// Timeout applied by [`GitExecutor::run`].
    fn default_timeout(&self) -> Duration;

    /// Timeout for single-file status checks.
    fn status_timeout(&self) -> Duration;

    /// Run `git <args>` with an explicit timeout.
    fn run_with_timeout(
        &self,
        args: &[&str],
        timeout: Duration,
    ) -> impl Future<Output = CommandResult> + Send;

    /// Run `git <args>` with the default timeout.
    fn run(&self, args: &[&str]) -> impl Future<Output = CommandResult> + Send {
        self.run_with_timeout(args, self.default_timeout())
    }
}

/// Executor that spawns the git CLI.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    root: PathBuf,
    program: String,
    timeout: Duration,
    status_timeout: Duration,
}

impl ShellExecutor {
    /// Executor with the stock settings (`git`, 30 s, 5 s).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::from_config(root, &GitConfig::default())
    }

    pub fn from_config(root: impl Into<PathBuf>, config: &GitConfig) -> Self {
        Self {
            root: root.into(),
            program: config.program.clone(),
            timeout: config.timeout(),
            status_timeout: config.status_timeout(),
        }
    }

    async fn execute(&self, args: Vec<String>, timeout: Duration) -> CommandResult {
        let builder = match ProcessBuilder::which(&self.program) {
            Ok(builder) => builder,
            Err(e) => return CommandResult::failure(e.to_string()),
        };

        let result = builder
            .name("git")
            .arg("-C")
            .arg(&self.root)
            .args(&args)
            .env_var("GCM_INTERACTIVE", "never")
            .env_var("GIT_TERMINAL_PROMPT", "0")
            .flags(ProcessFlags::ALLOW_FAILURE)
            .capture_output()
            .timeout(timeout)
            .run()
            .await;

        match result {
            Ok(output) => CommandResult {
                success: output.success(),
                output: output.stdout().trim_end().to_string(),
                error: output.stderr().trim().to_string(),
                exit_code: output.exit_code(),
            },
            Err(DeckError::Process(e)) => {
                if matches!(*e, ProcessError::Timeout { .. }) {
                    debug!(args = ?args, "git timed out");
                }
                CommandResult::failure(e.to_string())
            }
            Err(e) => CommandResult::failure(e.to_string()),
        }
    }
}

impl GitExecutor for ShellExecutor {
    fn repo_root(&self) -> &Path {
        &self.root
    }

    fn default_timeout(&self) -> Duration {
        self.timeout
    }

    fn status_timeout(&self) -> Duration {
        self.status_timeout
    }

    fn run_with_timeout(
        &self,
        args: &[&str],
        timeout: Duration,
    ) -> impl Future<Output = CommandResult> + Send {
        let args: Vec<String> = args.iter().map(|arg| (*arg).to_string()).collect();
        self.execute(args, timeout)
    }
}
