// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only repository queries.
//!
//! ```text
//! GitQuery --> ShellBackend (git CLI through a GitExecutor)
//!          --> GixBackend   (pure Rust gix, no subprocess)
//!
//! QueryBackend (config git.query_backend) picks one per invocation.
//! ```

use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::executor::GitExecutor;
use crate::config::types::QueryBackend;
use crate::error::{DeckResult, GitError, GixError};

/// Read-only git query operations.
pub trait GitQuery {
    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the repository cannot be read.
    fn current_branch(&self) -> impl Future<Output = DeckResult<Option<String>>> + Send;
}

// --- ShellBackend Implementation ---

/// Answers queries by running the git CLI.
pub struct ShellBackend<'a, E> {
    executor: &'a E,
}

impl<'a, E: GitExecutor> ShellBackend<'a, E> {
    pub const fn new(executor: &'a E) -> Self {
        Self { executor }
    }
}

impl<E: GitExecutor> GitQuery for ShellBackend<'_, E> {
    async fn current_branch(&self) -> DeckResult<Option<String>> {
        let result = self.executor.run(&["branch", "--show-current"]).await;
        if !result.success {
            return Err(GitError::CommandFailed {
                command: "branch --show-current".to_string(),
                message: result.error,
            }
            .into());
        }
        let branch = result.output.trim();
        Ok((!branch.is_empty()).then(|| branch.to_string()))
    }
}

// --- GixBackend Implementation (Pure Rust) ---

/// Answers queries in-process with gix.
pub struct GixBackend {
    path: PathBuf,
}

impl GixBackend {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn head_branch(&self) -> DeckResult<Option<String>> {
        let repo = gix::discover(&self.path)
            .map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }
}

impl GitQuery for GixBackend {
    async fn current_branch(&self) -> DeckResult<Option<String>> {
        self.head_branch()
    }
}

/// Resolve the current branch with the configured backend.
///
/// Best-effort: errors are logged and yield `None`.
pub async fn current_branch<E: GitExecutor>(executor: &E, backend: QueryBackend) -> Option<String> {
    let result = match backend {
        QueryBackend::Shell => ShellBackend::new(executor).current_branch().await,
        QueryBackend::Gix => GixBackend::new(executor.repo_root()).current_branch().await,
    };
    result.unwrap_or_else(|e| {
        debug!(backend = %backend, error = %e, "current branch lookup failed");
        None
    })
}

#[cfg(test)]
mod tests;
