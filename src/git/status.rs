// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository status aggregation.
//!
//! ```text
//! collect_status()
//!   diff --name-status --cached         --> staged
//!   diff --name-status                  --> unstaged
//!   ls-files --others --exclude-standard --> untracked
//!   current branch (shell | gix)        --> branch
//!   remote -v                           --> remote
//!        |
//!        v
//!   RepoStatus { .., has_changes }
//!        |
//!        v
//!   StatusReport { success, status | error }
//! ```
//!
//! Every sub-query is best-effort: a failing query contributes an empty
//! list and the aggregate still succeeds.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, trace};

use super::backend::current_branch;
use super::executor::{CommandResult, GitExecutor};
use super::model::FileChange;
use crate::config::types::QueryBackend;
use crate::error::{DeckResult, FsError};

/// Aggregated working tree state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoStatus {
    pub staged: Vec<FileChange>,
    pub unstaged: Vec<FileChange>,
    pub untracked: Vec<FileChange>,
    /// Current branch, empty when HEAD is detached.
    pub branch: String,
    /// Raw `git remote -v` text.
    pub remote: String,
    pub has_changes: bool,
}

/// Answer of the `status` command.
///
/// `{"success": true, "status": {..}}` or
/// `{"success": false, "error": "..", "status": null}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub status: Option<RepoStatus>,
}

impl StatusReport {
    #[must_use]
    pub const fn ok(status: RepoStatus) -> Self {
        Self {
            success: true,
            error: None,
            status: Some(status),
        }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            status: None,
        }
    }
}

impl From<DeckResult<RepoStatus>> for StatusReport {
    fn from(result: DeckResult<RepoStatus>) -> Self {
        match result {
            Ok(status) => Self::ok(status),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}

/// Parse `git diff --name-status` output.
///
/// Lines are split on tabs; lines with fewer than two fields are skipped.
/// For renames and copies the last field is the destination path.
#[must_use]
pub fn parse_name_status(output: &str) -> Vec<FileChange> {
    output
        .lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 2 {
                if !line.trim().is_empty() {
                    trace!(line, "skipping name-status line without a path");
                }
                return None;
            }
            let status = fields[0].trim();
            Some(match fields.as_slice() {
                [_, from, .., to] => FileChange::renamed(status, *from, *to),
                [_, path, ..] => FileChange::new(status, *path),
                _ => return None,
            })
        })
        .collect()
}

/// Parse `git ls-files --others` output; every non-empty line is untracked.
#[must_use]
pub fn parse_untracked(output: &str) -> Vec<FileChange> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| FileChange::new("??", line))
        .collect()
}

/// Parse NUL-separated `git status --porcelain -z` output.
///
/// Status codes are the two `XY` columns, trimmed. Rename and copy
/// entries consume the following record as their source path.
#[must_use]
pub fn parse_porcelain_z(output: &str) -> Vec<FileChange> {
    let mut changes = Vec::new();
    let mut records = output.split('\0');
    while let Some(record) = records.next() {
        let record = record.trim_start_matches(['\n', '\r']);
        if record.len() < 4 || !record.is_char_boundary(2) || !record.is_char_boundary(3) {
            if !record.is_empty() {
                trace!(record, "skipping short porcelain record");
            }
            continue;
        }
        let (code, path) = (&record[..2], &record[3..]);
        let status = code.trim();
        if code.starts_with(['R', 'C']) {
            match records.next() {
                Some(from) => changes.push(FileChange::renamed(status, from, path)),
                None => changes.push(FileChange::new(status, path)),
            }
        } else {
            changes.push(FileChange::new(status, path));
        }
    }
    changes
}

/// Map of path to porcelain code, for tree decoration.
#[must_use]
pub fn status_map(changes: &[FileChange]) -> BTreeMap<String, String> {
    changes
        .iter()
        .map(|change| (change.path.clone(), change.status.clone()))
        .collect()
}

/// Run the status sub-queries and merge them.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the repository root does not exist or is
/// not a directory. Sub-query failures never produce an error.
pub async fn collect_status<E: GitExecutor>(
    executor: &E,
    backend: QueryBackend,
) -> DeckResult<RepoStatus> {
    let root = executor.repo_root();
    if !root.is_dir() {
        return Err(FsError::NotFound(root.display().to_string()).into());
    }

    let staged = executor.run(&["diff", "--name-status", "--cached"]).await;
    let unstaged = executor.run(&["diff", "--name-status"]).await;
    let untracked = executor
        .run(&["ls-files", "--others", "--exclude-standard"])
        .await;
    let remote = executor.run(&["remote", "-v"]).await;

    let parse = |result: &CommandResult, label: &str, parser: fn(&str) -> Vec<FileChange>| {
        if result.success {
            parser(&result.output)
        } else {
            debug!(query = label, error = %result.error, "status sub-query failed");
            Vec::new()
        }
    };

    let staged = parse(&staged, "staged", parse_name_status);
    let unstaged = parse(&unstaged, "unstaged", parse_name_status);
    let untracked = parse(&untracked, "untracked", parse_untracked);

    let branch = current_branch(executor, backend).await.unwrap_or_default();
    let remote = if remote.success {
        remote.output
    } else {
        String::new()
    };

    let has_changes = !staged.is_empty() || !unstaged.is_empty() || !untracked.is_empty();

    Ok(RepoStatus {
        staged,
        unstaged,
        untracked,
        branch,
        remote,
        has_changes,
    })
}
