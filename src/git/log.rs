// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit history with ASCII graph.
//!
//! ```text
//! git log --graph --pretty=format:{json} --max-count=N
//!
//! * {"hash":..}          <- graph "*" + record
//! |\                     <- pending graph line
//! | * {"hash":..,"body":"first
//! | | second"}           <- continuation, graph columns stripped
//! ```
//!
//! A record starts only on a line whose graph prefix holds the `*` node
//! and whose text opens with `{"hash":`, so body lines that begin with `{`
//! stay continuations. Edge-only lines (`|\`, `|/`) always belong to the
//! next commit's graph. Records whose JSON never closes are dropped; order
//! stays git's (newest first).

use anyhow::Context;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::executor::{CommandResult, GitExecutor};
use crate::error::Result;

/// Commits returned when no limit is given.
pub const DEFAULT_LOG_LIMIT: usize = 50;

/// Pretty format producing one JSON object per commit.
pub const LOG_FORMAT: &str = r#"--pretty=format:{"hash":"%H","short_hash":"%h","author":"%an","email":"%ae","date":"%ad","subject":"%s","body":"%b"}"#;

/// One commit as emitted by [`LOG_FORMAT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub hash: String,
    pub short_hash: String,
    pub author: String,
    pub email: String,
    pub date: String,
    pub subject: String,
    #[serde(default)]
    pub body: String,
    /// Graph art preceding and on the commit's line.
    #[serde(default)]
    pub graph: String,
}

/// Result of [`get_log`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogResult {
    pub success: bool,
    pub commits: Vec<Commit>,
    pub total: usize,
}

/// Patterns for the two kinds of graph-prefixed lines.
struct LogPatterns {
    record: Regex,
    graph: Regex,
}

impl LogPatterns {
    fn compile() -> Result<Self> {
        Ok(Self {
            record: Regex::new(r#"^(?<graph>[|/\\_. -]*\*[*|/\\_. -]*?)(?<record>\{"hash":.*)$"#)
                .context("failed to compile log record regex")?,
            graph: Regex::new(r"^[*|/\\_. -]+$").context("failed to compile log graph regex")?,
        })
    }
}

struct PendingRecord {
    graph: String,
    text: String,
    graph_width: usize,
}

/// Edge lines such as `|\` or `|/` carry no commit text.
fn is_edge_line(line: &str) -> bool {
    line.contains(['/', '\\', '_'])
}

impl PendingRecord {
    fn try_finish(&self) -> Option<Commit> {
        let mut commit: Commit = serde_json::from_str(&self.text).ok()?;
        commit.body = commit.body.trim_end().to_string();
        commit.graph.clone_from(&self.graph);
        Some(commit)
    }

    fn push_continuation(&mut self, line: &str) {
        let strip = line
            .char_indices()
            .take(self.graph_width)
            .take_while(|(_, c)| "*|/\\_. -".contains(*c))
            .last()
            .map_or(0, |(i, c)| i + c.len_utf8());
        self.text.push_str("\\n");
        self.text.push_str(&line[strip..]);
    }
}

/// Parse `git log --graph` output produced with [`LOG_FORMAT`].
///
/// # Errors
///
/// Returns an error only if the line patterns fail to compile.
pub fn parse_log(output: &str) -> Result<Vec<Commit>> {
    let patterns = LogPatterns::compile()?;
    let mut commits = Vec::new();
    let mut pending_graph: Vec<&str> = Vec::new();
    let mut current: Option<PendingRecord> = None;

    for line in output.lines() {
        if let Some(caps) = patterns.record.captures(line) {
            if let Some(stale) = current.take() {
                trace!(record = %stale.text, "dropping unterminated log record");
            }
            let own = caps.name("graph").map_or("", |m| m.as_str());
            let record = caps.name("record").map_or("", |m| m.as_str());
            pending_graph.push(own.trim_end());
            let pending = PendingRecord {
                graph: pending_graph.join("\n"),
                text: record.to_string(),
                graph_width: own.len(),
            };
            pending_graph.clear();
            match pending.try_finish() {
                Some(commit) => commits.push(commit),
                None => current = Some(pending),
            }
        } else if patterns.graph.is_match(line) && (current.is_none() || is_edge_line(line)) {
            pending_graph.push(line.trim_end());
        } else if let Some(pending) = current.as_mut() {
            pending.push_continuation(line);
            if let Some(commit) = pending.try_finish() {
                commits.push(commit);
                current = None;
            }
        } else if !line.trim().is_empty() {
            trace!(line, "skipping unrecognized log line");
        }
    }

    if let Some(stale) = current {
        trace!(record = %stale.text, "dropping unterminated log record");
    }
    Ok(commits)
}

/// Fetch up to `limit` commits with graph information.
///
/// Returns the failed [`CommandResult`] unchanged when git fails.
pub async fn get_log<E: GitExecutor>(
    executor: &E,
    limit: usize,
) -> std::result::Result<LogResult, CommandResult> {
    let max_count = format!("--max-count={limit}");
    let result = executor
        .run(&["log", "--graph", LOG_FORMAT, &max_count])
        .await;
    if !result.success {
        return Err(result);
    }
    let commits = parse_log(&result.output).map_err(|e| CommandResult::failure(e.to_string()))?;
    Ok(LogResult {
        success: true,
        total: commits.len(),
        commits,
    })
}
