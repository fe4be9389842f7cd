// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use notify::{Config as NotifyConfig, Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

use super::dedup::DedupState;
use super::event::{ChangeEvent, ChangeRecord, WatchRecord, is_folder_kind};
use super::filter::PathFilter;
use crate::config::types::WatchConfig;
use crate::error::{DeckResult, FsError, Result};
use crate::git::executor::GitExecutor;
use crate::git::status::parse_porcelain_z;

/// Status reported when the per-file query fails or prints nothing.
pub const UNKNOWN_STATUS: &str = "??";

/// Reject paths that are missing or lack a `.git` entry.
///
/// # Errors
///
/// Returns `FsError::NotFound` or `FsError::NotARepository`.
pub fn check_repository(root: &Path) -> DeckResult<()> {
    if !root.exists() {
        return Err(FsError::NotFound(root.display().to_string()).into());
    }
    if !root.join(".git").exists() {
        return Err(FsError::NotARepository(root.display().to_string()).into());
    }
    Ok(())
}

/// A repository watch with its own dedup state.
pub struct WatchSession<E> {
    executor: E,
    filter: PathFilter,
    dedup: DedupState,
    config: WatchConfig,
}

impl<E: GitExecutor> WatchSession<E> {
    /// # Errors
    ///
    /// Returns an error if a `watch.ignore` pattern is invalid.
    pub fn new(executor: E, config: WatchConfig) -> Result<Self> {
        let filter = PathFilter::new(executor.repo_root(), &config.ignore)?;
        Ok(Self {
            executor,
            filter,
            dedup: DedupState::new(),
            config,
        })
    }

    #[must_use]
    pub const fn dedup(&self) -> &DedupState {
        &self.dedup
    }

    /// Emit one `initial` record per porcelain entry, or an error record.
    pub async fn initial_scan(&mut self, emit: &mut impl FnMut(WatchRecord)) {
        let result = self
            .executor
            .run_with_timeout(
                &["status", "--porcelain", "-z"],
                self.config.initial_scan_timeout(),
            )
            .await;

        if !result.success {
            emit(WatchRecord::error(format!(
                "Initial scan failed: {}",
                result.error
            )));
            return;
        }

        for change in parse_porcelain_z(&result.output) {
            self.dedup
                .observe(&change.path, ChangeEvent::Initial, &change.status);
            emit(WatchRecord::Change(ChangeRecord::new(
                change.path,
                ChangeEvent::Initial,
                change.status,
            )));
        }
    }

    async fn file_status(&self, rel: &str) -> String {
        let result = self
            .executor
            .run_with_timeout(
                &["status", "--porcelain", "--", rel],
                self.executor.status_timeout(),
            )
            .await;
        if !result.success {
            trace!(path = rel, error = %result.error, "status query failed");
            return UNKNOWN_STATUS.to_string();
        }
        let status: String = result.output.chars().take(2).collect();
        let status = status.trim();
        if status.is_empty() {
            UNKNOWN_STATUS.to_string()
        } else {
            status.to_string()
        }
    }

    /// Turn one notify event into zero or more change records.
    pub async fn handle_event(&mut self, event: &Event) -> Vec<WatchRecord> {
        let Some(kind) = ChangeEvent::classify(&event.kind) else {
            return Vec::new();
        };
        if is_folder_kind(&event.kind) {
            return Vec::new();
        }

        let mut records = Vec::new();
        for path in &event.paths {
            if path.is_dir() {
                continue;
            }
            let Some(rel) = self.filter.relative(path) else {
                continue;
            };
            let git_status = self.file_status(&rel).await;
            if self.dedup.observe(&rel, kind, &git_status) {
                records.push(WatchRecord::Change(ChangeRecord::new(rel, kind, git_status)));
            } else {
                trace!(path = %rel, event = %kind, "duplicate change suppressed");
            }
        }
        records
    }

    /// Scan, subscribe and forward records until `cancel` fires.
    ///
    /// # Errors
    ///
    /// Returns an error if the notify subscription cannot be created.
    pub async fn run(
        mut self,
        cancel: CancellationToken,
        mut emit: impl FnMut(WatchRecord) + Send,
    ) -> Result<()> {
        self.initial_scan(&mut emit).await;

        let (tx, rx) = flume::unbounded::<notify::Result<Event>>();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                let _ = tx.send(res);
            },
            NotifyConfig::default().with_poll_interval(self.config.poll_interval()),
        )?;
        let root = self.executor.repo_root().to_path_buf();
        watcher.watch(&root, RecursiveMode::Recursive)?;

        info!(path = %root.display(), "watching repository");
        emit(WatchRecord::watching(root.display().to_string()));

        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    debug!("watch cancelled");
                    break;
                }
                message = rx.recv_async() => match message {
                    Ok(Ok(event)) => {
                        for record in self.handle_event(&event).await {
                            emit(record);
                        }
                    }
                    Ok(Err(e)) => {
                        let path = e
                            .paths
                            .first()
                            .map_or_else(|| "unknown".to_string(), |p| p.display().to_string());
                        emit(WatchRecord::error_at(e.to_string(), path));
                    }
                    Err(_) => break,
                },
            }
        }

        drop(watcher);
        Ok(())
    }
}
