// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the repository watcher on a real filesystem.

use gitdeck::config::types::WatchConfig;
use gitdeck::git::executor::ShellExecutor;
use gitdeck::watch::event::ChangeEvent;
use gitdeck::watch::{WatchRecord, WatchSession};
use std::path::Path;
use std::process::Command;
use std::time::Duration;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

const WAIT: Duration = Duration::from_secs(10);

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn run_git(args: &[&str], cwd: &Path) {
    let ok = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@test.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@test.com")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);
    assert!(ok, "git {args:?} failed");
}

fn init_repo_with_commit(dir: &Path) {
    run_git(&["init", "-q"], dir);
    run_git(&["config", "commit.gpgsign", "false"], dir);
    std::fs::write(dir.join("tracked.txt"), "v1\n").expect("write");
    run_git(&["add", "."], dir);
    run_git(&["commit", "-q", "-m", "init"], dir);
}

struct Running {
    rx: flume::Receiver<WatchRecord>,
    cancel: CancellationToken,
    task: tokio::task::JoinHandle<gitdeck::error::Result<()>>,
}

fn start(root: &Path, config: WatchConfig) -> Running {
    let session = WatchSession::new(ShellExecutor::new(root), config).expect("session");
    let (tx, rx) = flume::unbounded();
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    let task = tokio::spawn(async move {
        session
            .run(token, move |record| {
                let _ = tx.send(record);
            })
            .await
    });
    Running { rx, cancel, task }
}

impl Running {
    async fn next(&self) -> WatchRecord {
        tokio::time::timeout(WAIT, self.rx.recv_async())
            .await
            .expect("timed out waiting for a watch record")
            .expect("watcher stopped")
    }

    async fn until_watching(&self) -> Vec<WatchRecord> {
        let mut before = Vec::new();
        loop {
            let record = self.next().await;
            if matches!(record, WatchRecord::Status { .. }) {
                return before;
            }
            before.push(record);
        }
    }

    async fn change_for(&self, rel: &str) -> gitdeck::watch::ChangeRecord {
        loop {
            if let WatchRecord::Change(change) = self.next().await
                && change.path == rel
            {
                return change;
            }
        }
    }

    async fn stop(self) {
        self.cancel.cancel();
        let result = tokio::time::timeout(WAIT, self.task)
            .await
            .expect("watcher did not stop")
            .expect("watcher task panicked");
        assert!(result.is_ok(), "{result:?}");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn reports_initial_changes_then_watching() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());
    std::fs::write(temp.path().join("tracked.txt"), "v2\n").expect("modify");
    std::fs::write(temp.path().join("fresh.txt"), "new\n").expect("write");

    let running = start(temp.path(), WatchConfig::default());
    let initial = running.until_watching().await;

    let mut seen: Vec<(String, ChangeEvent, String)> = initial
        .into_iter()
        .filter_map(|record| match record {
            WatchRecord::Change(change) => Some((change.path, change.event, change.git_status)),
            _ => None,
        })
        .collect();
    seen.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(
        seen,
        [
            ("fresh.txt".to_string(), ChangeEvent::Initial, "??".to_string()),
            ("tracked.txt".to_string(), ChangeEvent::Initial, "M".to_string()),
        ]
    );

    running.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn reports_new_file_with_status() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());

    let running = start(temp.path(), WatchConfig::default());
    assert!(running.until_watching().await.is_empty());

    std::fs::write(temp.path().join("note.md"), "hello\n").expect("write");
    let change = running.change_for("note.md").await;

    assert!(
        matches!(change.event, ChangeEvent::Created | ChangeEvent::Modified),
        "{change:?}"
    );
    assert_eq!(change.git_status, "??");
    assert!(!change.is_directory);

    running.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn ignored_globs_are_not_reported() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());
    std::fs::create_dir_all(temp.path().join("build")).expect("mkdir");

    let config = WatchConfig {
        ignore: vec!["build/**".to_string()],
        ..WatchConfig::default()
    };
    let running = start(temp.path(), config);
    running.until_watching().await;

    std::fs::write(temp.path().join("build/out.o"), "obj").expect("write");
    std::fs::write(temp.path().join("kept.txt"), "k").expect("write");

    // Events arrive in order, so everything before kept.txt is visible here
    loop {
        match running.next().await {
            WatchRecord::Change(change) if change.path == "kept.txt" => break,
            WatchRecord::Change(change) => {
                assert!(!change.path.starts_with("build"), "{change:?}");
            }
            _ => {}
        }
    }

    running.stop().await;
}
