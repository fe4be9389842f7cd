// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{GitQuery, GixBackend, ShellBackend, current_branch};
use crate::config::types::QueryBackend;
use crate::git::executor::CommandResult;
use crate::git::fake::ScriptedExecutor;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[tokio::test]
async fn test_shell_backend_branch() {
    let temp = temp_dir();
    let executor =
        ScriptedExecutor::new(temp.path()).on("branch --show-current", CommandResult::ok("main\n"));

    let branch = ShellBackend::new(&executor).current_branch().await;
    assert_eq!(branch.expect("branch").as_deref(), Some("main"));
}

#[tokio::test]
async fn test_shell_backend_detached_head() {
    let temp = temp_dir();
    let executor =
        ScriptedExecutor::new(temp.path()).on("branch --show-current", CommandResult::ok(""));

    let branch = ShellBackend::new(&executor).current_branch().await;
    assert_eq!(branch.expect("branch"), None);
}

#[tokio::test]
async fn test_shell_backend_failure() {
    let temp = temp_dir();
    let executor = ScriptedExecutor::new(temp.path()).on(
        "branch --show-current",
        CommandResult::failure("fatal: not a git repository"),
    );

    let err = ShellBackend::new(&executor)
        .current_branch()
        .await
        .expect_err("not a repo");
    insta::assert_snapshot!(err.to_string(), @"git error: git command failed: branch --show-current - fatal: not a git repository");
}

#[tokio::test]
async fn test_gix_backend_unborn_branch() {
    let temp = temp_dir();
    gix::init(temp.path()).expect("failed to init repo");
    std::fs::write(temp.path().join(".git/HEAD"), "ref: refs/heads/trunk\n").expect("write HEAD");

    let branch = GixBackend::new(temp.path()).current_branch().await;
    assert_eq!(branch.expect("branch").as_deref(), Some("trunk"));
}

#[tokio::test]
async fn test_gix_backend_not_a_repo() {
    let temp = temp_dir();
    let nested = temp.path().join("plain");
    std::fs::create_dir_all(&nested).expect("mkdir");

    // Discovery may still find an enclosing repository on some hosts.
    if gix::discover(&nested).is_err() {
        assert!(GixBackend::new(&nested).current_branch().await.is_err());
    }
}

#[tokio::test]
async fn test_current_branch_swallows_errors() {
    let temp = temp_dir();
    let executor = ScriptedExecutor::new(temp.path());

    assert_eq!(current_branch(&executor, QueryBackend::Shell).await, None);
}
