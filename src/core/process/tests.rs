// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::{Duration, Instant};

use super::builder::{ProcessBuilder, ProcessFlags};
use crate::error::{DeckError, ProcessError};

#[tokio::test]
async fn test_process_echo() {
    let output = ProcessBuilder::new("echo")
        .arg("hello")
        .capture_output()
        .run()
        .await
        .expect("echo should succeed");

    assert!(output.success());
    insta::assert_snapshot!(output.stdout().trim(), @"hello");
}

#[tokio::test]
async fn test_process_exit_code_allowed() {
    let output = ProcessBuilder::new("sh")
        .args(["-c", "echo oops >&2; exit 42"])
        .flags(ProcessFlags::ALLOW_FAILURE)
        .capture_output()
        .run()
        .await
        .expect("process should complete");

    assert_eq!(output.exit_code(), 42);
    assert_eq!(output.stderr().trim(), "oops");
}

#[tokio::test]
async fn test_process_exit_code_rejected() {
    let err = ProcessBuilder::new("sh")
        .args(["-c", "exit 3"])
        .quiet()
        .run()
        .await
        .expect_err("non-zero exit without ALLOW_FAILURE");

    assert!(
        matches!(&err, DeckError::Process(p) if matches!(**p, ProcessError::NonZeroExit { code: 3, .. })),
        "{err:?}"
    );
}

#[tokio::test]
async fn test_process_env_var_and_cwd() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = ProcessBuilder::new("sh")
        .args(["-c", "echo \"$GITDECK_TEST_VAR:$(basename \"$PWD\")\""])
        .env_var("GITDECK_TEST_VAR", "value")
        .cwd(dir.path())
        .capture_output()
        .run()
        .await
        .expect("process should succeed");

    let expected = format!(
        "value:{}",
        dir.path()
            .file_name()
            .expect("tempdir has a name")
            .to_string_lossy()
    );
    assert_eq!(output.stdout().trim(), expected);
}

#[tokio::test]
async fn test_process_timeout_kills_child() {
    let started = Instant::now();
    let err = ProcessBuilder::new("sleep")
        .arg("10")
        .timeout(Duration::from_secs(1))
        .run()
        .await
        .expect_err("sleep should time out");

    assert!(started.elapsed() < Duration::from_secs(5));
    insta::assert_snapshot!(err.to_string(), @"process error: Command timed out after 1 seconds");
}

#[tokio::test]
async fn test_large_output_does_not_block() {
    let output = ProcessBuilder::new("sh")
        .args(["-c", "i=0; while [ $i -lt 20000 ]; do echo line-$i; i=$((i+1)); done"])
        .capture_output()
        .timeout(Duration::from_secs(20))
        .run()
        .await
        .expect("large output should be drained");

    assert_eq!(output.stdout().lines().count(), 20000);
}

#[tokio::test]
async fn test_spawn_failure() {
    let err = ProcessBuilder::new("/nonexistent/gitdeck-binary")
        .run()
        .await
        .expect_err("spawn should fail");
    assert!(
        matches!(&err, DeckError::Process(p) if matches!(**p, ProcessError::SpawnFailed { .. }))
    );
}

#[test]
fn test_executable_lookup() {
    assert!(ProcessBuilder::find("sh").is_some());
    let err = ProcessBuilder::which("gitdeck-definitely-missing-tool").expect_err("missing");
    insta::assert_snapshot!(err.to_string(), @"executable not found: 'gitdeck-definitely-missing-tool' (not in PATH)");
}
