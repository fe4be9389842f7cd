// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::Parser;
use clap::error::ErrorKind;
use std::path::Path;

use super::ai_commit::AiCommitCli;
use super::error_detail;
use super::git::{GitCli, GitCommand};
use super::watch::WatchCli;

#[test]
fn test_parse_commit_with_files() {
    let cli = GitCli::try_parse_from(["gitdeck-git", "commit", "/repo", "feat: x", "a.rs", "b.rs"])
        .expect("parse");
    let Some(GitCommand::Commit(args)) = cli.command else {
        panic!("expected commit, got {:?}", cli.command);
    };
    assert_eq!(args.repo_path, Path::new("/repo"));
    assert_eq!(args.message.as_deref(), Some("feat: x"));
    assert_eq!(args.files, ["a.rs", "b.rs"]);
}

#[test]
fn test_parse_hyphen_leading_values() {
    let cli = GitCli::try_parse_from(["gitdeck-git", "commit", "/repo", "-wip: fix", "-x.rs"])
        .expect("parse");
    let Some(GitCommand::Commit(args)) = cli.command else {
        panic!("expected commit, got {:?}", cli.command);
    };
    assert_eq!(args.message.as_deref(), Some("-wip: fix"));
    assert_eq!(args.files, ["-x.rs"]);

    let cli = GitCli::try_parse_from(["gitdeck-git", "stage", "/repo", "-leading.txt"])
        .expect("parse");
    let Some(GitCommand::Stage(args)) = cli.command else {
        panic!("expected stage, got {:?}", cli.command);
    };
    assert_eq!(args.file.as_deref(), Some("-leading.txt"));
    assert_eq!(cli.global.log_level, None);
}

#[test]
fn test_parse_commit_without_message() {
    let cli = GitCli::try_parse_from(["gitdeck-git", "commit", "/repo"]).expect("parse");
    let Some(GitCommand::Commit(args)) = cli.command else {
        panic!("expected commit");
    };
    assert!(args.message.is_none());
    assert!(args.files.is_empty());
}

#[test]
fn test_parse_global_options_anywhere() {
    let cli = GitCli::try_parse_from([
        "gitdeck-git",
        "status",
        "/repo",
        "-l",
        "4",
        "--log-file",
        "/tmp/gitdeck.log",
    ])
    .expect("parse");
    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(
        cli.command.as_ref().and_then(GitCommand::repo_path),
        Some(Path::new("/repo"))
    );
    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        (
            "global.output_log_level",
            "4",
        ),
        (
            "global.file_log_level",
            "4",
        ),
        (
            "global.log_file",
            "/tmp/gitdeck.log",
        ),
    ]
    "#);
}

#[test]
fn test_parse_diff_staged() {
    let cli = GitCli::try_parse_from(["gitdeck-git", "diff", "/repo", "src/a.rs", "--staged"])
        .expect("parse");
    let Some(GitCommand::Diff(args)) = cli.command else {
        panic!("expected diff");
    };
    assert_eq!(args.file.as_deref(), Some("src/a.rs"));
    assert!(args.staged);
}

#[test]
fn test_parse_unknown_command() {
    let cli = GitCli::try_parse_from(["gitdeck-git", "rebase", "/repo"]).expect("parse");
    let Some(GitCommand::Unknown(args)) = cli.command else {
        panic!("expected unknown");
    };
    assert_eq!(args, ["rebase", "/repo"]);
}

#[test]
fn test_parse_errors() {
    let err = GitCli::try_parse_from(["gitdeck-git", "log", "/repo", "many"]).expect_err("bad limit");
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
    assert!(error_detail(&err).contains("many"), "{}", error_detail(&err));

    let err = GitCli::try_parse_from(["gitdeck-git", "status"]).expect_err("no repo");
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    assert!(!error_detail(&err).starts_with("error:"));

    let err = GitCli::try_parse_from(["gitdeck-git", "-l", "9", "status", "/repo"])
        .expect_err("level out of range");
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn test_parse_no_command() {
    let cli = GitCli::try_parse_from(["gitdeck-git"]).expect("parse");
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_ai_commit() {
    let cli = AiCommitCli::try_parse_from([
        "gitdeck-ai-commit",
        "/repo",
        r#"[{"status":"A","file":"a"}]"#,
        "-c",
        "custom.toml",
    ])
    .expect("parse");
    assert_eq!(cli.repo_path.as_deref(), Some(Path::new("/repo")));
    assert!(cli.changes_json.is_some());
    assert_eq!(cli.global.config.as_deref(), Some(Path::new("custom.toml")));

    let cli = AiCommitCli::try_parse_from(["gitdeck-ai-commit", "/repo"]).expect("parse");
    assert!(cli.changes_json.is_none());
}

#[test]
fn test_parse_watch() {
    let cli = WatchCli::try_parse_from(["gitdeck-watch", "--file-log-level", "5", "/repo"])
        .expect("parse");
    assert_eq!(cli.repo_path.as_deref(), Some(Path::new("/repo")));
    assert_eq!(
        cli.global.to_config_overrides(),
        vec![("global.file_log_level", "5".to_string())]
    );
}

#[test]
fn test_clis_are_well_formed() {
    use clap::CommandFactory;
    GitCli::command().debug_assert();
    AiCommitCli::command().debug_assert();
    WatchCli::command().debug_assert();
}
