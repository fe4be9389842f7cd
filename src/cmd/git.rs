// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `gitdeck-git` command dispatch.

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::output::{failure, to_json};
use crate::cli::git::GitCommand;
use crate::config::Config;
use crate::error::ArgumentError;
use crate::git::executor::{CommandResult, GitExecutor, ShellExecutor};
use crate::git::log::{DEFAULT_LOG_LIMIT, get_log};
use crate::git::ops::{self, SyncDirection};
use crate::git::status::{StatusReport, collect_status};

fn settle<T: Serialize>(result: std::result::Result<T, CommandResult>) -> Value {
    match result {
        Ok(value) => to_json(&value),
        Err(failed) => to_json(&failed),
    }
}

fn missing(what: &str) -> Value {
    failure(
        ArgumentError::Missing {
            what: what.to_string(),
        }
        .to_string(),
    )
}

/// Run one git command and return its JSON answer.
///
/// Every failure, including unknown commands and missing arguments, is
/// folded into `{"success": false, "error": ..}`.
pub async fn run_git_command(command: &GitCommand, config: &Config) -> Value {
    let Some(repo_path) = command.repo_path() else {
        let name = match command {
            GitCommand::Unknown(args) => args.first().map_or("", String::as_str),
            _ => "",
        };
        return failure(format!("Unknown command: {name}"));
    };

    let executor = ShellExecutor::from_config(repo_path, &config.git);
    info!(repo = %repo_path.display(), command = ?command, "running git command");
    dispatch(&executor, command, config).await
}

/// Dispatch against any executor.
pub async fn dispatch<E: GitExecutor>(executor: &E, command: &GitCommand, config: &Config) -> Value {
    let backend = config.git.query_backend;
    match command {
        GitCommand::Status(_) => {
            to_json(&StatusReport::from(collect_status(executor, backend).await))
        }
        GitCommand::Init(_) => settle(ops::init_repository(executor).await),
        GitCommand::Commit(args) => match &args.message {
            Some(message) => settle(ops::commit(executor, message, &args.files).await),
            None => missing("commit message"),
        },
        GitCommand::Log(args) => {
            settle(get_log(executor, args.limit.unwrap_or(DEFAULT_LOG_LIMIT)).await)
        }
        GitCommand::Diff(args) => {
            settle(ops::diff(executor, args.file.as_deref(), args.staged).await)
        }
        GitCommand::Push(args) | GitCommand::Pull(args) => {
            let direction = if matches!(command, GitCommand::Push(_)) {
                SyncDirection::Push
            } else {
                SyncDirection::Pull
            };
            to_json(
                &ops::sync_remote(
                    executor,
                    direction,
                    args.remote.as_deref(),
                    args.branch.as_deref(),
                    backend,
                )
                .await,
            )
        }
        GitCommand::FileTree(_) => settle(ops::file_tree(executor, &config.tree).await),
        GitCommand::Stage(args) => match &args.file {
            Some(file) => to_json(&ops::stage_file(executor, file).await),
            None => missing("file path"),
        },
        GitCommand::StageAll(_) => to_json(&ops::stage_all(executor).await),
        GitCommand::Unstage(args) => match &args.file {
            Some(file) => to_json(&ops::unstage_file(executor, file).await),
            None => missing("file path"),
        },
        GitCommand::UnstageAll(_) => to_json(&ops::unstage_all(executor).await),
        GitCommand::AddUntracked(args) => match &args.file {
            Some(file) => to_json(&ops::add_untracked_file(executor, file).await),
            None => missing("file path"),
        },
        GitCommand::AddAllUntracked(_) => to_json(&ops::add_all_untracked(executor).await),
        GitCommand::Unknown(args) => failure(format!(
            "Unknown command: {}",
            args.first().map_or("", String::as_str)
        )),
    }
}
