// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `gitdeck-git` arguments.
//!
//! ```text
//! gitdeck-git <command> <repo_path> [args..]
//!   status | init | file-tree | stage-all | unstage-all | add-all-untracked
//!   commit <message> [files..]
//!   log [limit]
//!   diff [file] [--staged]
//!   push|pull [remote] [branch]
//!   stage|unstage|add-untracked <file>
//!   <anything else>  --> Unknown
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use super::global::GlobalOptions;

/// One-line usage shown in argument errors.
pub const GIT_USAGE: &str = "gitdeck-git <command> <repo_path> [args...]";

/// Git GUI backend: one git operation per invocation, answered as JSON.
#[derive(Debug, Parser)]
#[command(name = "gitdeck-git", author, version, about)]
pub struct GitCli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Option<GitCommand>,
}

/// Available git operations.
#[derive(Debug, Clone, Subcommand)]
pub enum GitCommand {
    /// Staged, unstaged and untracked changes with branch and remotes.
    Status(RepoArgs),

    /// Creates the directory, runs git init and makes an initial commit.
    Init(RepoArgs),

    /// Stages files (all when none given) and commits.
    Commit(CommitArgs),

    /// Commit history with graph.
    Log(LogArgs),

    /// Working tree or staged diff.
    Diff(DiffArgs),

    /// Pushes to a remote branch.
    Push(RemoteArgs),

    /// Pulls from a remote branch.
    Pull(RemoteArgs),

    /// Nested file tree decorated with status codes.
    #[command(name = "file-tree")]
    FileTree(RepoArgs),

    /// Stages one file.
    Stage(FileArgs),

    /// Stages everything.
    #[command(name = "stage-all")]
    StageAll(RepoArgs),

    /// Unstages one file.
    Unstage(FileArgs),

    /// Unstages everything.
    #[command(name = "unstage-all")]
    UnstageAll(RepoArgs),

    /// Stages one untracked file.
    #[command(name = "add-untracked")]
    AddUntracked(FileArgs),

    /// Stages every untracked file.
    #[command(name = "add-all-untracked")]
    AddAllUntracked(RepoArgs),

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl GitCommand {
    /// Repository path, when the command takes one.
    #[must_use]
    pub fn repo_path(&self) -> Option<&Path> {
        let path = match self {
            Self::Status(a)
            | Self::Init(a)
            | Self::FileTree(a)
            | Self::StageAll(a)
            | Self::UnstageAll(a)
            | Self::AddAllUntracked(a) => &a.repo_path,
            Self::Commit(a) => &a.repo_path,
            Self::Log(a) => &a.repo_path,
            Self::Diff(a) => &a.repo_path,
            Self::Push(a) | Self::Pull(a) => &a.repo_path,
            Self::Stage(a) | Self::Unstage(a) | Self::AddUntracked(a) => &a.repo_path,
            Self::Unknown(_) => return None,
        };
        Some(path)
    }
}

#[derive(Debug, Clone, Args)]
pub struct RepoArgs {
    /// Repository directory.
    pub repo_path: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct CommitArgs {
    pub repo_path: PathBuf,

    /// Commit message; may start with `-`.
    #[arg(allow_hyphen_values = true)]
    pub message: Option<String>,

    /// Files to stage; everything when empty.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    pub repo_path: PathBuf,

    /// Maximum number of commits.
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Args)]
pub struct DiffArgs {
    pub repo_path: PathBuf,

    /// Restrict the diff to one file.
    pub file: Option<String>,

    /// Diff the index instead of the working tree.
    #[arg(long)]
    pub staged: bool,
}

#[derive(Debug, Clone, Args)]
pub struct RemoteArgs {
    pub repo_path: PathBuf,

    /// Remote name (default: origin).
    pub remote: Option<String>,

    /// Branch (default: current branch).
    pub branch: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct FileArgs {
    pub repo_path: PathBuf,

    /// Repository-relative file path.
    #[arg(allow_hyphen_values = true)]
    pub file: Option<String>,
}
