// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mutating and composite git operations.
//!
//! ```text
//! stage / unstage / stage_all / unstage_all   --> CommandResult
//! add_all_untracked   ls-files --others, add each
//! commit              add (each | .), commit -m, rev-parse HEAD
//! init_repository     mkdir, init, .gitignore + README, initial commit
//! diff                diff [--cached] [-- file]
//! push / pull         remote default origin, branch default current
//! file_tree           walk + status --porcelain -z + build_tree
//! ```
//!
//! Composite operations return the failing [`CommandResult`] unchanged as
//! their `Err` so callers can print it as-is.

use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

use super::backend::current_branch;
use super::executor::{CommandResult, GitExecutor};
use super::model::TreeNode;
use super::status::{parse_porcelain_z, parse_untracked, status_map};
use super::tree::build_tree;
use crate::config::types::{QueryBackend, TreeConfig};
use crate::error::FsError;
use crate::utility::fs::walk::{WalkOptions, list_files};

type OpResult<T> = std::result::Result<T, CommandResult>;

/// Remote used when none is given.
pub const DEFAULT_REMOTE: &str = "origin";

/// Branch used when none is given and the current branch is unknown.
pub const FALLBACK_BRANCH: &str = "main";

const DEFAULT_GITIGNORE: &str = "\
# Dependencies
node_modules/
.env
.env.local
.env.development.local
.env.test.local
.env.production.local

# Logs
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Runtime data
pids
*.pid
*.seed
*.pid.lock

# Coverage
coverage/
.nyc_output

# Build output
dist/
build/
out/
target/

# Misc
.DS_Store
*.pem
";

/// A file that could not be staged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagingError {
    pub file: String,
    pub error: String,
}

/// Successful commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitOutcome {
    pub success: bool,
    pub output: String,
    pub commit_hash: Option<String>,
    /// Files from an explicit list that failed to stage.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub staging_errors: Vec<StagingError>,
}

/// Result of [`add_all_untracked`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddUntrackedOutcome {
    pub success: bool,
    pub output: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub staging_errors: Vec<StagingError>,
}

/// Successful repository initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitOutcome {
    pub success: bool,
    pub output: String,
    /// `None` when the initial commit could not be created.
    pub commit_hash: Option<String>,
}

/// Diff text for the whole tree or one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffOutcome {
    pub success: bool,
    pub diff: String,
    pub file: Option<String>,
    pub staged: bool,
}

/// Outcome of push or pull.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Repository file tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTreeOutcome {
    pub success: bool,
    pub tree: TreeNode,
    pub total_files: usize,
}

/// Direction of a remote synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDirection {
    Push,
    Pull,
}

impl SyncDirection {
    const fn command(self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Pull => "pull",
        }
    }
}

pub async fn stage_file<E: GitExecutor>(executor: &E, file: &str) -> CommandResult {
    executor.run(&["add", "--", file]).await
}

pub async fn stage_all<E: GitExecutor>(executor: &E) -> CommandResult {
    executor.run(&["add", "."]).await
}

pub async fn unstage_file<E: GitExecutor>(executor: &E, file: &str) -> CommandResult {
    executor.run(&["reset", "HEAD", "--", file]).await
}

pub async fn unstage_all<E: GitExecutor>(executor: &E) -> CommandResult {
    executor.run(&["reset", "HEAD", "--", "."]).await
}

/// Stage one untracked file; identical to [`stage_file`].
pub async fn add_untracked_file<E: GitExecutor>(executor: &E, file: &str) -> CommandResult {
    stage_file(executor, file).await
}

async fn stage_each<E: GitExecutor, S: AsRef<str>>(executor: &E, files: &[S]) -> Vec<StagingError> {
    let mut errors = Vec::new();
    for file in files {
        let file = file.as_ref();
        let result = stage_file(executor, file).await;
        if !result.success {
            warn!(file, error = %result.error, "failed to stage file");
            errors.push(StagingError {
                file: file.to_string(),
                error: result.error,
            });
        }
    }
    errors
}

/// Stage every untracked, non-ignored file.
pub async fn add_all_untracked<E: GitExecutor>(executor: &E) -> AddUntrackedOutcome {
    let listing = executor
        .run(&["ls-files", "--others", "--exclude-standard"])
        .await;
    let files: Vec<String> = if listing.success {
        parse_untracked(&listing.output)
            .into_iter()
            .map(|change| change.path)
            .collect()
    } else {
        debug!(error = %listing.error, "untracked listing failed");
        Vec::new()
    };

    if files.is_empty() {
        return AddUntrackedOutcome {
            success: true,
            output: "No untracked files to add".to_string(),
            staging_errors: Vec::new(),
        };
    }

    let staging_errors = stage_each(executor, &files).await;
    AddUntrackedOutcome {
        success: true,
        output: format!("Added {} untracked files", files.len() - staging_errors.len()),
        staging_errors,
    }
}

async fn head_hash<E: GitExecutor>(executor: &E) -> Option<String> {
    let result = executor.run(&["rev-parse", "HEAD"]).await;
    let hash = result.output.trim();
    (result.success && !hash.is_empty()).then(|| hash.to_string())
}

/// Stage `files` (or everything when empty) and commit with `message`.
///
/// Staging is best-effort; failures are listed in `staging_errors`.
///
/// # Errors
///
/// Returns the `commit` invocation's [`CommandResult`] when it fails.
pub async fn commit<E: GitExecutor, S: AsRef<str>>(
    executor: &E,
    message: &str,
    files: &[S],
) -> OpResult<CommitOutcome> {
    let staging_errors = if files.is_empty() {
        let result = stage_all(executor).await;
        if !result.success {
            warn!(error = %result.error, "git add . failed");
        }
        Vec::new()
    } else {
        stage_each(executor, files).await
    };

    let result = executor.run(&["commit", "-m", message]).await;
    if !result.success {
        return Err(result);
    }

    let commit_hash = head_hash(executor).await;
    info!(hash = ?commit_hash, "committed");
    Ok(CommitOutcome {
        success: true,
        output: "Changes committed successfully".to_string(),
        commit_hash,
        staging_errors,
    })
}

fn repo_dir_name(root: &Path) -> String {
    std::fs::canonicalize(root)
        .ok()
        .as_deref()
        .and_then(Path::file_name)
        .or_else(|| root.file_name())
        .map_or_else(
            || root.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
}

fn io_failure(path: &Path, source: std::io::Error) -> CommandResult {
    CommandResult::failure(
        FsError::IoError {
            path: path.display().to_string(),
            source,
        }
        .to_string(),
    )
}

async fn write_if_absent(path: &Path, content: &str) -> std::io::Result<()> {
    if tokio::fs::try_exists(path).await? {
        debug!(path = %path.display(), "keeping existing file");
        return Ok(());
    }
    tokio::fs::write(path, content).await
}

/// Create the directory, run `git init`, seed `.gitignore` and `README.md`,
/// and make an initial commit.
///
/// Existing `.gitignore` and `README.md` files are left untouched.
///
/// # Errors
///
/// Returns a failed [`CommandResult`] if the directory or seed files cannot
/// be written, or the `git init` result when it fails.
pub async fn init_repository<E: GitExecutor>(executor: &E) -> OpResult<InitOutcome> {
    let root = executor.repo_root();
    tokio::fs::create_dir_all(root)
        .await
        .map_err(|e| io_failure(root, e))?;

    let result = executor.run(&["init"]).await;
    if !result.success {
        return Err(result);
    }

    let readme = format!("# {}\n\nInitialized with gitdeck\n", repo_dir_name(root));
    for (name, content) in [(".gitignore", DEFAULT_GITIGNORE), ("README.md", readme.as_str())] {
        let path = root.join(name);
        write_if_absent(&path, content)
            .await
            .map_err(|e| io_failure(&path, e))?;
    }

    let staged = stage_all(executor).await;
    if !staged.success {
        warn!(error = %staged.error, "staging seed files failed");
    }
    let initial = executor.run(&["commit", "-m", "Initial commit"]).await;
    let commit_hash = if initial.success {
        head_hash(executor).await
    } else {
        warn!(error = %initial.error, "initial commit failed");
        None
    };

    Ok(InitOutcome {
        success: true,
        output: format!("Repository initialized at {}", root.display()),
        commit_hash,
    })
}

/// Diff of the working tree, or of the index with `staged`.
///
/// # Errors
///
/// Returns the `diff` invocation's [`CommandResult`] when it fails.
pub async fn diff<E: GitExecutor>(
    executor: &E,
    file: Option<&str>,
    staged: bool,
) -> OpResult<DiffOutcome> {
    let mut args = vec!["diff"];
    if staged {
        args.push("--cached");
    }
    if let Some(file) = file {
        args.extend(["--", file]);
    }

    let result = executor.run(&args).await;
    if !result.success {
        return Err(result);
    }
    Ok(DiffOutcome {
        success: true,
        diff: result.output,
        file: file.map(str::to_string),
        staged,
    })
}

/// Push to or pull from `remote`/`branch`.
///
/// `remote` defaults to `origin`; `branch` defaults to the current branch,
/// then to `main`.
pub async fn sync_remote<E: GitExecutor>(
    executor: &E,
    direction: SyncDirection,
    remote: Option<&str>,
    branch: Option<&str>,
    backend: QueryBackend,
) -> SyncOutcome {
    let remote = remote.unwrap_or(DEFAULT_REMOTE);
    let branch = match branch {
        Some(branch) => branch.to_string(),
        None => current_branch(executor, backend)
            .await
            .unwrap_or_else(|| FALLBACK_BRANCH.to_string()),
    };

    let result = executor.run(&[direction.command(), remote, &branch]).await;
    match (direction, result.success) {
        (SyncDirection::Push, true) => SyncOutcome {
            success: true,
            output: Some(format!("Pushed to {remote}/{branch}")),
            error: None,
        },
        (SyncDirection::Pull, true) => SyncOutcome {
            success: true,
            output: Some(format!("Pulled from {remote}/{branch}")),
            error: None,
        },
        (SyncDirection::Push, false) => SyncOutcome {
            success: false,
            output: None,
            error: Some(format!("Push failed: {}", result.error)),
        },
        (SyncDirection::Pull, false) => SyncOutcome {
            success: false,
            output: None,
            error: Some(format!("Pull failed: {}", result.error)),
        },
    }
}

/// List repository files and decorate them with porcelain status codes.
///
/// # Errors
///
/// Returns a failed [`CommandResult`] if the repository root cannot be walked.
pub async fn file_tree<E: GitExecutor>(
    executor: &E,
    tree_config: &TreeConfig,
) -> OpResult<FileTreeOutcome> {
    let root = executor.repo_root().to_path_buf();
    let options = WalkOptions::from(tree_config);

    let files = tokio::task::spawn_blocking(move || list_files(&root, &options))
        .await
        .map_err(|e| CommandResult::failure(format!("file listing task failed: {e}")))?
        .map_err(|e| CommandResult::failure(e.to_string()))?;

    let status = executor
        .run(&["status", "--porcelain", "-z", "--untracked-files=all"])
        .await;
    let statuses = if status.success {
        status_map(&parse_porcelain_z(&status.output))
    } else {
        debug!(error = %status.error, "status for file tree failed");
        Default::default()
    };

    let tree = build_tree(&repo_dir_name(executor.repo_root()), &files, &statuses);
    Ok(FileTreeOutcome {
        success: true,
        total_files: files.len(),
        tree,
    })
}
