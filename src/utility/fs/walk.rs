// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use bon::Builder;
use ignore::{DirEntry, WalkBuilder, WalkState};
use std::path::Path;
use tracing::{debug, trace};

use crate::config::types::TreeConfig;
use crate::error::Result;

/// Directory never listed, whatever the ignore settings say.
const GIT_DIR: &str = ".git";

/// Which files of a working tree are listed.
#[derive(Debug, Clone, Copy, Builder)]
pub struct WalkOptions {
    /// Dotfiles such as `.gitignore` are part of the tree by default
    #[builder(setters(name = with_include_hidden), default = true)]
    include_hidden: bool,
    /// Apply `.gitignore`, `.git/info/exclude` and the global excludes file
    #[builder(setters(name = with_respect_gitignore), default = false)]
    respect_gitignore: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<&TreeConfig> for WalkOptions {
    fn from(config: &TreeConfig) -> Self {
        Self::builder()
            .with_include_hidden(config.include_hidden)
            .with_respect_gitignore(config.respect_gitignore)
            .build()
    }
}

impl WalkOptions {
    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    #[must_use]
    pub const fn respect_gitignore(&self) -> bool {
        self.respect_gitignore
    }

    fn walker(self, root: &Path) -> WalkBuilder {
        let gitignore = self.respect_gitignore;
        let mut builder = WalkBuilder::new(root);
        builder
            .follow_links(false)
            .hidden(!self.include_hidden)
            .git_ignore(gitignore)
            .git_global(gitignore)
            .git_exclude(gitignore)
            .ignore(gitignore)
            .parents(gitignore)
            .require_git(false)
            .filter_entry(|entry| entry.file_name() != GIT_DIR);
        builder
    }
}

type Visit = std::result::Result<DirEntry, ignore::Error>;

/// Every non-directory entry under `root` as a sorted, slash-separated
/// relative path.
///
/// The walk runs on `ignore`'s thread pool and funnels entries through a
/// flume channel. Unreadable entries are skipped.
///
/// # Errors
///
/// Returns an error if `root` is not a directory.
///
/// # Example
/// ```no_run
/// use gitdeck::utility::fs::walk::{list_files, WalkOptions};
///
/// let files = list_files("/path/to/repo", &WalkOptions::default())?;
/// println!("{} files", files.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn list_files<P: AsRef<Path>>(root: P, options: &WalkOptions) -> Result<Vec<String>> {
    let root = root.as_ref();
    if !root.is_dir() {
        anyhow::bail!("root directory does not exist: {}", root.display());
    }

    // Unbounded so walker threads never wait on the collector
    let (tx, rx) = flume::unbounded::<Visit>();
    options.walker(root).build_parallel().run(|| {
        let tx = tx.clone();
        Box::new(move |visit| {
            let _ = tx.send(visit);
            WalkState::Continue
        })
    });
    drop(tx);

    let mut files = Vec::new();
    let mut skipped = 0_usize;
    for visit in rx.drain() {
        match visit {
            Ok(entry) if entry.file_type().is_some_and(|kind| !kind.is_dir()) => {
                if let Ok(rel) = entry.path().strip_prefix(root) {
                    files.push(to_slash_path(rel));
                }
            }
            Ok(_) => {}
            Err(e) => {
                trace!(error = %e, "skipping unreadable entry");
                skipped += 1;
            }
        }
    }
    files.retain(|path| !path.is_empty());
    files.sort_unstable();

    if skipped > 0 {
        debug!(skipped, root = %root.display(), "file listing skipped entries");
    }
    Ok(files)
}

/// Joins path components with `/` regardless of platform.
#[must_use]
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
