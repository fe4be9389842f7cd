// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::Parser;
use std::path::PathBuf;

use super::global::GlobalOptions;

/// Generates a commit message for a list of changes.
#[derive(Debug, Parser)]
#[command(name = "gitdeck-ai-commit", author, version, about)]
pub struct AiCommitCli {
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Repository directory.
    pub repo_path: Option<PathBuf>,

    /// JSON array of `{"status": .., "file": ..}` objects.
    pub changes_json: Option<String>,
}
