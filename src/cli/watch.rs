// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::Parser;
use std::path::PathBuf;

use super::global::GlobalOptions;

/// Streams file change records for a repository until interrupted.
#[derive(Debug, Parser)]
#[command(name = "gitdeck-watch", author, version, about)]
pub struct WatchCli {
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Repository directory.
    pub repo_path: Option<PathBuf>,
}
