// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command-line surfaces, one clap parser per binary.
//!
//! ```text
//! gitdeck-git       [global] <command> <repo_path> [args..]
//! gitdeck-ai-commit [global] <repo_path> <changes_json>
//! gitdeck-watch     [global] <repo_path>
//!
//! global: -c/--config, -l/--log-level, --file-log-level, --log-file
//! ```

pub mod ai_commit;
pub mod git;
pub mod global;
pub mod watch;

#[cfg(test)]
mod tests;

/// First line of a clap error without the `error: ` prefix.
#[must_use]
pub fn error_detail(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default().trim();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
