// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!            Public API
//!   status.rs  log.rs  ops.rs
//!        \       |      /
//!         v      v     v
//!      ,------------------,
//!      |  GitExecutor     |  every subcommand, bounded by a timeout
//!      '--------+---------'
//!               |
//!               v
//!         ShellExecutor  (git CLI, never Err)
//!
//!   backend: GitQuery --> ShellBackend | GixBackend (branch lookup)
//!   tree.rs + model.rs: flat paths --> TreeNode
//! ```

pub mod backend;
pub mod executor;
pub mod log;
pub mod model;
pub mod ops;
pub mod status;
pub mod tree;

#[cfg(test)]
pub(crate) mod fake;
