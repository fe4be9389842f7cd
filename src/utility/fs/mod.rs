// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! walk:  list_files()   ignore::WalkParallel + flume, sorted relative paths
//!        WalkOptions    hidden, gitignore; .git always pruned
//! ```

pub mod walk;
