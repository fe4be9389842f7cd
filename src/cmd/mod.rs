// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! bin --> cli parse --> bootstrap (config, logging) --> cmd handler --> JsonEmitter
//!   gitdeck-git        run_git_command
//!   gitdeck-ai-commit  run_ai_commit
//!   gitdeck-watch      run_watch
//! ```

pub mod ai_commit;
pub mod bootstrap;
pub mod git;
pub mod output;
pub mod watch;
