// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!      gitdeck-git     gitdeck-ai-commit     gitdeck-watch
//!           \                 |                  /
//!            v                v                 v
//!         cli (clap)  -->  cmd (handlers, JSON lines on stdout)
//!                             |
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, env, CLI layers   |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!               git          ai      watch
//!          status/tree/   OpenRouter  notify +
//!          log/ops        + fallback  DedupState
//!                 |                    |
//!                 +---------+----------+
//!                           v
//!   +-----------------------------------------+
//!   |  core   process (spawn, capture, kill)  |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod ai;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
pub mod utility;
pub mod watch;
