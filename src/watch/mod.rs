// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository watcher.
//!
//! ```text
//! check_repository(root)        missing / no .git --> error record, exit 1
//!        |
//!        v
//! WatchSession::run
//!   initial_scan  status --porcelain -z       --> "initial" records
//!   notify (own thread) --> flume --> select! { cancel | event }
//!        |
//!        v
//!   handle_event
//!     classify kind       created | modified | deleted | moved
//!     PathFilter          inside root, no .git, not ignored
//!     status --porcelain -- <rel>   (status timeout, "??" default)
//!     DedupState          emit only when (event, status) changes
//! ```

pub mod dedup;
pub mod event;
pub mod filter;
pub mod session;

pub use dedup::DedupState;
pub use event::{ChangeEvent, ChangeRecord, WatchRecord};
pub use session::{WatchSession, check_repository};
