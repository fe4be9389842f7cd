// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use notify::EventKind;
use notify::event::{CreateKind, ModifyKind, RemoveKind};
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Change category reported for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeEvent {
    /// Reported once per entry of the startup scan.
    Initial,
    Created,
    Modified,
    Deleted,
    Moved,
}

impl ChangeEvent {
    /// Map a notify event kind; access and unknown kinds yield `None`.
    #[must_use]
    pub const fn classify(kind: &EventKind) -> Option<Self> {
        match kind {
            EventKind::Create(_) => Some(Self::Created),
            EventKind::Modify(ModifyKind::Name(_)) => Some(Self::Moved),
            EventKind::Modify(_) => Some(Self::Modified),
            EventKind::Remove(_) => Some(Self::Deleted),
            EventKind::Access(_) | EventKind::Any | EventKind::Other => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Created => "created",
            Self::Modified => "modified",
            Self::Deleted => "deleted",
            Self::Moved => "moved",
        }
    }
}

impl std::fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when the event kind itself says the subject is a directory.
#[must_use]
pub const fn is_folder_kind(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(CreateKind::Folder) | EventKind::Remove(RemoveKind::Folder)
    )
}

/// One file change line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeRecord {
    pub path: String,
    pub event: ChangeEvent,
    pub git_status: String,
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
    pub is_directory: bool,
}

impl ChangeRecord {
    pub fn new(path: impl Into<String>, event: ChangeEvent, git_status: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            event,
            git_status: git_status.into(),
            timestamp: now_secs(),
            is_directory: false,
        }
    }
}

/// Every line the watcher writes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WatchRecord {
    Change(ChangeRecord),
    Status {
        status: &'static str,
        path: String,
    },
    Error {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<String>,
    },
}

impl WatchRecord {
    pub fn watching(path: impl Into<String>) -> Self {
        Self::Status {
            status: "watching",
            path: path.into(),
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self::Error {
            error: error.into(),
            path: None,
        }
    }

    pub fn error_at(error: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Error {
            error: error.into(),
            path: Some(path.into()),
        }
    }
}

fn now_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |d| d.as_secs_f64())
}
