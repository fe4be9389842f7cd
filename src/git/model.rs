// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared value types for status and tree output.

use serde::{Deserialize, Serialize};

/// Coarse classification of a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
    Renamed,
    Untracked,
}

impl ChangeKind {
    /// Classify a porcelain or `--name-status` code by its first character.
    ///
    /// Codes outside `A`, `M`, `D`, `R` and `??` count as modifications.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        let code = code.trim();
        if code == "??" {
            return Self::Untracked;
        }
        match code.chars().next() {
            Some('A') => Self::Added,
            Some('D') => Self::Deleted,
            Some('R') => Self::Renamed,
            _ => Self::Modified,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Modified => "Modified",
            Self::Deleted => "Deleted",
            Self::Renamed => "Renamed",
            Self::Untracked => "Untracked",
        }
    }
}

fn default_status() -> String {
    "M".to_string()
}

/// One changed path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    /// Raw code, e.g. `M`, `A`, `R100`, `??`.
    #[serde(default = "default_status")]
    pub status: String,
    /// Repository-relative path; the destination for renames.
    #[serde(rename = "file", default)]
    pub path: String,
    /// Source path of a rename or copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl FileChange {
    pub fn new(status: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            path: path.into(),
            from: None,
        }
    }

    #[must_use]
    pub fn renamed(status: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            path: to.into(),
            from: Some(from.into()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ChangeKind {
        ChangeKind::from_code(&self.status)
    }
}

/// Node type in a [`TreeNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    File,
    Folder,
}

/// Hierarchical view of repository files.
///
/// Folders always carry `children` (possibly empty); files never do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Slash-joined path relative to the repository root; `.` for the root.
    pub path: String,
    /// Porcelain code for files, empty for folders and clean files.
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    pub fn folder(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node_type: NodeType::Folder,
            path: path.into(),
            status: String::new(),
            children: Some(Vec::new()),
        }
    }

    pub fn file(name: impl Into<String>, path: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node_type: NodeType::File,
            path: path.into(),
            status: status.into(),
            children: None,
        }
    }

    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.node_type == NodeType::Folder
    }

    /// Children of a folder; empty for files.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Leaf file paths in depth-first, first-encountered order.
    #[must_use]
    pub fn file_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut stack: Vec<&Self> = vec![self];
        while let Some(node) = stack.pop() {
            if node.is_folder() {
                stack.extend(node.children().iter().rev());
            } else {
                out.push(node.path.clone());
            }
        }
        out
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        if self.is_folder() {
            self.children().iter().map(Self::file_count).sum()
        } else {
            1
        }
    }
}
