// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Flat path list to nested [`TreeNode`] conversion.
//!
//! ```text
//! ["src/a.rs", "src/b/c.rs", "README.md"]
//!              |
//!              v
//! repo/ (path ".")
//!   src/
//!     a.rs
//!     b/
//!       c.rs
//!   README.md
//! ```
//!
//! Children keep first-encountered order. The first insertion wins: a
//! path whose last segment already exists, or that would descend through
//! an existing file, is dropped.

use std::collections::BTreeMap;
use tracing::debug;

use super::model::TreeNode;

/// Build a tree rooted at `root_name` from repository-relative paths.
///
/// File nodes take their status from `status_map`; folders never carry one.
#[must_use]
pub fn build_tree<S: AsRef<str>>(
    root_name: &str,
    files: &[S],
    status_map: &BTreeMap<String, String>,
) -> TreeNode {
    let mut root = TreeNode::folder(root_name, ".");
    for file in files {
        insert_path(&mut root, file.as_ref(), status_map);
    }
    root
}

fn insert_path(root: &mut TreeNode, file: &str, status_map: &BTreeMap<String, String>) {
    let segments: Vec<&str> = file.split('/').filter(|s| !s.is_empty()).collect();
    let Some((last, parents)) = segments.split_last() else {
        return;
    };

    let mut current = root;
    let mut path = String::new();

    for segment in parents {
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(segment);

        let Some(children) = current.children.as_mut() else {
            return;
        };
        let index = match children.iter().position(|c| c.name == *segment) {
            Some(index) if children[index].is_folder() => index,
            Some(_) => {
                debug!(file, conflict = %path, "path descends through a file; skipped");
                return;
            }
            None => {
                children.push(TreeNode::folder(*segment, path.clone()));
                children.len() - 1
            }
        };
        current = &mut children[index];
    }

    let Some(children) = current.children.as_mut() else {
        return;
    };
    if children.iter().any(|c| c.name == *last) {
        debug!(file, "duplicate tree entry; first insertion kept");
        return;
    }
    if !path.is_empty() {
        path.push('/');
    }
    path.push_str(last);
    let status = status_map.get(&path).cloned().unwrap_or_default();
    children.push(TreeNode::file(*last, path, status));
}
