// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::Context;
use std::path::{Component, Path, PathBuf};
use wax::{Glob, Program};

use crate::error::Result;
use crate::utility::fs::walk::to_slash_path;

/// Decides which event paths are reported, and under which relative name.
pub struct PathFilter {
    roots: Vec<PathBuf>,
    ignore: Vec<Glob<'static>>,
}

impl PathFilter {
    /// # Errors
    ///
    /// Returns an error if an ignore pattern is not a valid glob.
    pub fn new<S: AsRef<str>>(root: &Path, ignore: &[S]) -> Result<Self> {
        let mut roots = vec![root.to_path_buf()];
        if let Ok(canonical) = root.canonicalize()
            && canonical != root
        {
            roots.push(canonical);
        }

        let ignore = ignore
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Glob::new(pattern)
                    .map(Glob::into_owned)
                    .with_context(|| format!("Invalid glob pattern: {pattern}"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { roots, ignore })
    }

    /// Repository-relative slash path, or `None` if the event is dropped.
    #[must_use]
    pub fn relative(&self, path: &Path) -> Option<String> {
        let rel = self
            .roots
            .iter()
            .find_map(|root| path.strip_prefix(root).ok())?;

        if rel.as_os_str().is_empty()
            || rel
                .components()
                .any(|c| matches!(c, Component::Normal(name) if name == ".git"))
        {
            return None;
        }

        let rel = to_slash_path(rel);
        if self.ignore.iter().any(|glob| glob.is_match(rel.as_str())) {
            return None;
        }
        Some(rel)
    }
}
