// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::HashMap;

use super::event::ChangeEvent;

/// Last reported `(event, git_status)` per path.
#[derive(Debug, Default)]
pub struct DedupState {
    last: HashMap<String, (ChangeEvent, String)>,
}

impl DedupState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pair; returns `true` when it differs from the last one.
    pub fn observe(&mut self, path: &str, event: ChangeEvent, git_status: &str) -> bool {
        match self.last.get_mut(path) {
            Some((last_event, last_status)) if *last_event == event && last_status == git_status => {
                false
            }
            Some(entry) => {
                *entry = (event, git_status.to_string());
                true
            }
            None => {
                self.last
                    .insert(path.to_string(), (event, git_status.to_string()));
                true
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.last.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }
}
