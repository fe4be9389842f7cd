// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::git::model::FileChange;

/// Message used when no commit categories apply.
pub const GENERIC_MESSAGE: &str = "chore: Update files";

fn count(changes: &[FileChange], code: &str) -> usize {
    changes.iter().filter(|c| c.status == code).count()
}

fn plural(verb: &str, n: usize) -> String {
    format!("{verb} {n} file{}", if n == 1 { "" } else { "s" })
}

/// Offline commit message built from exact `A`, `M` and `D` counts.
#[must_use]
pub fn fallback_message(changes: &[FileChange]) -> String {
    let parts: Vec<String> = [("Add", "A"), ("Update", "M"), ("Remove", "D")]
        .into_iter()
        .map(|(verb, code)| (verb, count(changes, code)))
        .filter(|&(_, n)| n > 0)
        .map(|(verb, n)| plural(verb, n))
        .collect();

    if parts.is_empty() {
        GENERIC_MESSAGE.to_string()
    } else {
        format!("feat: {}", parts.join(", "))
    }
}
