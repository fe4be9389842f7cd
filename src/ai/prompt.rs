// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt::Write;

use crate::git::model::FileChange;

pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that generates professional Git commit messages.";

const INSTRUCTIONS: &str = "\
The commit message should:
1. Start with a conventional commit type (feat, fix, docs, style, refactor, perf, test, chore)
2. Be clear and descriptive
3. Focus on the \"why\" not just the \"what\"
4. Be under 72 characters for the title
5. Include a brief body if necessary

Provide only the commit message, no explanations.";

/// One `- <Label>: <file>` line per change.
#[must_use]
pub fn summarize_changes(changes: &[FileChange]) -> String {
    let mut out = String::new();
    for (i, change) in changes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "- {}: {}", change.kind().label(), change.path);
    }
    out
}

/// User prompt for the chat completion.
#[must_use]
pub fn build_prompt(changes: &[FileChange]) -> String {
    format!(
        "Generate a concise, professional Git commit message based on these changes:\n\n{}\n\n{INSTRUCTIONS}",
        summarize_changes(changes)
    )
}
