// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use serde_json::{Value, json};
use std::path::Path;
use tracing::debug;

use super::output::to_json;
use crate::ai::{generate_commit_message, parse_changes};
use crate::config::types::AiConfig;
use crate::error::DeckError;

/// `{"success": false, "error": <message>, "message": null}`
#[must_use]
pub fn ai_failure(error: impl Into<String>) -> Value {
    json!({ "success": false, "error": error.into(), "message": null })
}

/// Generate a commit message for `changes_json`.
///
/// # Errors
///
/// Returns the failure record when `changes_json` is not a change list.
pub async fn run_ai_commit(
    repo_path: &Path,
    changes_json: &str,
    config: &AiConfig,
) -> std::result::Result<Value, Value> {
    let changes = parse_changes(changes_json).map_err(|e| match e {
        DeckError::Parse(inner) => ai_failure(inner.to_string()),
        other => ai_failure(other.to_string()),
    })?;
    debug!(repo = %repo_path.display(), changes = changes.len(), "generating commit message");
    Ok(to_json(&generate_commit_message(config, &changes).await))
}
