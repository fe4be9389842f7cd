// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit message generation.
//!
//! ```text
//! changes_json --> parse_changes --> build_prompt --> request_completion
//!                                                        |
//!                                          ok  <---------+---------> err
//!                                           |                         |
//!                                  { message, model, usage }   fallback_message
//!                                                              model "fallback"
//!                                                              warning
//! ```
//!
//! Generation always succeeds; remote failures only downgrade the result.

pub mod client;
pub mod fallback;
pub mod prompt;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::config::types::AiConfig;
use crate::error::{DeckResult, ParseError};
use crate::git::model::FileChange;

/// Model name reported for offline messages.
pub const FALLBACK_MODEL: &str = "fallback";

/// JSON answer of the commit message generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitSuggestion {
    pub success: bool,
    pub message: String,
    pub model: String,
    pub usage: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Parse the `[{status, file}]` argument; a missing status means `M`.
///
/// # Errors
///
/// Returns `ParseError::InvalidJson` if the text is not an array of changes.
pub fn parse_changes(json: &str) -> DeckResult<Vec<FileChange>> {
    serde_json::from_str(json).map_err(|e| ParseError::InvalidJson(e).into())
}

/// Ask the chat API for a message, falling back to a local one on any error.
pub async fn generate_commit_message(config: &AiConfig, changes: &[FileChange]) -> CommitSuggestion {
    let prompt = prompt::build_prompt(changes);
    match client::request_completion(config, &prompt).await {
        Ok(completion) => CommitSuggestion {
            success: true,
            message: completion.message,
            model: completion.model,
            usage: completion.usage,
            warning: None,
        },
        Err(e) => {
            warn!(error = %e, "commit message request failed; using fallback");
            CommitSuggestion {
                success: true,
                message: fallback::fallback_message(changes),
                model: FALLBACK_MODEL.to_string(),
                usage: Value::Object(serde_json::Map::new()),
                warning: Some(format!("Using fallback message: {e}")),
            }
        }
    }
}
