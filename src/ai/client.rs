// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Chat-completion client.
//!
//! ```text
//! POST {base_url}/chat/completions
//!   Authorization: Bearer <key>
//!   HTTP-Referer, X-Title
//!   { model, messages: [system, user], temperature, max_tokens }
//!        |
//!        v
//! 200 -> choices[0].message.content -> clean_message()
//! else -> RemoteApiError::HttpStatus
//! ```

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;
use tracing::debug;

use super::prompt::SYSTEM_PROMPT;
use crate::config::types::AiConfig;
use crate::error::{DeckResult, RemoteApiError};

/// Global HTTP client, reused for every request.
fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(format!("gitdeck/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    model: Option<String>,
    usage: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

/// A generated message with the model's bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub message: String,
    /// `unknown` when the response omits it.
    pub model: String,
    /// Token usage object; `{}` when absent.
    pub usage: Value,
}

/// Strip code fences and one pair of surrounding double quotes.
#[must_use]
pub fn clean_message(raw: &str) -> String {
    let message = raw.trim().replace("```", "");
    let message = message.trim();
    let message = message
        .strip_prefix('"')
        .and_then(|m| m.strip_suffix('"'))
        .unwrap_or(message);
    message.trim().to_string()
}

/// Request a commit message for `prompt`.
///
/// # Errors
///
/// Returns `RemoteApiError::MissingApiKey` if no key is configured,
/// `HttpStatus` for non-200 answers, `Request` for transport failures and
/// `MalformedResponse` if the body has no message.
pub async fn request_completion(config: &AiConfig, prompt: &str) -> DeckResult<Completion> {
    let api_key = config
        .resolve_api_key()
        .ok_or_else(|| RemoteApiError::MissingApiKey {
            env_var: config.api_key_env.clone(),
        })?;

    let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
    let body = ChatRequest {
        model: &config.model,
        messages: [
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT,
            },
            ChatMessage {
                role: "user",
                content: prompt,
            },
        ],
        temperature: config.temperature,
        max_tokens: config.max_tokens,
    };

    debug!(url = %url, model = %config.model, "requesting commit message");
    let response = global_client()
        .post(&url)
        .bearer_auth(&api_key)
        .header("HTTP-Referer", &config.referer)
        .header("X-Title", &config.title)
        .json(&body)
        .timeout(config.timeout())
        .send()
        .await
        .map_err(RemoteApiError::Request)?;

    let status = response.status();
    let text = response.text().await.map_err(RemoteApiError::Request)?;
    if status != reqwest::StatusCode::OK {
        return Err(RemoteApiError::HttpStatus {
            status: status.as_u16(),
            body: text,
        }
        .into());
    }

    let parsed: ChatResponse = serde_json::from_str(&text)
        .map_err(|e| RemoteApiError::MalformedResponse(e.to_string()))?;
    let content = parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| RemoteApiError::MalformedResponse("no choices in response".to_string()))?;

    Ok(Completion {
        message: clean_message(&content),
        model: parsed.model.unwrap_or_else(|| "unknown".to_string()),
        usage: parsed
            .usage
            .unwrap_or_else(|| Value::Object(serde_json::Map::new())),
    })
}
