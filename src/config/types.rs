// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! Config: GlobalConfig, GitConfig, TreeConfig, AiConfig, WatchConfig
//! QueryBackend: shell (default) | gix
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// How read-only repository queries (current branch) are answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryBackend {
    /// Spawn the `git` CLI.
    #[default]
    Shell,
    /// Read the repository in-process with gix.
    Gix,
}

impl std::fmt::Display for QueryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shell => write!(f, "shell"),
            Self::Gix => write!(f, "gix"),
        }
    }
}

impl std::str::FromStr for QueryBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shell" => Ok(Self::Shell),
            "gix" => Ok(Self::Gix),
            _ => Err(ConfigError::InvalidValue {
                section: "git".to_string(),
                key: "query_backend".to_string(),
                message: format!("expected 'shell' or 'gix', got '{s}'"),
            }),
        }
    }
}

/// Global options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stderr output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    pub log_file: Option<PathBuf>,
    /// Write the log file as JSON lines.
    pub log_json: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::WARN,
            file_log_level: LogLevel::DEBUG,
            log_file: None,
            log_json: false,
        }
    }
}

/// Git invocation options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Program name or path of the git binary.
    pub program: String,
    /// Timeout for ordinary git commands.
    pub timeout_secs: u64,
    /// Timeout for single-file status checks.
    pub status_timeout_secs: u64,
    /// Backend used for branch queries.
    pub query_backend: QueryBackend,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            timeout_secs: 30,
            status_timeout_secs: 5,
            query_backend: QueryBackend::Shell,
        }
    }
}

impl GitConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub const fn status_timeout(&self) -> Duration {
        Duration::from_secs(self.status_timeout_secs)
    }
}

/// File tree listing options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeConfig {
    /// Leave out files matched by `.gitignore`.
    pub respect_gitignore: bool,
    /// List dotfiles other than `.git`.
    pub include_hidden: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            respect_gitignore: false,
            include_hidden: true,
        }
    }
}

/// Chat-completion API options for commit message generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AiConfig {
    /// API root; `/chat/completions` is appended.
    pub base_url: String,
    pub model: String,
    /// Literal API key; takes precedence over `api_key_env`.
    pub api_key: Option<String>,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
    /// Sent as `HTTP-Referer`.
    pub referer: String,
    /// Sent as `X-Title`.
    pub title: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: "openai/gpt-3.5-turbo".to_string(),
            api_key: None,
            api_key_env: "OPENROUTER_API_KEY".to_string(),
            temperature: 0.7,
            max_tokens: 150,
            timeout_secs: 30,
            referer: "http://localhost:3000".to_string(),
            title: "Modern Git GUI".to_string(),
        }
    }
}

impl AiConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolve the API key from the literal setting or the environment.
    #[must_use]
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

/// Repository watcher options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatchConfig {
    /// Timeout for the startup `status --porcelain` scan.
    pub initial_scan_timeout_secs: u64,
    /// Poll interval for backends that fall back to polling.
    pub poll_interval_ms: u64,
    /// Glob patterns (relative to the repository root) whose events are dropped.
    pub ignore: Vec<String>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            initial_scan_timeout_secs: 10,
            poll_interval_ms: 1000,
            ignore: Vec::new(),
        }
    }
}

impl WatchConfig {
    #[must_use]
    pub const fn initial_scan_timeout(&self) -> Duration {
        Duration::from_secs(self.initial_scan_timeout_secs)
    }

    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
