// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. gitdeck.toml (cwd, optional)
//! 3. --config FILE / GITDECK_CONFIG
//! 4. GITDECK_* env vars
//! 5. CLI overrides (--log-level, --log-file)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GITDECK_GIT__TIMEOUT_SECS=60      → git.timeout_secs = 60
//! GITDECK_AI__MODEL=openai/gpt-4o   → ai.model = "openai/gpt-4o"
//! GITDECK_GIT__QUERY_BACKEND=gix    → git.query_backend = "gix"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{AiConfig, GitConfig, GlobalConfig, TreeConfig, WatchConfig};

/// Name of the optional configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "gitdeck.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "GITDECK";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    pub git: GitConfig,
    pub tree: TreeConfig,
    pub ai: AiConfig,
    pub watch: WatchConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitdeck::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("gitdeck.toml")
    ///     .with_env_prefix("GITDECK")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for zero timeouts, an empty git
    /// program, or a watcher ignore glob that does not compile.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let invalid = |section: &str, key: &str, message: &str| ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            message: message.to_string(),
        };

        if self.git.program.trim().is_empty() {
            return Err(invalid("git", "program", "must not be empty"));
        }
        if self.git.timeout_secs == 0 {
            return Err(invalid("git", "timeout_secs", "must be greater than zero"));
        }
        if self.git.status_timeout_secs == 0 {
            return Err(invalid(
                "git",
                "status_timeout_secs",
                "must be greater than zero",
            ));
        }
        if self.ai.timeout_secs == 0 {
            return Err(invalid("ai", "timeout_secs", "must be greater than zero"));
        }
        if self.watch.initial_scan_timeout_secs == 0 {
            return Err(invalid(
                "watch",
                "initial_scan_timeout_secs",
                "must be greater than zero",
            ));
        }
        for pattern in &self.watch.ignore {
            if let Err(e) = wax::Glob::new(pattern) {
                return Err(invalid("watch", "ignore", &format!("'{pattern}': {e}")));
            }
        }
        Ok(())
    }
}
