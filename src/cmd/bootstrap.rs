// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared startup for the binaries.
//!
//! ```text
//! GlobalOptions --> load_config --> log_config --> init_logging
//!   gitdeck.toml (optional), --config, GITDECK_* env, CLI overrides
//! ```

use anyhow::Context;

use crate::cli::global::GlobalOptions;
use crate::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use crate::error::Result;
use crate::logging::{LogConfig, LogGuard, init_logging};

/// Load the layered configuration for one invocation.
///
/// # Errors
///
/// Returns an error if an explicit config file is missing or any source is
/// invalid.
pub fn load_config(global: &GlobalOptions) -> Result<Config> {
    let mut loader = Config::builder().add_toml_file_optional(DEFAULT_CONFIG_FILE);
    if let Some(path) = &global.config {
        loader = loader.add_toml_file(path);
    }
    let loader = global.apply(loader.with_env_prefix(ENV_PREFIX));
    loader.build().context("failed to load configuration")
}

#[must_use]
pub fn log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .with_json_file(config.global.log_json)
        .build()
}

/// Load configuration and install logging.
///
/// # Errors
///
/// Returns an error if configuration loading or logging setup fails.
pub fn bootstrap(global: &GlobalOptions) -> Result<(Config, LogGuard)> {
    let config = load_config(global)?;
    let guard = init_logging(&log_config(&config))?;
    tracing::debug!(backend = %config.git.query_backend, model = %config.ai.model, "configuration loaded");
    Ok((config, guard))
}
