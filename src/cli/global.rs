// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options shared by every binary.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     <- explicit config file (env GITDECK_CONFIG)
//! --log-level N     <- console verbosity (0-6)
//! --file-log-level  <- file verbosity (falls back to --log-level)
//! --log-file FILE   <- enables file logging
//!
//! Precedence: CLI flags > GITDECK_* env > --config > gitdeck.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;

/// Global options available on every binary, before or after positionals.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to a TOML configuration file.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        env = "GITDECK_CONFIG",
        global = true
    )]
    pub config: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(
        short = 'l',
        long = "log-level",
        value_name = "LEVEL",
        value_parser = clap::value_parser!(u8).range(0..=6),
        global = true
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(
        long = "file-log-level",
        value_name = "LEVEL",
        value_parser = clap::value_parser!(u8).range(0..=6),
        global = true
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Converts command-line options to `(key, value)` configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level", level.to_string()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level", level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file", path.display().to_string()));
        }

        overrides
    }

    /// Layers the overrides on top of `loader`.
    #[must_use]
    pub fn apply(&self, loader: ConfigLoader) -> ConfigLoader {
        self.to_config_overrides()
            .into_iter()
            .fold(loader, |loader, (key, value)| loader.with_override(key, value))
    }
}
