// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration sources.
//!
//! ```text
//! defaults (serde)
//!   < gitdeck.toml in the working directory (optional)
//!   < --config <file> (required)
//!   < GITDECK_<SECTION>__<KEY> environment
//!   < command-line overrides
//!        |
//!        v
//!    build() --> deserialize --> validate() --> Config
//! ```
//!
//! Sources are only recorded here; nothing is read until `build()`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Environment, File, FileFormat};

use super::Config;
use crate::error::Result;

#[derive(Debug)]
enum Layer {
    File { path: PathBuf, required: bool },
    Inline(String),
}

/// Ordered set of configuration sources; later layers win.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    layers: Vec<Layer>,
    env_prefix: Option<String>,
    overrides: Vec<(String, String)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.layers.push(Layer::File {
            path: path.as_ref().to_path_buf(),
            required: true,
        });
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.layers.push(Layer::File {
            path: path.as_ref().to_path_buf(),
            required: false,
        });
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.layers.push(Layer::Inline(content.to_string()));
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` variables, e.g. `GITDECK_GIT__TIMEOUT_SECS`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Dotted `section.key` override applied above every other layer.
    #[must_use]
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Files that will contribute: required ones plus optional ones present now.
    #[must_use]
    pub fn loaded_files(&self) -> Vec<&Path> {
        self.layers
            .iter()
            .filter_map(|layer| match layer {
                Layer::File { path, required } if *required || path.is_file() => {
                    Some(path.as_path())
                }
                _ => None,
            })
            .collect()
    }

    /// Merge all layers, deserialize and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a source is not valid
    /// TOML, a key is unknown, or the merged values fail validation.
    pub fn build(self) -> Result<Config> {
        let mut builder = config::Config::builder();
        for layer in self.layers {
            builder = match layer {
                Layer::File { path, required } => builder
                    .add_source(File::from(path).format(FileFormat::Toml).required(required)),
                Layer::Inline(content) => {
                    builder.add_source(File::from_str(&content, FileFormat::Toml))
                }
            };
        }
        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        }
        for (key, value) in self.overrides {
            builder = builder
                .set_override(key.as_str(), value)
                .with_context(|| format!("invalid override key '{key}'"))?;
        }

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
