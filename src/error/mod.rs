// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              DeckError (16 bytes)
//!                     |
//!   +------+------+---+---+------+------+
//!   |      |      |       |      |      |
//!   v      v      v       v      v      v
//! Proc   Parse   Arg   Remote   Fs    Git    Cfg
//!  Box    Box    Box    Box     Box   Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Process  ExecutableNotFound, SpawnFailed, NonZeroExit, Timeout
//!   Parse    InvalidJson
//!   Argument Missing
//!   Remote   MissingApiKey, HttpStatus, Request, MalformedResponse
//!   Fs       NotFound, NotARepository, IoError
//!   Git      CommandFailed, Gix
//!   Config   InvalidValue
//!
//! All variants boxed => DeckError is one pointer plus a tag.
//! ```
//!
//! Every error reaching a binary boundary is turned into a JSON record;
//! nothing here is ever printed raw on stdout.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`DeckError`].
pub type DeckResult<T> = std::result::Result<T, DeckError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at 16 bytes on the stack.
#[derive(Debug, Error)]
pub enum DeckError {
    /// Subprocess invocation failed.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Input could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] Box<ParseError>),

    /// Invalid or missing command-line argument.
    #[error("{0}")]
    Argument(#[from] Box<ArgumentError>),

    /// Remote API call failed.
    #[error("{0}")]
    RemoteApi(#[from] Box<RemoteApiError>),

    /// Filesystem error.
    #[error("{0}")]
    Fs(#[from] Box<FsError>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for DeckError {
                fn from(err: $error) -> Self {
                    DeckError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ProcessError => Process,
    ParseError => Parse,
    ArgumentError => Argument,
    RemoteApiError => RemoteApi,
    FsError => Fs,
    GitError => Git,
    ConfigError => Config,
}

// --- Process Errors ---

/// Subprocess invocation errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Process timed out and was killed.
    #[error("Command timed out after {timeout_secs} seconds")]
    Timeout { command: String, timeout_secs: u64 },

    /// Failed to wait on the process or read its output.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },
}

// --- Parse Errors ---

/// Errors produced while decoding input documents.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A JSON document failed to decode.
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

// --- Argument Errors ---

/// Command-line argument errors.
#[derive(Debug, Error)]
pub enum ArgumentError {
    /// A required argument is absent.
    #[error("Missing {what}")]
    Missing { what: String },
}

// --- Remote API Errors ---

/// Chat-completion API errors.
#[derive(Debug, Error)]
pub enum RemoteApiError {
    /// No API key was configured.
    #[error("OpenRouter API key not found. Set {env_var} environment variable.")]
    MissingApiKey { env_var: String },

    /// The API answered with a non-success status.
    #[error("API error: {status} - {body}")]
    HttpStatus { status: u16, body: String },

    /// Error from reqwest library.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body did not contain a usable message.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("Repository not found: {0}")]
    NotFound(String),

    /// Path exists but has no `.git` entry.
    #[error("Not a git repository: {0}")]
    NotARepository(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

#[cfg(test)]
mod tests;
