// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    ArgumentError, ConfigError, DeckError, DeckResult, FsError, ProcessError, RemoteApiError,
};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "git".to_string(),
        key: "timeout_secs".to_string(),
        message: "must be greater than zero".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'timeout_secs' in section '[git]': must be greater than zero");
}

#[test]
fn test_timeout_display_matches_wire_text() {
    let err = ProcessError::Timeout {
        command: "git status".to_string(),
        timeout_secs: 30,
    };
    assert_eq!(err.to_string(), "Command timed out after 30 seconds");
}

#[test]
fn test_remote_api_error_display() {
    let status = RemoteApiError::HttpStatus {
        status: 401,
        body: "unauthorized".to_string(),
    };
    let missing = RemoteApiError::MissingApiKey {
        env_var: "OPENROUTER_API_KEY".to_string(),
    };
    insta::assert_snapshot!(status.to_string(), @"API error: 401 - unauthorized");
    insta::assert_snapshot!(
        missing.to_string(),
        @"OpenRouter API key not found. Set OPENROUTER_API_KEY environment variable."
    );
}

#[test]
fn test_transparent_variants_keep_inner_message() {
    let fs: DeckError = FsError::NotARepository("/tmp/x".to_string()).into();
    let arg: DeckError = ArgumentError::Missing {
        what: "commit message".to_string(),
    }
    .into();
    assert_eq!(fs.to_string(), "Not a git repository: /tmp/x");
    assert_eq!(arg.to_string(), "Missing commit message");
}

#[test]
fn test_deck_error_size() {
    // Thin box plus discriminant
    let size = std::mem::size_of::<DeckError>();
    assert!(size <= 16, "DeckError is {size} bytes, expected <= 16");
}

#[test]
fn test_deck_result_size() {
    let size = std::mem::size_of::<DeckResult<()>>();
    assert!(size <= 24, "DeckResult<()> is {size} bytes, expected <= 24");
}
