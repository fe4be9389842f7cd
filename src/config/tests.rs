// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use super::Config;
use super::types::QueryBackend;
use crate::logging::LogLevel;

#[test]
fn test_defaults() {
    let config = Config::parse("").expect("empty config is valid");
    assert_eq!(config.global.output_log_level, LogLevel::WARN);
    assert_eq!(config.git.program, "git");
    assert_eq!(config.git.timeout(), Duration::from_secs(30));
    assert_eq!(config.git.status_timeout(), Duration::from_secs(5));
    assert_eq!(config.git.query_backend, QueryBackend::Shell);
    assert!(!config.tree.respect_gitignore);
    assert_eq!(config.ai.model, "openai/gpt-3.5-turbo");
    assert_eq!(config.ai.max_tokens, 150);
    assert_eq!(config.watch.initial_scan_timeout(), Duration::from_secs(10));
}

#[test]
fn test_parse_sections() {
    let config = Config::parse(
        r#"
        [git]
        timeout_secs = 60
        query_backend = "gix"

        [tree]
        respect_gitignore = true

        [ai]
        base_url = "http://127.0.0.1:9999/v1"
        api_key = "sk-test"

        [watch]
        ignore = ["node_modules/**", "*.swp"]
        "#,
    )
    .expect("valid config");

    assert_eq!(config.git.timeout_secs, 60);
    assert_eq!(config.git.query_backend, QueryBackend::Gix);
    assert!(config.tree.respect_gitignore);
    assert_eq!(config.ai.base_url, "http://127.0.0.1:9999/v1");
    assert_eq!(config.ai.resolve_api_key().as_deref(), Some("sk-test"));
    assert_eq!(config.watch.ignore.len(), 2);
}

#[test]
fn test_unknown_key_rejected() {
    let err = Config::parse("[git]\ntimeout = 3\n").expect_err("unknown key");
    assert!(err.to_string().contains("timeout"), "{err}");
}

#[test]
fn test_zero_timeout_rejected() {
    let err = Config::parse("[git]\ntimeout_secs = 0\n").expect_err("zero timeout");
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'timeout_secs' in section '[git]': must be greater than zero");
}

#[test]
fn test_bad_ignore_glob_rejected() {
    let err = Config::parse("[watch]\nignore = [\"a/**b\"]\n").expect_err("bad glob");
    assert!(err.to_string().contains("[watch]"), "{err}");
}

#[test]
fn test_set_override_wins() {
    let config = Config::builder()
        .add_toml_str("[global]\noutput_log_level = 1\n")
        .with_override("global.output_log_level", "4")
        .build()
        .expect("valid config");
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
}

#[test]
fn test_query_backend_from_str() {
    assert_eq!("GIX".parse::<QueryBackend>().ok(), Some(QueryBackend::Gix));
    assert!("libgit2".parse::<QueryBackend>().is_err());
}

#[test]
fn test_blank_api_key_treated_as_missing() {
    let config = Config::parse(
        "[ai]\napi_key = \"  \"\napi_key_env = \"GITDECK_TEST_UNSET_KEY_VAR\"\n",
    )
    .expect("valid config");
    assert_eq!(config.ai.resolve_api_key(), None);
}
