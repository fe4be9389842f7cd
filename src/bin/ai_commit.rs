// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `gitdeck-ai-commit` entry point.

use clap::Parser;
use clap::error::ErrorKind;
use std::process::ExitCode;

use gitdeck::cli::ai_commit::AiCommitCli;
use gitdeck::cli::error_detail;
use gitdeck::cmd::ai_commit::{ai_failure, run_ai_commit};
use gitdeck::cmd::bootstrap::bootstrap;
use gitdeck::cmd::output::JsonEmitter;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn fail(error: impl Into<String>) -> ExitCode {
    let _ = JsonEmitter::stdout().emit(&ai_failure(error));
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match AiCommitCli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => return fail(error_detail(&e)),
    };
    let (Some(repo_path), Some(changes_json)) = (&cli.repo_path, &cli.changes_json) else {
        return fail("Missing arguments: repo_path changes_json");
    };

    let (config, _log_guard) = match bootstrap(&cli.global) {
        Ok(ready) => ready,
        Err(e) => return fail(format!("{e:#}")),
    };

    let (value, code) = match run_ai_commit(repo_path, changes_json, &config.ai).await {
        Ok(value) => (value, ExitCode::SUCCESS),
        Err(value) => (value, ExitCode::FAILURE),
    };
    if let Err(e) = JsonEmitter::stdout().emit(&value) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }
    code
}
