// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `gitdeck-git` entry point.
//!
//! ```text
//! parse --> bootstrap --> run_git_command --> one JSON line
//!   usage errors: exit 1; everything else: exit 0
//! ```

use clap::Parser;
use clap::error::ErrorKind;
use std::process::ExitCode;

use gitdeck::cli::error_detail;
use gitdeck::cli::git::{GIT_USAGE, GitCli};
use gitdeck::cmd::bootstrap::bootstrap;
use gitdeck::cmd::git::run_git_command;
use gitdeck::cmd::output::{JsonEmitter, failure};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn usage_error(detail: &str) -> ExitCode {
    let _ = JsonEmitter::stdout().emit(&failure(format!("Usage: {GIT_USAGE}: {detail}")));
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match GitCli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => return usage_error(&error_detail(&e)),
    };
    let Some(command) = &cli.command else {
        return usage_error("missing command");
    };

    let (config, _log_guard) = match bootstrap(&cli.global) {
        Ok(ready) => ready,
        Err(e) => {
            let _ = JsonEmitter::stdout().emit(&failure(format!("{e:#}")));
            return ExitCode::FAILURE;
        }
    };

    let value = run_git_command(command, &config).await;
    match JsonEmitter::stdout().emit(&value) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
