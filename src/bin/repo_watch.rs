// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `gitdeck-watch` entry point. Runs until Ctrl-C.

use clap::Parser;
use clap::error::ErrorKind;
use std::process::ExitCode;

use gitdeck::cli::error_detail;
use gitdeck::cli::watch::WatchCli;
use gitdeck::cmd::bootstrap::bootstrap;
use gitdeck::cmd::output::JsonEmitter;
use gitdeck::cmd::watch::{cancel_on_ctrl_c, run_watch};
use gitdeck::watch::WatchRecord;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn fail(error: impl Into<String>) -> ExitCode {
    let _ = JsonEmitter::stdout().emit(&WatchRecord::error(error));
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match WatchCli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => return fail(error_detail(&e)),
    };
    let Some(repo_path) = &cli.repo_path else {
        return fail("Missing repository path argument");
    };

    let (config, _log_guard) = match bootstrap(&cli.global) {
        Ok(ready) => ready,
        Err(e) => return fail(format!("{e:#}")),
    };

    let mut emitter = JsonEmitter::stdout();
    if run_watch(repo_path, &config, cancel_on_ctrl_c(), &mut emitter).await {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
