// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Write;
use std::path::Path;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::output::JsonEmitter;
use crate::config::Config;
use crate::git::executor::ShellExecutor;
use crate::watch::{WatchRecord, WatchSession, check_repository};

/// Token cancelled on the first Ctrl-C.
#[must_use]
pub fn cancel_on_ctrl_c() -> CancellationToken {
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("interrupt received");
            token.cancel();
        }
    });
    cancel
}

/// Watch `repo_path` until `cancel` fires; returns `false` on fatal errors.
pub async fn run_watch<W: Write + Send>(
    repo_path: &Path,
    config: &Config,
    cancel: CancellationToken,
    emitter: &mut JsonEmitter<W>,
) -> bool {
    let mut emit = |record: &WatchRecord| {
        if let Err(e) = emitter.emit(record) {
            warn!(error = %e, "failed to write watch record");
        }
    };

    if let Err(e) = check_repository(repo_path) {
        emit(&WatchRecord::error(e.to_string()));
        return false;
    }

    let executor = ShellExecutor::from_config(repo_path, &config.git);
    let session = match WatchSession::new(executor, config.watch.clone()) {
        Ok(session) => session,
        Err(e) => {
            emit(&WatchRecord::error(format!("{e:#}")));
            return false;
        }
    };

    match session.run(cancel, |record| emit(&record)).await {
        Ok(()) => true,
        Err(e) => {
            emit(&WatchRecord::error(format!("Watcher crashed: {e:#}")));
            false
        }
    }
}
