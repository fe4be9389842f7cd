// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scripted executor for unit tests.

use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use super::executor::{CommandResult, GitExecutor};

/// Answers each argument list (joined with spaces) from a fixed table.
///
/// Unscripted invocations fail with `unscripted: <args>`.
pub(crate) struct ScriptedExecutor {
    root: PathBuf,
    responses: HashMap<String, CommandResult>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedExecutor {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn on(mut self, args: &str, result: CommandResult) -> Self {
        self.responses.insert(args.to_string(), result);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

impl GitExecutor for ScriptedExecutor {
    fn repo_root(&self) -> &Path {
        &self.root
    }

    fn default_timeout(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn status_timeout(&self) -> Duration {
        Duration::from_secs(5)
    }

    fn run_with_timeout(
        &self,
        args: &[&str],
        _timeout: Duration,
    ) -> impl Future<Output = CommandResult> + Send {
        let key = args.join(" ");
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(key.clone());
        let result = self
            .responses
            .get(&key)
            .cloned()
            .unwrap_or_else(|| CommandResult::failure(format!("unscripted: {key}")));
        std::future::ready(result)
    }
}
