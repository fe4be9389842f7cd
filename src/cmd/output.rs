// gitdeck: Git GUI backend helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use serde_json::{Value, json};
use std::io::{Stdout, Write};

use crate::error::Result;

/// Writes one JSON object per line and flushes after each.
pub struct JsonEmitter<W> {
    out: W,
}

impl JsonEmitter<Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> JsonEmitter<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn emit<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// `{"success": false, "error": <message>}`
#[must_use]
pub fn failure(message: impl Into<String>) -> Value {
    json!({ "success": false, "error": message.into() })
}

/// Serialize a result, degrading to [`failure`] if that is impossible.
#[must_use]
pub fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value)
        .unwrap_or_else(|e| failure(format!("failed to serialize result: {e}")))
}
