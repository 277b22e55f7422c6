// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env file grammar: `KEY = VALUE` or, in quoted mode, `KEY = "VALUE"`.
//!
//! Only the first `=` splits, so values may contain `=` and `#`.
//! Repeated keys overwrite earlier ones.

use tracing::debug;

use super::{EnvSyntax, Parser, parse_lines};
use crate::error::{InputRole, ParseError, ParseErrorKind};

impl Parser<'_> {
    /// Parses env file text and merges it into the entries.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for the first line without `=` or, in
    /// [`EnvSyntax::Quoted`] mode, without a double-quoted value.
    pub fn parse_env(&mut self, text: &str) -> Result<(), ParseError> {
        parse_lines(text, InputRole::Env, |line| self.env_line(line))
    }

    fn env_line(&mut self, line: &str) -> Result<(), ParseErrorKind> {
        let (key, value) = line.split_once('=').ok_or(ParseErrorKind::Separator)?;
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() {
            return Err(ParseErrorKind::Separator);
        }
        let value = match self.env_syntax {
            EnvSyntax::Plain => value,
            EnvSyntax::Quoted => unquote(value).ok_or(ParseErrorKind::Enclose)?,
        };

        if self
            .entries
            .insert(key.to_string(), value.to_string())
            .is_some()
        {
            debug!(key, "env entry overrides earlier value");
        } else {
            debug!(key, "env entry");
        }
        Ok(())
    }
}

/// Strips the surrounding quotes. A lone `"` both opens and closes.
fn unquote(value: &str) -> Option<&str> {
    let inner = value.strip_prefix('"')?;
    if inner.is_empty() {
        return Some(inner);
    }
    inner.strip_suffix('"')
}
