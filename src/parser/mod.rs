// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config and env file parsing.
//!
//! # Pipeline
//!
//! ```text
//! Inputs { config?, env? }
//!        |
//!        v
//! parse_config()  name:/access:/encode: directives -> Settings
//!                 KEY = $VAR[?]  via EnvLookup      -> Entries (unique keys)
//!        |
//!        v
//! parse_env()     KEY = "VALUE" | KEY = VALUE       -> Entries (last write wins)
//!        |
//!        v
//! Parsed { settings, entries }
//! ```
//!
//! Blank lines and lines starting with `#` are skipped in both grammars.
//! The first failing line aborts the run with a [`ParseError`]. Its line
//! index does not count empty lines.

mod config;
mod dotenv;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::env::EnvLookup;
use crate::error::{InputRole, ParseError, ParseErrorKind};

/// Generated constants, keyed by constant name.
///
/// Sorted by key so the emitted file is stable across runs.
pub type Entries = BTreeMap<String, String>;

/// Default name of the generated container.
pub const DEFAULT_CONTAINER_NAME: &str = "BuildEnvironment";

/// Visibility of the generated container and its constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    #[default]
    Public,
    Package,
    Internal,
}

impl AccessLevel {
    /// All levels in declaration order.
    pub const ALL: [Self; 3] = [Self::Public, Self::Package, Self::Internal];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Package => "package",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = ParseErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or(ParseErrorKind::AccessSpec)
    }
}

/// Output settings controlled by config file directives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Name of the generated container.
    pub name: String,
    /// Container and constant visibility.
    pub access: AccessLevel,
    /// Emit obfuscated values instead of plain literals.
    pub encode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: DEFAULT_CONTAINER_NAME.to_string(),
            access: AccessLevel::Public,
            encode: false,
        }
    }
}

/// Env file value syntax.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EnvSyntax {
    /// `KEY = VALUE`, the right-hand side is taken literally.
    Plain,
    /// `KEY = "VALUE"`, the value must be double-quoted.
    #[default]
    Quoted,
}

impl fmt::Display for EnvSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("plain"),
            Self::Quoted => f.write_str("quoted"),
        }
    }
}

/// The inputs of one generation run. At least one file is always present.
#[derive(Debug, Clone, Copy)]
pub enum Inputs<'a> {
    Env(&'a str),
    Config(&'a str),
    Both { config: &'a str, env: &'a str },
}

impl<'a> Inputs<'a> {
    /// Returns `None` when neither input is supplied.
    #[must_use]
    pub const fn new(env: Option<&'a str>, config: Option<&'a str>) -> Option<Self> {
        match (env, config) {
            (Some(env), Some(config)) => Some(Self::Both { config, env }),
            (Some(env), None) => Some(Self::Env(env)),
            (None, Some(config)) => Some(Self::Config(config)),
            (None, None) => None,
        }
    }

    #[must_use]
    pub const fn env(&self) -> Option<&'a str> {
        match *self {
            Self::Env(env) | Self::Both { env, .. } => Some(env),
            Self::Config(_) => None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> Option<&'a str> {
        match *self {
            Self::Config(config) | Self::Both { config, .. } => Some(config),
            Self::Env(_) => None,
        }
    }
}

/// Result of a successful parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    pub settings: Settings,
    pub entries: Entries,
}

/// Incremental parser accumulating settings and entries.
///
/// Feed the config file first, then the env file; env entries overwrite
/// config entries without a uniqueness check.
pub struct Parser<'a> {
    lookup: &'a dyn EnvLookup,
    env_syntax: EnvSyntax,
    settings: Settings,
    entries: Entries,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(lookup: &'a dyn EnvLookup) -> Self {
        Self {
            lookup,
            env_syntax: EnvSyntax::default(),
            settings: Settings::default(),
            entries: Entries::new(),
        }
    }

    #[must_use]
    pub fn with_env_syntax(mut self, syntax: EnvSyntax) -> Self {
        self.env_syntax = syntax;
        self
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn finish(self) -> Parsed {
        Parsed {
            settings: self.settings,
            entries: self.entries,
        }
    }
}

/// Parses one generation run's inputs, config file first.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered in either input.
pub fn parse(
    inputs: Inputs<'_>,
    syntax: EnvSyntax,
    lookup: &dyn EnvLookup,
) -> Result<Parsed, ParseError> {
    let mut parser = Parser::new(lookup).with_env_syntax(syntax);
    if let Some(config) = inputs.config() {
        parser.parse_config(config)?;
    }
    if let Some(env) = inputs.env() {
        parser.parse_env(env)?;
    }
    Ok(parser.finish())
}

/// Yields `(index, trimmed line)` for every line that is neither blank nor a comment.
///
/// Empty lines are dropped before numbering, whitespace-only lines are not.
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(str::trim)
        .enumerate()
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Runs `parse_line` over each content line, tagging failures with `role` and line index.
fn parse_lines<F>(text: &str, role: InputRole, mut parse_line: F) -> Result<(), ParseError>
where
    F: FnMut(&str) -> Result<(), ParseErrorKind>,
{
    for (index, line) in content_lines(text) {
        parse_line(line).map_err(|kind| ParseError::new(role, index, kind))?;
    }
    Ok(())
}
