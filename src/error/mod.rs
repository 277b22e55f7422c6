// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!       BuildEnvError (~24 bytes)
//!                 |
//!   +-------+-----+-----+
//!   |       |     |     |
//!   v       v     v     v
//! Bail   Parse  Cfg    Fs
//! str     Box   Box   Box
//!
//! Sub-errors (unboxed internally):
//!   Parse   line + ParseErrorKind (separator, keyword, at, ...)
//!   Config  ParseError, InvalidValue
//!   Fs      ReadError, NonUtf8, WriteError
//! ```
//!
//! Boxed sub-errors display transparently.

use std::fmt;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`BuildEnvError`].
pub type BuildEnvResult<T> = std::result::Result<T, BuildEnvError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum BuildEnvError {
    /// Fatal error that should terminate the application.
    #[error("{0}")]
    Bailed(Box<str>),

    /// Input file failed to parse.
    #[error(transparent)]
    Parse(#[from] Box<SourcedParseError>),

    /// Tool configuration error.
    #[error(transparent)]
    Config(#[from] Box<ConfigError>),

    /// Filesystem error.
    #[error(transparent)]
    Fs(#[from] Box<FsError>),
}

/// Create a fatal [`BuildEnvError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> BuildEnvError {
    BuildEnvError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for BuildEnvError {
                fn from(err: $error) -> Self {
                    BuildEnvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    SourcedParseError => Parse,
    ConfigError => Config,
    FsError => Fs,
}

// --- Parse Errors ---

/// Which input a parse error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    /// Plain `KEY = VALUE` file.
    Env,
    /// Directive/indirection config file.
    Config,
}

impl fmt::Display for InputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env => f.write_str("env"),
            Self::Config => f.write_str("config"),
        }
    }
}

/// What went wrong on a rejected input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Line lacks a recognised delimiter.
    #[error("no '=' or ':' separator")]
    Separator,

    /// Directive name is not a known setting.
    #[error("illegal keyword")]
    Keyword,

    /// Assignment value does not start with `$`.
    #[error("no $ symbol before env variable")]
    At,

    /// `access` directive value is not a known access level.
    #[error("wrong access spec, must be one of public, package, internal")]
    AccessSpec,

    /// `encode` directive value is not `yes` or `no`.
    #[error("wrong encode spec, must be yes or no")]
    EncodeSpec,

    /// Config assignment redefines an existing key.
    #[error("key {key} already exists")]
    KeyExist { key: String },

    /// Required environment variable is unset.
    #[error("no environment variable {key}")]
    Env { key: String },

    /// Quoted env value is not wrapped in double quotes.
    #[error("string must be surrounded by double quotation marks (\")")]
    Enclose,
}

/// A parse failure located in one of the inputs.
///
/// Parsing aborts on the first failing line; no partial state is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Input the failing line belongs to.
    pub role: InputRole,
    /// 0-based line index.
    pub line: usize,
    /// Failure kind.
    pub kind: ParseErrorKind,
}

impl ParseError {
    #[must_use]
    pub const fn new(role: InputRole, line: usize, kind: ParseErrorKind) -> Self {
        Self { role, line, kind }
    }

    /// 1-based line number for reporting.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line + 1
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error in line {} of {} file: {}",
            self.line_number(),
            self.role,
            self.kind
        )
    }
}

impl std::error::Error for ParseError {}

/// A [`ParseError`] tied to the file it was read from.
#[derive(Debug)]
pub struct SourcedParseError {
    pub path: String,
    pub error: ParseError,
}

impl fmt::Display for SourcedParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error in line {} of {}: {}",
            self.error.line_number(),
            self.path,
            self.error.kind
        )
    }
}

impl std::error::Error for SourcedParseError {}

// --- Config Errors ---

/// Tool configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to load or deserialize configuration sources.
    #[error("config error: {message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Failed to read an input file.
    #[error("failed to read '{path}'")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file is not valid UTF-8.
    #[error("non-UTF-8 content in '{path}' at byte {offset}")]
    NonUtf8 { path: String, offset: usize },

    /// Failed to write the generated file.
    #[error("write error '{path}'")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
