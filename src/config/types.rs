// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! [global]    log_level, file_log_level, log_file
//! [generate]  env, config, output, language, env_syntax, encode
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::emit::Language;
use crate::logging::LogLevel;
use crate::parser::EnvSyntax;

/// Global options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Console log level (0-5).
    pub log_level: LogLevel,
    /// File log level (0-5), falls back to `log_level`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_log_level: Option<LogLevel>,
    /// Path to log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Defaults for the `generate` and `check` commands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Env file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<PathBuf>,
    /// Config file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<PathBuf>,
    /// Generated file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Generated source language.
    pub language: Language,
    /// Env file value syntax.
    pub env_syntax: EnvSyntax,
    /// Force encoding regardless of the config file's `encode` directive.
    pub encode: bool,
}
