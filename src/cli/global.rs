// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! ```text
//! --ini FILE        ← Additional TOML settings files (can repeat)
//! --no-default-inis ← Skip ./buildenv.toml
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (falls back to --log-level)
//! --log-file FILE   ← Also log to FILE
//!
//! Precedence: CLI flags > BUILDENV_* env > --ini > buildenv.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::types::GlobalConfig;
use crate::logging::{LogConfig, LogLevel};

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML settings file(s).
    /// Can be specified multiple times.
    #[arg(short = 'i', long = "ini", value_name = "FILE", action = clap::ArgAction::Append)]
    pub inis: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5))]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5))]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Disables loading ./buildenv.toml, only uses --ini.
    #[arg(long = "no-default-inis")]
    pub no_default_inis: bool,
}

impl GlobalOptions {
    /// Builds the logging configuration, CLI flags over `[global]` settings.
    #[must_use]
    pub fn log_config(&self, global: &GlobalConfig) -> LogConfig {
        let console_level = self
            .log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(global.log_level);

        let file_level = self
            .file_log_level
            .and_then(LogLevel::from_u8)
            .or(global.file_log_level)
            .unwrap_or(console_level);

        let log_file = self
            .log_file
            .as_ref()
            .or(global.log_file.as_ref())
            .map(|p| p.display().to_string());

        LogConfig::builder()
            .with_console_level(console_level)
            .with_file_level(file_level)
            .maybe_with_log_file(log_file)
            .build()
    }
}
