// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for buildenv using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! buildenv [global options] <command>
//! version
//! options
//! generate --output FILE [--env FILE] [--config FILE] [--encode] [--language L]
//! check    [--env FILE] [--config FILE] [--json]
//! ```

pub mod generate;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::generate::{CheckArgs, GenerateArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Build Environment Generator
///
/// Turns .env and buildenv config files into source code constants.
#[derive(Debug, Parser)]
#[command(
    name = "buildenv",
    author,
    version,
    about = "Build Environment Generator",
    long_about = "buildenv Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Generates a source file exposing environment values as named\n\
                  constants. Values come from an env file (KEY = \"VALUE\") and/or\n\
                  a config file (KEY = $VAR, name:, access:, encode:).",
    after_help = "CONFIG FILE SYNTAX:\n\n\
                  KEY = $VAR       value of environment variable VAR (required)\n\
                  KEY = $VAR?      same, but skipped if VAR is unset\n\
                  name: Ident      name of the generated container\n\
                  access: public|package|internal\n\
                  encode: yes|no   obfuscate values in the generated source\n\n\
                  TOOL SETTINGS:\n\n\
                  Defaults for every option are read from buildenv.toml in the\n\
                  current directory, any --ini file, and BUILDENV_SECTION__KEY\n\
                  environment variables. Command-line flags take precedence."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists the effective tool settings and the files they came from.
    Options,

    /// Generates the source file.
    Generate(GenerateArgs),

    /// Parses the inputs and lists the keys that would be generated.
    Check(CheckArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
