// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Generate and check command arguments.
//!
//! Every option falls back to the `[generate]` section of the tool settings.

use clap::Args;
use std::path::PathBuf;

use crate::emit::Language;
use crate::parser::EnvSyntax;

/// Input files shared by `generate` and `check`.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Env file with KEY = VALUE lines.
    #[arg(long, value_name = "FILE")]
    pub env: Option<PathBuf>,

    /// Config file with KEY = $VAR assignments and name/access/encode directives.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Env file value syntax.
    #[arg(long = "env-syntax", value_enum, value_name = "SYNTAX")]
    pub env_syntax: Option<EnvSyntax>,
}

/// Arguments for the `generate` command.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Generated source file.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Obfuscates values even if the config file says `encode: no`.
    #[arg(short = 'e', long)]
    pub encode: bool,

    /// Generated source language.
    #[arg(long, value_enum, value_name = "LANG")]
    pub language: Option<Language>,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Prints the result as JSON.
    #[arg(long)]
    pub json: bool,
}
