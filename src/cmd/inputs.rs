// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Input file resolution and loading.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::generate::InputArgs;
use crate::config::types::GenerateConfig;
use crate::env::EnvLookup;
use crate::error::{BuildEnvError, InputRole, Result, SourcedParseError, bail_out};
use crate::parser::{EnvSyntax, Inputs, Parsed, parse};
use crate::utility::fs::read_utf8;

/// Env and config file paths for one run, CLI flags over tool settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFiles {
    pub env: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub syntax: EnvSyntax,
}

impl InputFiles {
    #[must_use]
    pub fn resolve(args: &InputArgs, defaults: &GenerateConfig) -> Self {
        Self {
            env: args.env.clone().or_else(|| defaults.env.clone()),
            config: args.config.clone().or_else(|| defaults.config.clone()),
            syntax: args.env_syntax.unwrap_or(defaults.env_syntax),
        }
    }

    /// Reads and parses the inputs, config file first.
    ///
    /// # Errors
    ///
    /// Returns an error if neither file is given, a file cannot be read or
    /// is not UTF-8, or a line fails to parse. Parse errors name the file
    /// and the 1-based line.
    pub fn load(&self, lookup: &dyn EnvLookup) -> Result<Parsed> {
        let config_text = self.config.as_deref().map(read_input).transpose()?;
        let env_text = self.env.as_deref().map(read_input).transpose()?;

        let inputs = Inputs::new(env_text.as_deref(), config_text.as_deref())
            .ok_or_else(|| bail_out("'--env' or '--config' argument is missing"))?;

        let parsed = parse(inputs, self.syntax, lookup).map_err(|error| {
            let path = match error.role {
                InputRole::Env => self.env.as_deref(),
                InputRole::Config => self.config.as_deref(),
            };
            BuildEnvError::from(SourcedParseError {
                path: path.map(|p| p.display().to_string()).unwrap_or_default(),
                error,
            })
        })?;

        debug!(
            name = %parsed.settings.name,
            access = %parsed.settings.access,
            encode = parsed.settings.encode,
            entries = parsed.entries.len(),
            "parsed inputs"
        );
        Ok(parsed)
    }
}

fn read_input(path: &Path) -> std::result::Result<String, BuildEnvError> {
    debug!(path = %path.display(), "reading input");
    read_utf8(path).map_err(BuildEnvError::from)
}
