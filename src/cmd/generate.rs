// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Generate command implementation.
//!
//! ```text
//! GenerateArgs + [generate] --> GenerateJob
//!   InputFiles::load() --> Emitter::emit() --> write_atomic(output)
//! ```
//!
//! Nothing is written unless parsing and emission both succeed.

use std::path::{Path, PathBuf};

use bon::Builder;
use tracing::info;

use super::inputs::InputFiles;
use crate::cli::generate::GenerateArgs;
use crate::config::Config;
use crate::config::types::GenerateConfig;
use crate::emit::{CipherSource, Emitter, Language, ThreadRngSource};
use crate::env::{EnvLookup, ProcessEnv};
use crate::error::{BuildEnvError, Result, bail_out};
use crate::utility::fs::write_atomic;

/// A fully resolved generation run.
#[derive(Debug, Clone, Builder)]
pub struct GenerateJob {
    inputs: InputFiles,
    output: PathBuf,
    #[builder(default)]
    language: Language,
    #[builder(default)]
    force_encode: bool,
}

impl GenerateJob {
    /// Combines CLI arguments with `[generate]` defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if no output path is configured.
    pub fn resolve(args: &GenerateArgs, defaults: &GenerateConfig) -> Result<Self> {
        let output = args
            .output
            .clone()
            .or_else(|| defaults.output.clone())
            .ok_or_else(|| bail_out("Required '--output' argument is missing"))?;

        Ok(Self::builder()
            .inputs(InputFiles::resolve(&args.inputs, defaults))
            .output(output)
            .language(args.language.unwrap_or(defaults.language))
            .force_encode(args.encode || defaults.encode)
            .build())
    }

    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Parses the inputs, renders the source, and writes the output file.
    ///
    /// # Errors
    ///
    /// Returns the first input, parse, or write error. The output file is
    /// not touched on failure.
    pub fn run(&self, lookup: &dyn EnvLookup, cipher: &mut dyn CipherSource) -> Result<()> {
        let mut parsed = self.inputs.load(lookup)?;
        if self.force_encode {
            parsed.settings.encode = true;
        }

        let source = Emitter::new(self.language).emit(&parsed.settings, &parsed.entries, cipher);
        write_atomic(&self.output, &source).map_err(BuildEnvError::from)?;

        info!(
            output = %self.output.display(),
            language = %self.language,
            encode = parsed.settings.encode,
            entries = parsed.entries.len(),
            "generated {}",
            parsed.settings.name
        );
        Ok(())
    }
}

/// Main handler for the generate command.
///
/// # Errors
///
/// Returns an error if the job cannot be resolved or fails to run.
pub fn run_generate_command(args: &GenerateArgs, config: &Config) -> Result<()> {
    let job = GenerateJob::resolve(args, &config.generate)?;
    job.run(&ProcessEnv, &mut ThreadRngSource)?;
    println!("Created file {}", job.output().display());
    Ok(())
}
