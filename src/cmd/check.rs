// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Check command: parse inputs and report settings and keys, never values.

use anyhow::Context;
use serde::Serialize;

use super::inputs::InputFiles;
use crate::cli::generate::CheckArgs;
use crate::config::Config;
use crate::env::ProcessEnv;
use crate::error::Result;
use crate::parser::{Parsed, Settings};

/// What a generation run would produce.
#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub settings: &'a Settings,
    pub keys: Vec<&'a str>,
}

impl<'a> CheckReport<'a> {
    #[must_use]
    pub fn new(parsed: &'a Parsed) -> Self {
        Self {
            settings: &parsed.settings,
            keys: parsed.entries.keys().map(String::as_str).collect(),
        }
    }

    /// Human-readable report lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let keys = if self.keys.is_empty() {
            "<none>".to_string()
        } else {
            self.keys.join(", ")
        };
        vec![
            format!("name   = {}", self.settings.name),
            format!("access = {}", self.settings.access),
            format!(
                "encode = {}",
                if self.settings.encode { "yes" } else { "no" }
            ),
            format!("keys   = {keys}"),
        ]
    }
}

/// Main handler for the check command.
///
/// # Errors
///
/// Returns an error if the inputs cannot be loaded or parsed.
pub fn run_check_command(args: &CheckArgs, config: &Config) -> Result<()> {
    let parsed = InputFiles::resolve(&args.inputs, &config.generate).load(&ProcessEnv)?;
    let report = CheckReport::new(&parsed);
    if args.json {
        let json =
            serde_json::to_string_pretty(&report).context("failed to serialize check report")?;
        println!("{json}");
    } else {
        for line in report.lines() {
            println!("{line}");
        }
    }
    Ok(())
}
