// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tool configuration for buildenv.
//!
//! This is the tool's own settings, not the `name:`/`access:` config file
//! that the parser reads.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. buildenv.toml (cwd, optional)
//! 3. --ini FILE (repeatable)
//! 4. BUILDENV_* env vars
//! 5. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! BUILDENV_GLOBAL__LOG_LEVEL=4        → global.log_level = 4
//! BUILDENV_GENERATE__OUTPUT=Gen.swift → generate.output = "Gen.swift"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::Result;

use loader::ConfigLoader;
use types::{GenerateConfig, GlobalConfig};

/// Default project configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "buildenv.toml";

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "BUILDENV";

/// Complete tool configuration.
///
/// Unknown top-level keys are ignored so unrelated `BUILDENV_*` variables
/// do not break loading; unknown keys inside a section are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Generation defaults.
    pub generate: GenerateConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use buildenv::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("buildenv.toml")
    ///     .with_env_prefix("BUILDENV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_generate_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.log_level".into(),
            self.global.log_level.as_u8().to_string(),
        );
        if let Some(level) = self.global.file_log_level {
            options.insert("global.file_log_level".into(), level.as_u8().to_string());
        }
        if let Some(ref path) = self.global.log_file {
            options.insert("global.log_file".into(), path.display().to_string());
        }
    }

    fn format_generate_options(&self, options: &mut BTreeMap<String, String>) {
        let path = |p: &Option<PathBuf>| {
            p.as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string())
        };
        options.insert("generate.env".into(), path(&self.generate.env));
        options.insert("generate.config".into(), path(&self.generate.config));
        options.insert("generate.output".into(), path(&self.generate.output));
        options.insert(
            "generate.language".into(),
            self.generate.language.to_string(),
        );
        options.insert(
            "generate.env_syntax".into(),
            self.generate.env_syntax.to_string(),
        );
        options.insert(
            "generate.encode".into(),
            self.generate.encode.to_string(),
        );
    }
}
