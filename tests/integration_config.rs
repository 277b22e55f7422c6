// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for tool settings loading.
//!
//! Tests the Config module with realistic TOML files.

use std::path::PathBuf;

use buildenv::config::Config;
use buildenv::emit::Language;
use buildenv::logging::LogLevel;
use buildenv::parser::EnvSyntax;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.global.log_level, LogLevel::INFO);
    assert_eq!(config.generate.language, Language::Swift);
    assert_eq!(config.generate.env_syntax, EnvSyntax::Quoted);
    assert!(!config.generate.encode);
    assert!(config.generate.output.is_none());
}

#[test]
fn config_parse_generate_section() {
    let toml = r#"
[generate]
env = ".env"
config = "buildenv.conf"
output = "Sources/App/BuildEnvironment.swift"
env_syntax = "plain"
encode = true
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(config.generate.env, Some(PathBuf::from(".env")));
    assert_eq!(config.generate.config, Some(PathBuf::from("buildenv.conf")));
    assert_eq!(
        config.generate.output,
        Some(PathBuf::from("Sources/App/BuildEnvironment.swift"))
    );
    assert_eq!(config.generate.env_syntax, EnvSyntax::Plain);
    assert!(config.generate.encode);
}

#[test]
fn config_parse_unknown_section_key_rejected() {
    let toml = r"
[generate]
colour = true
";
    assert!(Config::parse(toml).is_err());
}

// =============================================================================
// Builder Pattern
// =============================================================================

#[test]
fn config_builder_layered_files() {
    let temp = tempfile::tempdir().unwrap();
    let base = temp.path().join("buildenv.toml");
    let local = temp.path().join("local.toml");
    std::fs::write(
        &base,
        "[global]\nlog_level = 2\n\n[generate]\noutput = \"Base.swift\"\nlanguage = \"swift\"\n",
    )
    .unwrap();
    std::fs::write(&local, "[generate]\nlanguage = \"rust\"\n").unwrap();

    let loader = Config::builder()
        .add_toml_file_optional(&base)
        .add_toml_file(&local);
    assert_eq!(loader.format_loaded_files().len(), 2);

    let config = loader.build().unwrap();
    assert_eq!(config.global.log_level, LogLevel::WARN);
    assert_eq!(config.generate.output, Some(PathBuf::from("Base.swift")));
    assert_eq!(config.generate.language, Language::Rust);
}

#[test]
fn config_builder_missing_required_file() {
    let temp = tempfile::tempdir().unwrap();
    let result = Config::builder()
        .add_toml_file(temp.path().join("absent.toml"))
        .build();
    assert!(result.is_err());
}
