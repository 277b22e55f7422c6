// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::global::GlobalOptions;
use crate::cli::{Cli, Command};
use crate::config::types::GlobalConfig;
use crate::emit::Language;
use crate::logging::LogLevel;
use crate::parser::EnvSyntax;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["buildenv", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));

    let alias = Cli::try_parse_from(["buildenv", "-v"]).unwrap();
    assert!(matches!(alias.command, Some(Command::Version)));
}

#[test]
fn test_parse_generate() {
    let cli = Cli::try_parse_from([
        "buildenv",
        "generate",
        "--env",
        ".env",
        "--config",
        "buildenv.config",
        "-o",
        "Gen.swift",
        "--env-syntax",
        "plain",
        "-e",
        "--language",
        "rust",
    ])
    .unwrap();
    let Some(Command::Generate(args)) = cli.command else {
        panic!("expected generate command");
    };
    assert_eq!(args.inputs.env, Some(PathBuf::from(".env")));
    assert_eq!(args.inputs.config, Some(PathBuf::from("buildenv.config")));
    assert_eq!(args.inputs.env_syntax, Some(EnvSyntax::Plain));
    assert_eq!(args.output, Some(PathBuf::from("Gen.swift")));
    assert!(args.encode);
    assert_eq!(args.language, Some(Language::Rust));
}

#[test]
fn test_parse_check_json() {
    let cli = Cli::try_parse_from(["buildenv", "check", "--config", "c", "--json"]).unwrap();
    let Some(Command::Check(args)) = cli.command else {
        panic!("expected check command");
    };
    assert!(args.json);
    assert!(args.inputs.env.is_none());
}

#[test]
fn test_parse_rejects_bad_values() {
    assert!(Cli::try_parse_from(["buildenv", "-l", "6", "version"]).is_err());
    assert!(Cli::try_parse_from(["buildenv", "generate", "--language", "kotlin"]).is_err());
    assert!(Cli::try_parse_from(["buildenv", "generate", "--env-syntax", "loose"]).is_err());
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "buildenv",
        "-i",
        "a.toml",
        "-i",
        "b.toml",
        "-l",
        "4",
        "--no-default-inis",
        "options",
    ])
    .unwrap();
    assert_eq!(cli.global.inis.len(), 2);
    assert_eq!(cli.global.log_level, Some(4));
    assert!(cli.global.no_default_inis);
    assert!(matches!(cli.command, Some(Command::Options)));
}

#[test]
fn test_log_config_precedence() {
    let settings = GlobalConfig {
        log_level: LogLevel::WARN,
        file_log_level: Some(LogLevel::TRACE),
        log_file: Some(PathBuf::from("from-config.log")),
    };

    let from_settings = GlobalOptions::default().log_config(&settings);
    assert_eq!(from_settings.console_level(), LogLevel::WARN);
    assert_eq!(from_settings.file_level(), LogLevel::TRACE);
    assert_eq!(from_settings.log_file(), Some("from-config.log"));

    let flags = GlobalOptions {
        log_level: Some(1),
        log_file: Some(PathBuf::from("cli.log")),
        ..Default::default()
    };
    let from_flags = flags.log_config(&GlobalConfig::default());
    assert_eq!(from_flags.console_level(), LogLevel::ERROR);
    assert_eq!(from_flags.file_level(), LogLevel::ERROR);
    assert_eq!(from_flags.log_file(), Some("cli.log"));
}
