// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    BuildEnvError, BuildEnvResult, FsError, InputRole, ParseError, ParseErrorKind,
    SourcedParseError,
};

#[test]
fn test_parse_error_reports_one_based_line() {
    let err = ParseError::new(InputRole::Env, 0, ParseErrorKind::Separator);
    assert_eq!(err.line_number(), 1);
    insta::assert_snapshot!(err.to_string(), @"error in line 1 of env file: no '=' or ':' separator");
}

#[test]
fn test_parse_error_kind_messages_carry_key() {
    let exists = ParseErrorKind::KeyExist {
        key: "API_KEY".to_string(),
    };
    let missing = ParseErrorKind::Env {
        key: "MY_KEY".to_string(),
    };
    insta::assert_snapshot!(exists.to_string(), @"key API_KEY already exists");
    insta::assert_snapshot!(missing.to_string(), @"no environment variable MY_KEY");
}

#[test]
fn test_sourced_parse_error_names_file() {
    let err = SourcedParseError {
        path: "buildenv.config".to_string(),
        error: ParseError::new(InputRole::Config, 2, ParseErrorKind::AccessSpec),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"error in line 3 of buildenv.config: wrong access spec, must be one of public, package, internal"
    );

    let top: BuildEnvError = err.into();
    assert!(matches!(top, BuildEnvError::Parse(_)));
}

#[test]
fn test_build_env_error_size() {
    // Bailed holds a Box<str>: 16 bytes (ptr + len), plus the discriminant
    let size = std::mem::size_of::<BuildEnvError>();
    assert!(size <= 24, "BuildEnvError is {size} bytes, expected <= 24");
}

#[test]
fn test_build_env_result_size() {
    let size = std::mem::size_of::<BuildEnvResult<()>>();
    assert!(size <= 24, "BuildEnvResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_fs_errors_convert_through_fs_variant() {
    let err: BuildEnvError = FsError::NonUtf8 {
        path: ".env".to_string(),
        offset: 5,
    }
    .into();
    assert!(matches!(err, BuildEnvError::Fs(_)));
}
