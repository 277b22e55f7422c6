// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Input and output file handling.
//!
//! ```text
//! read_utf8()     whole file, UTF-8 validated, byte offset on failure
//! write_atomic()  NamedTempFile in target dir --> persist() over target
//! ```
//!
//! The generated file either appears complete or not at all.


use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::FsError;

/// Reads `path` as UTF-8 text.
///
/// # Errors
///
/// Returns [`FsError::ReadError`] if the file cannot be read and
/// [`FsError::NonUtf8`] if its content is not valid UTF-8.
pub fn read_utf8(path: &Path) -> Result<String, FsError> {
    let bytes = std::fs::read(path).map_err(|source| FsError::ReadError {
        path: path.display().to_string(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|e| FsError::NonUtf8 {
        path: path.display().to_string(),
        offset: e.utf8_error().valid_up_to(),
    })
}

/// Writes `contents` to `path` via a temporary file in the same directory.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns [`FsError::WriteError`] if the directory, the temporary file, or
/// the final rename fails. The target is left untouched in that case.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), FsError> {
    let write_error = |source| FsError::WriteError {
        path: path.display().to_string(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(write_error)?;

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(contents.as_bytes()).map_err(write_error)?;
    file.flush().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
