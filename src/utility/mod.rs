// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   read_utf8()     validated input read
//!   write_atomic()  temp file + persist
//! ```

pub mod fs;
