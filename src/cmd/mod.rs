// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   generate, check, options
//!
//! InputFiles::load()
//!   read_utf8(config?) + read_utf8(env?) --> parser::parse() --> Parsed
//! ```

pub mod check;
pub mod config;
pub mod generate;
pub mod inputs;
