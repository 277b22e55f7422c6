// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          generate / check / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   buildenv.toml + env     |
//!              '-----+---------------+-----'
//!                    |               |
//!                    v               v
//!                 parser  ------>  emit
//!            .env + config    Swift / Rust
//!            files, EnvLookup  XOR encoding
//!
//!   +-----------------------------------------+
//!   |  foundation   env, error, logging, fs   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod emit;
pub mod env;
pub mod error;
pub mod logging;
pub mod parser;
pub mod utility;
