// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Source code emission.
//!
//! ```text
//! (Settings, Entries)
//!        |
//!        v
//!   header comment
//!   container open      Swift: enum Name {     Rust: mod Name {
//!   per entry:
//!     encode = no   --> literal constant
//!     encode = yes  --> scramble() + lazily decoded constant
//!   container close
//! ```
//!
//! Plain output is a pure function of its inputs. Encoded output draws
//! cipher bytes from a [`CipherSource`].

pub mod cipher;
mod literal;
mod rust;
mod swift;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parser::{AccessLevel, Entries, Settings};

pub use cipher::{CipherSource, ThreadRngSource, scramble, unscramble};

/// First lines of every generated file.
pub const HEADER: &str = "// Code generated from .env file\n// Don't edit! All changes will be lost.\n";

/// Generated source language.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Swift,
    Rust,
}

impl Language {
    const fn target(self) -> &'static dyn Target {
        match self {
            Self::Swift => &swift::Swift,
            Self::Rust => &rust::Rust,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Swift => f.write_str("swift"),
            Self::Rust => f.write_str("rust"),
        }
    }
}

/// Language-specific fragments. Each returns complete lines.
trait Target: Sync {
    fn container_open(&self, name: &str, access: AccessLevel) -> String;
    fn plain_member(&self, key: &str, value: &str, access: AccessLevel) -> String;
    fn encoded_member(&self, key: &str, scrambled: &[u8], access: AccessLevel) -> String;
    fn container_close(&self) -> &'static str;
}

/// Renders settings and entries as source text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Emitter {
    language: Language,
}

impl Emitter {
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Emits the complete generated file.
    ///
    /// `cipher` is only consulted when `settings.encode` is set.
    pub fn emit<C: CipherSource + ?Sized>(
        &self,
        settings: &Settings,
        entries: &Entries,
        cipher: &mut C,
    ) -> String {
        let target = self.language.target();
        let mut out = String::from(HEADER);
        out.push('\n');
        out.push_str(&target.container_open(&settings.name, settings.access));
        for (key, value) in entries {
            if settings.encode {
                let scrambled = scramble(value.as_bytes(), cipher);
                out.push_str(&target.encoded_member(key, &scrambled, settings.access));
            } else {
                out.push_str(&target.plain_member(key, value, settings.access));
            }
        }
        out.push_str(target.container_close());
        out
    }
}
