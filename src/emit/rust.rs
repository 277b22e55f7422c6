// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rust output: a module of `&str` constants, or `LazyLock<String>`
//! statics when encoded.
//!
//! ```text
//! access     container    members
//! public     pub mod      pub
//! package    pub(crate)   pub(crate)
//! internal   mod          pub(super)
//! ```

use super::Target;
use super::literal::{byte_list, string_literal};
use crate::parser::AccessLevel;

pub(super) struct Rust;

const fn container_visibility(access: AccessLevel) -> &'static str {
    match access {
        AccessLevel::Public => "pub ",
        AccessLevel::Package => "pub(crate) ",
        AccessLevel::Internal => "",
    }
}

const fn member_visibility(access: AccessLevel) -> &'static str {
    match access {
        AccessLevel::Public => "pub ",
        AccessLevel::Package => "pub(crate) ",
        AccessLevel::Internal => "pub(super) ",
    }
}

impl Target for Rust {
    fn container_open(&self, name: &str, access: AccessLevel) -> String {
        format!(
            "#[allow(non_snake_case, non_upper_case_globals, dead_code)]\n{}mod {name} {{\n",
            container_visibility(access)
        )
    }

    fn plain_member(&self, key: &str, value: &str, access: AccessLevel) -> String {
        format!(
            "    {}const {key}: &str = {};\n",
            member_visibility(access),
            string_literal(value)
        )
    }

    fn encoded_member(&self, key: &str, scrambled: &[u8], access: AccessLevel) -> String {
        let vis = member_visibility(access);
        let len = scrambled.len();
        let bytes = byte_list(scrambled);
        format!(
            r"    {vis}static {key}: std::sync::LazyLock<String> = std::sync::LazyLock::new(|| {{
        let encrypted: [u8; {len}] = [{bytes}];
        let count = encrypted.len() / 2;
        let decoded: Vec<u8> = (0..count).map(|i| encrypted[i] ^ encrypted[i + count]).collect();
        String::from_utf8(decoded).unwrap_or_default()
    }});
"
        )
    }

    fn container_close(&self) -> &'static str {
        "}\n"
    }
}
