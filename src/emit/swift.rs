// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Swift output: a caseless `enum` holding `static let` constants.
//!
//! A blank line follows the opening brace and each encoded member.

use super::Target;
use super::literal::{byte_list, string_literal};
use crate::parser::AccessLevel;

pub(super) struct Swift;

/// Access modifier with trailing space, empty for `internal`.
const fn modifier(access: AccessLevel) -> &'static str {
    match access {
        AccessLevel::Public => "public ",
        AccessLevel::Package => "package ",
        AccessLevel::Internal => "",
    }
}

impl Target for Swift {
    fn container_open(&self, name: &str, access: AccessLevel) -> String {
        format!("{}enum {name} {{\n\n", modifier(access))
    }

    fn plain_member(&self, key: &str, value: &str, access: AccessLevel) -> String {
        format!(
            "    {}static let {key}: String = {}\n",
            modifier(access),
            string_literal(value)
        )
    }

    fn encoded_member(&self, key: &str, scrambled: &[u8], access: AccessLevel) -> String {
        let access = modifier(access);
        let bytes = byte_list(scrambled);
        format!(
            r"    {access}static let {key}: String = {{
        let encrypted: [UInt8] = [{bytes}]
        let count = encrypted.count / 2
        return String(unsafeUninitializedCapacity: count) {{ ptr in
            (0..<count).forEach {{ ptr[$0] = encrypted[$0] ^ encrypted[$0 + count] }}
            return count
        }}
    }}()

"
        )
    }

    fn container_close(&self) -> &'static str {
        "}\n"
    }
}
