// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::literal::string_literal;
use super::{CipherSource, Emitter, Language, ThreadRngSource, scramble, unscramble};
use crate::parser::{AccessLevel, Entries, Settings};

/// Cycles through a fixed byte sequence.
struct Sequence {
    bytes: Vec<u8>,
    pos: usize,
}

impl Sequence {
    fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            pos: 0,
        }
    }
}

impl CipherSource for Sequence {
    fn fill(&mut self, buf: &mut [u8]) {
        for b in buf {
            *b = self.bytes[self.pos % self.bytes.len()];
            self.pos += 1;
        }
    }
}

/// Source that must never be consulted.
struct Untouched;

impl CipherSource for Untouched {
    fn fill(&mut self, _buf: &mut [u8]) {
        panic!("cipher requested in plain mode");
    }
}

fn entries(pairs: &[(&str, &str)]) -> Entries {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn settings(name: &str, access: AccessLevel, encode: bool) -> Settings {
    Settings {
        name: name.to_string(),
        access,
        encode,
    }
}

/// Pulls the first `[ ... ]` byte list following `marker` out of generated code.
fn extract_bytes(code: &str, marker: &str) -> Vec<u8> {
    let start = code.find(marker).expect("marker present") + marker.len();
    let end = start + code[start..].find(']').expect("closing bracket");
    code[start..end]
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u8>().expect("byte"))
        .collect()
}

// =============================================================================
// Swift
// =============================================================================

#[test]
fn test_swift_plain_internal_container() {
    let out = Emitter::new(Language::Swift).emit(
        &settings("Secrets", AccessLevel::Internal, false),
        &entries(&[("API_KEY", "abc123")]),
        &mut Untouched,
    );
    assert_eq!(
        out,
        "// Code generated from .env file\n\
         // Don't edit! All changes will be lost.\n\
         \n\
         enum Secrets {\n\
         \n\
         \x20   static let API_KEY: String = \"abc123\"\n\
         }\n"
    );
}

#[test]
fn test_swift_plain_public_default_settings() {
    let out = Emitter::default().emit(
        &Settings::default(),
        &entries(&[("B", "2"), ("A", "1")]),
        &mut Untouched,
    );
    assert!(out.contains("public enum BuildEnvironment {\n\n"));
    let a = out.find("public static let A: String = \"1\"").unwrap();
    let b = out.find("public static let B: String = \"2\"").unwrap();
    assert!(a < b, "entries are emitted in key order");
}

#[test]
fn test_swift_package_access() {
    let out = Emitter::new(Language::Swift).emit(
        &settings("Env", AccessLevel::Package, false),
        &entries(&[("K", "v")]),
        &mut Untouched,
    );
    assert!(out.contains("package enum Env {"));
    assert!(out.contains("    package static let K: String = \"v\""));
}

#[test]
fn test_plain_emission_is_byte_identical() {
    let s = settings("Env", AccessLevel::Public, false);
    let e = entries(&[("X", "1"), ("Y", "two"), ("Z", "")]);
    let emitter = Emitter::new(Language::Swift);
    assert_eq!(
        emitter.emit(&s, &e, &mut Untouched),
        emitter.emit(&s, &e, &mut Untouched)
    );
}

#[test]
fn test_swift_encoded_fixed_cipher() {
    let out = Emitter::new(Language::Swift).emit(
        &settings("Env", AccessLevel::Public, true),
        &entries(&[("K", "abc")]),
        &mut Sequence::new(&[1, 2, 3]),
    );
    assert!(out.contains("    public static let K: String = {\n"));
    assert!(out.contains("let encrypted: [UInt8] = [96, 96, 96, 1, 2, 3]\n"));
    assert!(out.contains("ptr[$0] = encrypted[$0] ^ encrypted[$0 + count]"));
    assert!(out.ends_with("    }()\n\n}\n"));
    assert!(!out.contains("abc"));
}

#[test]
fn test_swift_encoded_empty_value() {
    let out = Emitter::new(Language::Swift).emit(
        &settings("Env", AccessLevel::Internal, true),
        &entries(&[("EMPTY", "")]),
        &mut Sequence::new(&[9]),
    );
    assert!(out.contains("let encrypted: [UInt8] = []\n"));
}

#[test]
fn test_swift_encoded_round_trip() {
    let values = ["", "a", "hello world", "päss=wörd#1", "emoji 🦀", "line\nbreak"];
    for value in values {
        let out = Emitter::new(Language::Swift).emit(
            &settings("Env", AccessLevel::Public, true),
            &entries(&[("K", value)]),
            &mut ThreadRngSource,
        );
        let bytes = extract_bytes(&out, "[UInt8] = [");
        assert_eq!(bytes.len(), value.len() * 2);
        assert_eq!(unscramble(&bytes), value.as_bytes(), "value: {value:?}");
    }
}

// =============================================================================
// Rust
// =============================================================================

#[test]
fn test_rust_plain_module() {
    let out = Emitter::new(Language::Rust).emit(
        &settings("build_env", AccessLevel::Public, false),
        &entries(&[("API_KEY", "abc123")]),
        &mut Untouched,
    );
    assert_eq!(
        out,
        "// Code generated from .env file\n\
         // Don't edit! All changes will be lost.\n\
         \n\
         #[allow(non_snake_case, non_upper_case_globals, dead_code)]\n\
         pub mod build_env {\n\
         \x20   pub const API_KEY: &str = \"abc123\";\n\
         }\n"
    );
}

#[test]
fn test_rust_internal_members_visible_to_parent() {
    let out = Emitter::new(Language::Rust).emit(
        &settings("env", AccessLevel::Internal, false),
        &entries(&[("K", "v")]),
        &mut Untouched,
    );
    assert!(out.contains("\nmod env {\n"));
    assert!(out.contains("    pub(super) const K: &str = \"v\";"));
}

#[test]
fn test_rust_encoded_lazy_static() {
    let out = Emitter::new(Language::Rust).emit(
        &settings("env", AccessLevel::Package, true),
        &entries(&[("K", "abc")]),
        &mut Sequence::new(&[1, 2, 3]),
    );
    assert!(out.contains("pub(crate) mod env {"));
    assert!(out.contains(
        "    pub(crate) static K: std::sync::LazyLock<String> = std::sync::LazyLock::new(|| {\n"
    ));
    assert!(out.contains("let encrypted: [u8; 6] = [96, 96, 96, 1, 2, 3];\n"));
    assert_eq!(
        unscramble(&extract_bytes(&out, "[u8; 6] = [")),
        b"abc".to_vec()
    );
}

// =============================================================================
// Cipher and literals
// =============================================================================

#[test]
fn test_scramble_layout() {
    let plain = b"AB";
    let out = scramble(plain, &mut Sequence::new(&[0xff, 0x0f]));
    assert_eq!(out, vec![b'A' ^ 0xff, b'B' ^ 0x0f, 0xff, 0x0f]);
    assert_eq!(unscramble(&out), plain.to_vec());
}

#[test]
fn test_scramble_random_round_trip() {
    let plain = "The quick brown fox 🦊".as_bytes();
    let out = scramble(plain, &mut ThreadRngSource);
    assert_eq!(out.len(), plain.len() * 2);
    assert_eq!(unscramble(&out), plain.to_vec());
}

#[test]
fn test_scramble_zero_cipher_is_identity() {
    let out = scramble(b"xyz", &mut Sequence::new(&[0]));
    assert_eq!(&out[..3], b"xyz");
}

#[test]
fn test_string_literal_escapes() {
    insta::assert_snapshot!(string_literal(r#"say "hi" \ now"#), @r#""say \"hi\" \\ now""#);
    assert_eq!(string_literal("a\nb\tc\r\0"), r#""a\nb\tc\r\0""#);
    assert_eq!(string_literal("\u{7}"), r#""\u{7}""#);
    assert_eq!(string_literal("ünïcødé"), "\"ünïcødé\"");
    assert_eq!(string_literal(""), "\"\"");
}
