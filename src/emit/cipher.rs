// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! XOR value scrambling.
//!
//! ```text
//! plain     p0 p1 .. pn-1
//! cipher    c0 c1 .. cn-1          random bytes
//! encrypted e_i = p_i ^ c_i
//! emitted   [e0 .. en-1, c0 .. cn-1]   (length 2n)
//! decoded   p_i = out[i] ^ out[i + n]
//! ```
//!
//! This hides values from casual inspection of the generated source only.
//! Anyone holding the file can reverse it.

use rand::RngCore;

/// Supplier of cipher bytes.
pub trait CipherSource {
    /// Fills `buf` with cipher bytes.
    fn fill(&mut self, buf: &mut [u8]);
}

/// Uniform random bytes from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl CipherSource for ThreadRngSource {
    fn fill(&mut self, buf: &mut [u8]) {
        rand::rng().fill_bytes(buf);
    }
}

/// Scrambles `plain`, returning the encrypted bytes followed by the cipher.
pub fn scramble<C: CipherSource + ?Sized>(plain: &[u8], source: &mut C) -> Vec<u8> {
    let mut out = vec![0u8; plain.len() * 2];
    let (encrypted, cipher) = out.split_at_mut(plain.len());
    source.fill(cipher);
    for ((e, p), c) in encrypted.iter_mut().zip(plain).zip(cipher.iter()) {
        *e = p ^ c;
    }
    out
}

/// Reverses [`scramble`]; this is the decode step the generated code performs.
#[must_use]
pub fn unscramble(data: &[u8]) -> Vec<u8> {
    let (encrypted, cipher) = data.split_at(data.len() / 2);
    encrypted.iter().zip(cipher).map(|(e, c)| e ^ c).collect()
}
