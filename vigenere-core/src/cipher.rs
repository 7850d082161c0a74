// File:    cipher.rs
// Author:  apezoo
// Date:    2025-08-11
//
// Description: Implements the Vigenere cipher engine: keyed shift encryption, decryption, and ciphertext verification.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! This module contains the Vigenere cipher engine.

use log::{debug, trace};

/// Number of letters in the cipher alphabet.
const ALPHABET_LEN: u8 = 26;

/// A Vigenere cipher engine.
///
/// The engine owns a repeating key of uppercase Latin letters (`A`-`Z`) and
/// shifts each alphabetic character of a message by the alphabet position of
/// the key letter under the key cursor. Non-alphabetic characters pass
/// through unchanged and do not consume a key position.
///
/// Messages are expected to be uppercase: lowercase input is still classified
/// as alphabetic (it consumes a key position) but is shifted relative to `A`,
/// so only messages whose letters are uppercase round-trip through
/// [`encrypt`](Self::encrypt) and [`decrypt`](Self::decrypt).
///
/// Replacing the key requires `&mut self`, so a key change can never be
/// observed mid-operation. The engine takes no locks; to share one across
/// threads, wrap it in `std::sync::Mutex` (which serializes all calls).
#[derive(Debug, Clone)]
pub struct Vigenere {
    /// The repeating encryption key.
    key: String,
}

impl Vigenere {
    /// Creates a cipher engine with the provided key.
    ///
    /// The key should consist of uppercase letters only. No validation is
    /// performed here: a key containing other bytes still produces defined
    /// output (see [`encrypt`](Self::encrypt)), but the result no longer
    /// matches conventional Vigenere semantics.
    #[must_use]
    pub fn new(key: String) -> Self {
        Self { key }
    }

    /// Replaces the encryption key in place.
    ///
    /// All subsequent operations use the new key. Like [`new`](Self::new),
    /// this performs no validation; the key should consist of uppercase
    /// letters only.
    pub fn set_key(&mut self, new_key: String) {
        debug!(
            "cipher key replaced ({} -> {} bytes)",
            self.key.len(),
            new_key.len()
        );
        self.key = new_key;
    }

    /// Encrypts a plaintext message using the Vigenere cipher.
    ///
    /// Each alphabetic character is shifted forward by the alphabet position
    /// of the key letter under the key cursor; the cursor advances only on
    /// alphabetic characters, so digits, punctuation, whitespace, and
    /// non-ASCII bytes pass through unchanged without consuming a key
    /// position. The shift is computed relative to `A` regardless of the
    /// input character's case, so lowercase letters encrypt to
    /// uppercase-alphabet values that do not decrypt back to the original.
    ///
    /// # Arguments
    ///
    /// * `message` - The plaintext message to encrypt. May be empty.
    ///
    /// # Returns
    ///
    /// The ciphertext, byte-for-byte as long as `message`.
    ///
    /// # Panics
    ///
    /// Panics if the key is empty.
    #[must_use]
    pub fn encrypt(&self, message: &str) -> String {
        assert!(
            !self.key.is_empty(),
            "Key must not be empty for cipher operations."
        );
        trace!(
            "encrypting {} bytes with a {}-byte key",
            message.len(),
            self.key.len()
        );

        let mut cursor = 0;
        let encrypted: Vec<u8> = message
            .bytes()
            .map(|byte| {
                if byte.is_ascii_alphabetic() {
                    let shifted = shift_forward(byte, self.shift_at(cursor));
                    cursor += 1;
                    shifted
                } else {
                    byte
                }
            })
            .collect();

        // Shifted bytes land in A-Z and every other byte is copied verbatim,
        // so the output is valid UTF-8 whenever the input is.
        String::from_utf8(encrypted).expect("cipher output is valid UTF-8")
    }

    /// Decrypts a ciphertext message using the Vigenere cipher.
    ///
    /// Mirror of [`encrypt`](Self::encrypt): alphabetic characters are
    /// shifted backward under the same key-cursor rule and everything else
    /// passes through unchanged. For any message whose letters are uppercase,
    /// `decrypt(encrypt(m)) == m` under a fixed key.
    ///
    /// # Arguments
    ///
    /// * `message` - The encrypted message to decrypt. May be empty.
    ///
    /// # Returns
    ///
    /// The plaintext, byte-for-byte as long as `message`.
    ///
    /// # Panics
    ///
    /// Panics if the key is empty.
    #[must_use]
    pub fn decrypt(&self, message: &str) -> String {
        assert!(
            !self.key.is_empty(),
            "Key must not be empty for cipher operations."
        );
        trace!(
            "decrypting {} bytes with a {}-byte key",
            message.len(),
            self.key.len()
        );

        let mut cursor = 0;
        let decrypted: Vec<u8> = message
            .bytes()
            .map(|byte| {
                if byte.is_ascii_alphabetic() {
                    let shifted = shift_backward(byte, self.shift_at(cursor));
                    cursor += 1;
                    shifted
                } else {
                    byte
                }
            })
            .collect();

        String::from_utf8(decrypted).expect("cipher output is valid UTF-8")
    }

    /// Verifies whether an encrypted message matches a plaintext message.
    ///
    /// Re-derives the ciphertext by encrypting `plaintext_msg` under the
    /// current key and compares it to `encrypted_msg` for exact equality;
    /// there are no partial-match semantics.
    ///
    /// # Panics
    ///
    /// Panics if the key is empty.
    #[must_use]
    pub fn is_encrypted(&self, encrypted_msg: &str, plaintext_msg: &str) -> bool {
        assert!(
            !self.key.is_empty(),
            "Key must not be empty for cipher operations."
        );
        encrypted_msg == self.encrypt(plaintext_msg)
    }

    /// Returns the shift for the given key-cursor position.
    ///
    /// The key byte's alphabet position is wrapped into `0..26`, so the
    /// lookup is total for any key byte; bytes outside `A`-`Z` yield a
    /// defined but conventionally meaningless shift.
    fn shift_at(&self, cursor: usize) -> u8 {
        let key_byte = self.key.as_bytes()[cursor % self.key.len()];
        key_byte.wrapping_sub(b'A') % ALPHABET_LEN
    }
}

/// Shifts an alphabetic byte forward by `n` positions, relative to `A`.
///
/// `n` must be below [`ALPHABET_LEN`].
const fn shift_forward(ch: u8, n: u8) -> u8 {
    b'A' + (ch.wrapping_sub(b'A') + n) % ALPHABET_LEN
}

/// Shifts an alphabetic byte backward by `n` positions, relative to `A`.
///
/// `n` must be below [`ALPHABET_LEN`].
const fn shift_backward(ch: u8, n: u8) -> u8 {
    b'A' + (ch.wrapping_sub(b'A') + ALPHABET_LEN - n) % ALPHABET_LEN
}
