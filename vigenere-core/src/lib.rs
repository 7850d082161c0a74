// File:    lib.rs
// Author:  apezoo
// Date:    2025-08-11
//
// Description: The main library crate for vigenere-core, exposing the Vigenere cipher engine.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Vigenere Core Library
//!
//! This library provides the core functionality for the Vigenere polyalphabetic
//! substitution cipher: keyed encryption and decryption of uppercase Latin text,
//! and verification that a ciphertext corresponds to a plaintext under the
//! current key.

/// The Vigenere cipher engine and its shift operations.
pub mod cipher;
