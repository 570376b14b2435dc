// src/encryptor/mod.rs

//! High-level key encoding facade.
//!
//! Core API: `encrypt(&key)?` with random hint material, or
//! `encrypt_with(&key, hint, xor_key)?` when the blob must be reproducible.

pub(crate) mod encrypt;

pub use encrypt::{encrypt, encrypt_with};
