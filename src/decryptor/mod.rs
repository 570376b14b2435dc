// src/decryptor/mod.rs

//! High-level key recovery facade.
//!
//! Core API: `decrypt(&encrypted, verbosity)?` for full buffer recovery.
//! Helper: `find_xor_candidate` for probing a hint pair without touching the payload.

pub(crate) mod decrypt;
pub(crate) mod search;

pub use decrypt::decrypt;
pub use search::find_xor_candidate;
