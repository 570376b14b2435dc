//! # Secure-Gate Type Aliases
//!
//! This module provides the secret wrapper types used by the library, built on
//! [`secure-gate`](https://github.com/Slurp9187/secure-gate). All types here are
//! zeroized on drop and require explicit `.expose_secret()` /
//! `.expose_secret_mut()` calls to reach the underlying bytes, so key material
//! never leaks through `Debug`, `Clone`, or accidental comparison.
//!
//! ### Dynamic Secrets
//! - [`PlainKey`] - Recovered or to-be-encoded plaintext key bytes

use secure_gate::dynamic_alias;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(pub PlainKey, Vec<u8>);
