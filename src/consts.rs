//! # Constants
//!
//! This module defines the length constants shared by the encoding and
//! decoding paths.

/// Number of header bytes preceding the ciphertext payload.
///
/// Byte 0 is the plaintext hint, byte 1 is the hint XORed with the key byte.
/// Every well-formed encrypted buffer is at least this long, and every decoded
/// payload is exactly this much shorter than its input.
pub const HINT_HEADER_LEN: usize = 2;

/// Minimum accepted plaintext key length, in bytes.
///
/// Shorter keys are rejected during encoding with
/// [`InvalidLength`](crate::CrimsonkeyError::InvalidLength).
pub const MIN_KEY_LEN: usize = 2;
