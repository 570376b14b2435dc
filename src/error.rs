//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, CrimsonkeyError>`](CrimsonkeyError), and every
//! variant carries a fixed, stable display string so callers (and FFI shims) can
//! match on the text as well as the value.
//!
//! The numeric side of each variant is kept too: [`CrimsonkeyError::code`],
//! [`CrimsonkeyError::from_code`] and [`error_string`] translate between variants
//! and the raw `i32` status codes used by C consumers of the format
//! (`0` success, negative values for failures).

use thiserror::Error;

/// The error type for all CrimsonKey operations.
///
/// Fieldless by design: every failure mode is fully described by its kind, so the
/// enum is `Copy` and trivially comparable in tests and match arms.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CrimsonkeyError {
    /// A required input pointer/buffer was absent.
    ///
    /// Unreachable through the safe Rust API (references cannot be null); the
    /// variant exists so the raw status-code mapping stays total over the codes
    /// C callers can observe.
    #[error("Null pointer provided")]
    NullInput = -1,

    /// The input does not meet the minimum length for its role.
    ///
    /// Returned when an encrypted buffer is shorter than
    /// [`HINT_HEADER_LEN`](crate::consts::HINT_HEADER_LEN) bytes, or a plaintext
    /// key is shorter than [`MIN_KEY_LEN`](crate::consts::MIN_KEY_LEN) bytes.
    #[error("Invalid data length")]
    InvalidLength = -2,

    /// The output buffer could not be allocated.
    #[error("Memory allocation failed")]
    AllocationFailure = -3,

    /// No XOR candidate satisfied the hint equation.
    ///
    /// For any two-byte prefix the candidate `hint ^ obfuscated_hint` satisfies
    /// the check, so a well-formed call never sees this; it is kept as a
    /// reachable outcome of the search contract rather than a panic.
    #[error("Decryption failed")]
    DecryptionFailed = -4,
}

impl CrimsonkeyError {
    /// The raw status code for this error (always negative).
    #[inline(always)]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Map a raw status code back to an error, `None` for `0` (success) and
    /// for codes outside the known set.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::NullInput),
            -2 => Some(Self::InvalidLength),
            -3 => Some(Self::AllocationFailure),
            -4 => Some(Self::DecryptionFailed),
            _ => None,
        }
    }
}

/// Human-readable description of a raw status code.
///
/// Total over `i32`: `0` maps to `"Success"`, the known failure codes map to the
/// same strings the error variants display, and everything else maps to
/// `"Unknown error"`.
pub const fn error_string(code: i32) -> &'static str {
    match code {
        0 => "Success",
        -1 => "Null pointer provided",
        -2 => "Invalid data length",
        -3 => "Memory allocation failed",
        -4 => "Decryption failed",
        _ => "Unknown error",
    }
}
