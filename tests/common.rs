//! tests/common.rs
//! Common constants shared across test files

/// Reference encoded blob: hint `0x3c`, obfuscated hint `0xf8`, key byte `0xc4`.
/// Matches the blob the encoder tool prints for the key "HalloHallo".
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ENCODED: &[u8] = &[
    0x3c, 0xf8, 0x8c, 0xa5, 0xa8, 0xa8, 0xab, 0x8c, 0xa5, 0xa8, 0xa8, 0xab,
];

/// Plaintext recovered from [`TEST_ENCODED`].
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PLAINTEXT: &[u8] = b"HalloHallo";

/// Hint byte of [`TEST_ENCODED`].
#[allow(dead_code)] // Used across multiple test files
pub const TEST_HINT: u8 = 0x3c;

/// XOR key hidden in [`TEST_ENCODED`] (`0x3c ^ 0xf8`).
#[allow(dead_code)] // Used across multiple test files
pub const TEST_XOR_KEY: u8 = 0xc4;

/// Representative hint bytes for loops that don't need all 256 values.
#[allow(dead_code)] // Used across multiple test files
pub const TEST_HINT_VALUES: &[u8] = &[0x00, 0x01, 0x3c, 0x7f, 0x80, 0xfe, 0xff];
