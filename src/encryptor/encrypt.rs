//! src/encryptor/encrypt.rs
//! CrimsonKey encoding: prepend the hint header, XOR the key bytes.

use crate::aliases::PlainKey;
use crate::consts::{HINT_HEADER_LEN, MIN_KEY_LEN};
use crate::error::CrimsonkeyError;
use secure_gate::RevealSecret;

/// Encode a plaintext key with a freshly drawn hint byte and XOR key byte.
///
/// Both bytes come from [`rand::random`]; every call produces a different blob
/// for the same key. The output is not secret (it is what gets embedded in a
/// binary), so it is returned as a plain `Vec<u8>`.
///
/// # Errors
///
/// Same as [`encrypt_with`].
#[inline(always)]
pub fn encrypt(key: &PlainKey) -> Result<Vec<u8>, CrimsonkeyError> {
    let hint = rand::random::<u8>();
    let xor_key = rand::random::<u8>();
    encrypt_with(key, hint, xor_key)
}

/// Encode a plaintext key with a caller-chosen hint byte and XOR key byte.
///
/// Deterministic counterpart of [`encrypt`], used for reproducible blobs and
/// test vectors. Output layout:
///
/// ```text
/// out[0]     = hint
/// out[1]     = hint ^ xor_key
/// out[2 + i] = key[i] ^ xor_key
/// ```
///
/// The result always decodes back to `key` via [`decrypt`](crate::decrypt),
/// for every `hint` and `xor_key`.
///
/// # Errors
///
/// - [`CrimsonkeyError::InvalidLength`] if the key is shorter than
///   [`MIN_KEY_LEN`] bytes
/// - [`CrimsonkeyError::AllocationFailure`] if the output buffer cannot be
///   reserved
pub fn encrypt_with(
    key: &PlainKey,
    hint: u8,
    xor_key: u8,
) -> Result<Vec<u8>, CrimsonkeyError> {
    let plain = key.expose_secret();
    if plain.len() < MIN_KEY_LEN {
        return Err(CrimsonkeyError::InvalidLength);
    }

    let mut encoded = Vec::new();
    if encoded
        .try_reserve_exact(plain.len() + HINT_HEADER_LEN)
        .is_err()
    {
        return Err(CrimsonkeyError::AllocationFailure);
    }
    encoded.push(hint);
    encoded.push(hint ^ xor_key);
    encoded.extend(plain.iter().map(|byte| byte ^ xor_key));

    Ok(encoded)
}
