//! src/decryptor/decrypt.rs
//! CrimsonKey recovery: validate, brute-force the key byte, strip the header.

use crate::aliases::PlainKey;
use crate::consts::HINT_HEADER_LEN;
use crate::decryptor::search::find_xor_candidate;
use crate::error::CrimsonkeyError;
use crate::options::Verbosity;

/// Recover the plaintext key from a hint-prefixed XOR buffer.
///
/// `encrypted[0]` is the hint, `encrypted[1]` the hint XORed with the unknown
/// key byte, and the rest is the payload. The key byte is brute-forced from the
/// first two bytes, then the payload is XORed with it. The recovered key comes
/// back as a [`PlainKey`], zeroized when the caller drops it.
///
/// `verbosity` only gates the diagnostic lines on the [`log`] facade; the
/// returned value is identical across all settings.
///
/// # Errors
///
/// - [`CrimsonkeyError::InvalidLength`] if `encrypted` is shorter than
///   [`HINT_HEADER_LEN`] bytes
/// - [`CrimsonkeyError::AllocationFailure`] if the payload buffer cannot be
///   reserved
/// - [`CrimsonkeyError::DecryptionFailed`] if no candidate satisfies the hint
///   equation (cannot happen for a two-byte prefix, but the search contract
///   keeps the outcome)
///
/// # Example
///
/// ```
/// use crimsonkey_rs::{decrypt, Verbosity};
/// use secure_gate::RevealSecret;
///
/// let blob = [0x3c, 0xf8, 0x8c, 0xa5, 0xa8, 0xa8, 0xab];
/// let key = decrypt(&blob, Verbosity::Silent)?;
/// assert_eq!(key.expose_secret().as_slice(), b"Hallo");
/// # Ok::<(), crimsonkey_rs::CrimsonkeyError>(())
/// ```
#[inline(always)]
pub fn decrypt(encrypted: &[u8], verbosity: Verbosity) -> Result<PlainKey, CrimsonkeyError> {
    if encrypted.len() < HINT_HEADER_LEN {
        if verbosity.emits_diagnostics() {
            log::warn!(
                "[-] Invalid encrypted data length: {} (minimum {} bytes required)",
                encrypted.len(),
                HINT_HEADER_LEN
            );
        }
        return Err(CrimsonkeyError::InvalidLength);
    }

    let hint = encrypted[0];
    let obfuscated_hint = encrypted[1];

    if verbosity.emits_diagnostics() {
        log::info!("[*] Brute-forcing key decryption...");
    }

    let candidate = match find_xor_candidate(hint, obfuscated_hint) {
        Some(candidate) => candidate,
        None => {
            if verbosity.emits_diagnostics() {
                log::warn!("[-] Failed to decrypt key - no valid XOR candidate found");
            }
            return Err(CrimsonkeyError::DecryptionFailed);
        }
    };

    let payload = &encrypted[HINT_HEADER_LEN..];

    // Fallible reservation keeps allocation failure an error, not an abort
    let mut decrypted = Vec::new();
    if decrypted.try_reserve_exact(payload.len()).is_err() {
        if verbosity.emits_diagnostics() {
            log::warn!("[-] Memory allocation failed");
        }
        return Err(CrimsonkeyError::AllocationFailure);
    }
    decrypted.extend(payload.iter().map(|byte| byte ^ candidate));

    if verbosity.emits_diagnostics() {
        log::info!("[+] Decrypted key with hint 0x{hint:02X}");
    }

    Ok(PlainKey::new(decrypted))
}
