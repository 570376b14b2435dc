// src/decryptor/search.rs

//! Brute-force scan over the single-byte XOR key space.

/// Find the key candidate satisfying `obfuscated_hint ^ candidate == hint`.
///
/// Scans all 256 candidates in ascending order and returns the first match.
/// XOR makes the solution unique (it is always `hint ^ obfuscated_hint`), so
/// "first" and "only" coincide; the ascending order is still part of the
/// contract and is what keeps the scan deterministic.
#[inline(always)]
pub fn find_xor_candidate(hint: u8, obfuscated_hint: u8) -> Option<u8> {
    (0..=u8::MAX).find(|&candidate| obfuscated_hint ^ candidate == hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_unique_solution_for_every_pair() {
        for hint in 0..=u8::MAX {
            for obfuscated in 0..=u8::MAX {
                assert_eq!(
                    find_xor_candidate(hint, obfuscated),
                    Some(hint ^ obfuscated)
                );
            }
        }
    }

    #[test]
    fn equal_bytes_mean_zero_key() {
        assert_eq!(find_xor_candidate(0x5a, 0x5a), Some(0x00));
    }

    #[test]
    fn known_header_pair() {
        // Header of the reference blob: hint 0x3c, obfuscated hint 0xf8.
        assert_eq!(find_xor_candidate(0x3c, 0xf8), Some(0xc4));
    }
}
