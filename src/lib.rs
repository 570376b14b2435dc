// src/lib.rs

pub mod aliases;
pub mod consts;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod options;

// High-level API — this is what 99% of users import
pub use decryptor::decrypt;
pub use encryptor::encrypt;
pub use error::CrimsonkeyError;
pub use options::Verbosity;

// Deterministic encoding, needed for reproducible blobs and test vectors
pub use encryptor::encrypt_with;

pub use decryptor::find_xor_candidate; // Quick candidate probe without a payload pass
pub use error::error_string; // Raw status-code descriptions for C-side consumers
