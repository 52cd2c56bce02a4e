//! Error taxonomy for the crypto core.

use thiserror::Error;

/// Errors from key derivation, encryption, and container parsing.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key derivation failed (fatal configuration problem).
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// AEAD seal failure.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Authentication tag did not verify. Deliberately does not
    /// distinguish a wrong key from tampered/corrupted ciphertext —
    /// either way the data cannot be trusted.
    #[error("decryption failed (wrong key or tampered data)")]
    Decryption,

    /// Filename too long for the container's 2-byte length field.
    #[error("filename too long for container ({len} bytes, max 65535)")]
    FilenameTooLong { len: usize },

    /// Container does not start with the expected magic tag.
    #[error("not a shroud container (bad magic)")]
    BadMagic,

    /// Container declares a format version this build cannot read.
    #[error("unsupported container version: {0}")]
    UnsupportedVersion(u8),

    /// Payload or container shorter than its fixed framing.
    #[error("truncated payload")]
    Truncated,

    /// Base64 or UTF-8 decode failure on the string codec path.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),
}

pub type CryptoResult<T> = Result<T, CryptoError>;
