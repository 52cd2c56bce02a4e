//! ChaCha20-Poly1305 payload encryption.
//!
//! Payloads are `nonce ‖ ciphertext+tag` with no self-describing
//! header — the caller already knows the bytes are ciphertext. String
//! variants wrap the byte codec in base64 so ciphertext can live in a
//! single text column.

use crate::error::{CryptoError, CryptoResult};
use crate::key::DerivedKey;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chacha20poly1305::aead::{Aead, AeadCore, KeyInit, OsRng};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};

/// ChaCha20-Poly1305 nonce length (96-bit).
pub const NONCE_SIZE: usize = 12;

/// Poly1305 authentication tag length (128-bit).
pub const TAG_SIZE: usize = 16;

/// Encrypts `plaintext` under a freshly drawn random nonce.
///
/// Output layout: `nonce (12) ‖ ciphertext+tag`. Every call draws a
/// new nonce from the OS RNG; nonce reuse under one key would void the
/// AEAD guarantee.
pub fn encrypt(key: &DerivedKey, plaintext: &[u8]) -> CryptoResult<Vec<u8>> {
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key.as_bytes()));
    let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|_| CryptoError::Encryption("AEAD seal failed".to_string()))?;

    let mut out = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// Decrypts a payload produced by [`encrypt`].
///
/// Fails with [`CryptoError::Decryption`] when the tag does not verify,
/// whether from a wrong key or from tampered ciphertext.
pub fn decrypt(key: &DerivedKey, payload: &[u8]) -> CryptoResult<Vec<u8>> {
    if payload.len() < NONCE_SIZE + TAG_SIZE {
        return Err(CryptoError::Truncated);
    }
    let (nonce, ciphertext) = payload.split_at(NONCE_SIZE);

    let cipher = ChaCha20Poly1305::new(Key::from_slice(key.as_bytes()));
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| CryptoError::Decryption)
}

/// Encrypts a UTF-8 string, returning base64 of the payload bytes.
pub fn encrypt_string(key: &DerivedKey, plaintext: &str) -> CryptoResult<String> {
    Ok(BASE64.encode(encrypt(key, plaintext.as_bytes())?))
}

/// Decrypts a base64 payload back to the original UTF-8 string.
pub fn decrypt_string(key: &DerivedKey, encoded: &str) -> CryptoResult<String> {
    let payload = BASE64
        .decode(encoded)
        .map_err(|e| CryptoError::InvalidEncoding(format!("base64: {e}")))?;
    let plaintext = decrypt(key, &payload)?;
    String::from_utf8(plaintext)
        .map_err(|e| CryptoError::InvalidEncoding(format!("utf-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KEY_SIZE;

    fn test_key() -> DerivedKey {
        DerivedKey::from_bytes([7u8; KEY_SIZE])
    }

    #[test]
    fn round_trip_bytes() {
        let key = test_key();
        let plaintext = b"database column contents";
        let payload = encrypt(&key, plaintext).unwrap();
        assert_eq!(decrypt(&key, &payload).unwrap(), plaintext);
    }

    #[test]
    fn round_trip_empty_plaintext() {
        let key = test_key();
        let payload = encrypt(&key, b"").unwrap();
        assert_eq!(payload.len(), NONCE_SIZE + TAG_SIZE);
        assert_eq!(decrypt(&key, &payload).unwrap(), b"");
    }

    #[test]
    fn same_plaintext_encrypts_differently() {
        let key = test_key();
        let a = encrypt(&key, b"repeated value").unwrap();
        let b = encrypt(&key, b"repeated value").unwrap();
        assert_ne!(a, b, "fresh nonce per call must vary the payload");
    }

    #[test]
    fn wrong_key_fails() {
        let payload = encrypt(&test_key(), b"secret").unwrap();
        let other = DerivedKey::from_bytes([8u8; KEY_SIZE]);
        assert!(matches!(
            decrypt(&other, &payload),
            Err(CryptoError::Decryption)
        ));
    }

    #[test]
    fn truncated_payload_rejected() {
        let key = test_key();
        let payload = encrypt(&key, b"x").unwrap();
        assert!(matches!(
            decrypt(&key, &payload[..NONCE_SIZE + TAG_SIZE - 1]),
            Err(CryptoError::Truncated)
        ));
        assert!(matches!(decrypt(&key, b""), Err(CryptoError::Truncated)));
    }

    #[test]
    fn round_trip_string() {
        let key = test_key();
        let encoded = encrypt_string(&key, "naïve résumé ✓").unwrap();
        assert_eq!(decrypt_string(&key, &encoded).unwrap(), "naïve résumé ✓");
    }

    #[test]
    fn string_payload_is_valid_base64() {
        let key = test_key();
        let encoded = encrypt_string(&key, "column value").unwrap();
        assert!(BASE64.decode(&encoded).is_ok());
    }

    #[test]
    fn garbage_base64_rejected() {
        assert!(matches!(
            decrypt_string(&test_key(), "not//valid**base64"),
            Err(CryptoError::InvalidEncoding(_))
        ));
    }
}
