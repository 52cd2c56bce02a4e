//! Self-describing encrypted file container.
//!
//! Layout (integers big-endian):
//!
//! ```text
//! magic (4) | version (1) | name_len (2) | name | nonce (12) | ciphertext+tag
//! ```
//!
//! Unlike raw payloads, exported files carry provenance (the original
//! filename) and a format version so old containers stay readable if
//! the layout ever changes. Magic and version are checked before any
//! cryptographic work.

use crate::cipher::{self, NONCE_SIZE, TAG_SIZE};
use crate::error::{CryptoError, CryptoResult};
use crate::key::DerivedKey;

/// Magic bytes identifying a Shroud container.
pub const MAGIC: &[u8; 4] = b"SHRD";

/// Current container format version.
pub const FORMAT_VERSION: u8 = 1;

/// Maximum filename length in UTF-8 bytes (2-byte length field).
pub const MAX_NAME_LEN: usize = u16::MAX as usize;

/// magic + version + name_len
const HEADER_FIXED: usize = 4 + 1 + 2;

/// Seals file contents into a versioned container.
///
/// Rejects `original_name` longer than [`MAX_NAME_LEN`] UTF-8 bytes;
/// exactly 65 535 bytes is accepted.
pub fn seal_file(
    key: &DerivedKey,
    contents: &[u8],
    original_name: &str,
) -> CryptoResult<Vec<u8>> {
    let name = original_name.as_bytes();
    if name.len() > MAX_NAME_LEN {
        return Err(CryptoError::FilenameTooLong { len: name.len() });
    }

    let payload = cipher::encrypt(key, contents)?;

    let mut out = Vec::with_capacity(HEADER_FIXED + name.len() + payload.len());
    out.extend_from_slice(MAGIC);
    out.push(FORMAT_VERSION);
    out.extend_from_slice(&(name.len() as u16).to_be_bytes());
    out.extend_from_slice(name);
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Opens a container, returning `(original_name, contents)`.
///
/// Header checks run in order — magic, version, length — before the
/// payload is handed to the cipher. Tag verification failures surface
/// as [`CryptoError::Decryption`], same as raw payloads.
pub fn open_file(key: &DerivedKey, container: &[u8]) -> CryptoResult<(String, Vec<u8>)> {
    if container.len() < HEADER_FIXED {
        return Err(CryptoError::Truncated);
    }
    if &container[..4] != MAGIC {
        return Err(CryptoError::BadMagic);
    }
    let version = container[4];
    if version != FORMAT_VERSION {
        return Err(CryptoError::UnsupportedVersion(version));
    }

    let name_len = u16::from_be_bytes([container[5], container[6]]) as usize;
    let rest = &container[HEADER_FIXED..];
    if rest.len() < name_len + NONCE_SIZE + TAG_SIZE {
        return Err(CryptoError::Truncated);
    }

    let name = std::str::from_utf8(&rest[..name_len])
        .map_err(|e| CryptoError::InvalidEncoding(format!("filename utf-8: {e}")))?
        .to_string();
    let contents = cipher::decrypt(key, &rest[name_len..])?;
    Ok((name, contents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KEY_SIZE;

    fn test_key() -> DerivedKey {
        DerivedKey::from_bytes([3u8; KEY_SIZE])
    }

    #[test]
    fn round_trip_file() {
        let key = test_key();
        let sealed = seal_file(&key, b"exported document body", "report.pdf").unwrap();
        let (name, contents) = open_file(&key, &sealed).unwrap();
        assert_eq!(name, "report.pdf");
        assert_eq!(contents, b"exported document body");
    }

    #[test]
    fn round_trip_unicode_name() {
        let key = test_key();
        let sealed = seal_file(&key, b"x", "überblick März ✓.txt").unwrap();
        let (name, _) = open_file(&key, &sealed).unwrap();
        assert_eq!(name, "überblick März ✓.txt");
    }

    #[test]
    fn round_trip_empty_name_and_contents() {
        let key = test_key();
        let sealed = seal_file(&key, b"", "").unwrap();
        let (name, contents) = open_file(&key, &sealed).unwrap();
        assert!(name.is_empty());
        assert!(contents.is_empty());
    }

    #[test]
    fn name_of_65535_bytes_accepted() {
        let key = test_key();
        let name = "a".repeat(MAX_NAME_LEN);
        let sealed = seal_file(&key, b"body", &name).unwrap();
        let (recovered, _) = open_file(&key, &sealed).unwrap();
        assert_eq!(recovered.len(), MAX_NAME_LEN);
    }

    #[test]
    fn name_of_65536_bytes_rejected() {
        let key = test_key();
        let name = "a".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(
            seal_file(&key, b"body", &name),
            Err(CryptoError::FilenameTooLong { len: 65536 })
        ));
    }

    #[test]
    fn bad_magic_rejected_before_decryption() {
        let key = test_key();
        let mut sealed = seal_file(&key, b"body", "f.txt").unwrap();
        sealed[0] ^= 0xFF;
        assert!(matches!(open_file(&key, &sealed), Err(CryptoError::BadMagic)));
    }

    #[test]
    fn future_version_rejected() {
        let key = test_key();
        let mut sealed = seal_file(&key, b"body", "f.txt").unwrap();
        sealed[4] = FORMAT_VERSION + 1;
        assert!(matches!(
            open_file(&key, &sealed),
            Err(CryptoError::UnsupportedVersion(v)) if v == FORMAT_VERSION + 1
        ));
    }

    #[test]
    fn truncated_container_rejected() {
        let key = test_key();
        let sealed = seal_file(&key, b"body", "f.txt").unwrap();
        assert!(matches!(
            open_file(&key, &sealed[..HEADER_FIXED]),
            Err(CryptoError::Truncated)
        ));
        assert!(matches!(
            open_file(&key, &sealed[..sealed.len() - 1]),
            Err(CryptoError::Decryption)
        ));
        assert!(matches!(open_file(&key, b"SH"), Err(CryptoError::Truncated)));
    }

    #[test]
    fn wrong_key_fails_open() {
        let sealed = seal_file(&test_key(), b"body", "f.txt").unwrap();
        let other = DerivedKey::from_bytes([4u8; KEY_SIZE]);
        assert!(matches!(
            open_file(&other, &sealed),
            Err(CryptoError::Decryption)
        ));
    }

    #[test]
    fn header_is_laid_out_as_documented() {
        let key = test_key();
        let sealed = seal_file(&key, b"body", "ab").unwrap();
        assert_eq!(&sealed[..4], MAGIC);
        assert_eq!(sealed[4], FORMAT_VERSION);
        assert_eq!(u16::from_be_bytes([sealed[5], sealed[6]]), 2);
        assert_eq!(&sealed[7..9], b"ab");
        // nonce + "body" + tag
        assert_eq!(sealed.len(), HEADER_FIXED + 2 + NONCE_SIZE + 4 + TAG_SIZE);
    }
}
