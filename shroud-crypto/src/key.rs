//! Key derivation from the master passphrase.
//!
//! PBKDF2-HMAC-SHA256 with a fixed, deliberately high iteration count.
//! Derivation is a one-time process-startup cost; the iteration count
//! is what makes offline passphrase guessing expensive.
//!
//! Each key purpose has its own fixed salt, so the data key and the
//! storage-unlock key have no discoverable relationship even though
//! both come from the same passphrase.

use crate::error::{CryptoError, CryptoResult};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Data key length in bytes (256-bit).
pub const KEY_SIZE: usize = 32;

/// Storage-unlock key length in bytes (128-bit).
pub const STORAGE_KEY_SIZE: usize = 16;

/// PBKDF2 iteration count. Fixed: changing it changes every derived key.
pub const PBKDF2_ITERATIONS: u32 = 200_000;

/// Salt for the payload/file data key.
pub const DATA_KEY_SALT: &[u8] = b"shroud.data-key.v1";

/// Salt for the storage engine's unlock credential.
pub const STORAGE_KEY_SALT: &[u8] = b"shroud.storage-unlock.v1";

fn derive_into(passphrase: &str, salt: &[u8], out: &mut [u8]) -> CryptoResult<()> {
    if passphrase.is_empty() {
        return Err(CryptoError::KeyDerivation("empty passphrase".to_string()));
    }
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, PBKDF2_ITERATIONS, out);
    Ok(())
}

/// 256-bit symmetric key for all payload and file encryption.
///
/// Zeroized on drop. The raw bytes never leave the owning service.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; KEY_SIZE]);

impl DerivedKey {
    /// Derives the data key from the master passphrase.
    pub fn derive(passphrase: &str) -> CryptoResult<Self> {
        let mut bytes = [0u8; KEY_SIZE];
        derive_into(passphrase, DATA_KEY_SALT, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Wraps raw key bytes (tests and key-handling internals).
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey(..)")
    }
}

/// 128-bit key whose hex rendering unlocks the storage engine.
///
/// This is a credential for an external collaborator, not an AEAD key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct StorageUnlockKey([u8; STORAGE_KEY_SIZE]);

impl StorageUnlockKey {
    /// Derives the storage-unlock key from the master passphrase.
    pub fn derive(passphrase: &str) -> CryptoResult<Self> {
        let mut bytes = [0u8; STORAGE_KEY_SIZE];
        derive_into(passphrase, STORAGE_KEY_SALT, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Renders the key as a lowercase hex credential.
    ///
    /// The only derived secret meant to cross the service boundary;
    /// the `Zeroizing` wrapper clears it once the consumer drops it.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(self.0.iter().map(|b| format!("{b:02x}")).collect())
    }
}

impl std::fmt::Debug for StorageUnlockKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StorageUnlockKey(..)")
    }
}

/// Both keys derived from one master passphrase.
#[derive(Clone, Debug)]
pub struct KeyPair {
    pub data: DerivedKey,
    pub storage_unlock: StorageUnlockKey,
}

impl KeyPair {
    /// Derives both keys. Deterministic per passphrase.
    pub fn derive(passphrase: &str) -> CryptoResult<Self> {
        Ok(Self {
            data: DerivedKey::derive(passphrase)?,
            storage_unlock: StorageUnlockKey::derive(passphrase)?,
        })
    }
}
