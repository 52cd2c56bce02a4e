//! The encryption service: Active with a derived key pair, or the
//! development-only Disabled bypass.

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use shroud_crypto::KeyPair;
use tracing::{info, warn};
use zeroize::Zeroizing;

/// Exhaustive service mode. Every operation pattern-matches on this,
/// so the bypass can never be taken accidentally.
enum Mode {
    Active { keys: KeyPair },
    Disabled,
}

/// Authenticated encrypt/decrypt for bytes, strings, and files.
///
/// Stateless after construction: operations take `&self`, never block,
/// and may run from any number of threads concurrently.
pub struct EncryptionService {
    mode: Mode,
}

impl EncryptionService {
    /// Builds a service from configuration, deriving both keys.
    ///
    /// With the disabled flag set this skips derivation entirely and
    /// logs a warning — plaintext passthrough must never be mistaken
    /// for the secured mode. Otherwise a non-empty passphrase is
    /// required.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        if config.disabled {
            warn!(
                "encryption DISABLED by configuration; all data passes through as plaintext"
            );
            return Ok(Self { mode: Mode::Disabled });
        }

        let passphrase = config
            .passphrase
            .as_ref()
            .filter(|p| !p.is_empty())
            .ok_or(EngineError::MissingPassphrase)?;

        let keys = KeyPair::derive(passphrase)?;
        info!("encryption keys derived; service active");
        Ok(Self { mode: Mode::Active { keys } })
    }

    /// Whether the service is running in the plaintext bypass.
    pub fn is_disabled(&self) -> bool {
        matches!(self.mode, Mode::Disabled)
    }

    /// Encrypts a byte buffer into a headerless `nonce ‖ ciphertext+tag`
    /// payload. Identity in disabled mode.
    pub fn encrypt_bytes(&self, plaintext: &[u8]) -> EngineResult<Vec<u8>> {
        match &self.mode {
            Mode::Active { keys } => Ok(shroud_crypto::encrypt(&keys.data, plaintext)?),
            Mode::Disabled => Ok(plaintext.to_vec()),
        }
    }

    /// Decrypts a payload from [`Self::encrypt_bytes`]. Identity in
    /// disabled mode.
    pub fn decrypt_bytes(&self, payload: &[u8]) -> EngineResult<Vec<u8>> {
        match &self.mode {
            Mode::Active { keys } => Ok(shroud_crypto::decrypt(&keys.data, payload)?),
            Mode::Disabled => Ok(payload.to_vec()),
        }
    }

    /// Encrypts a string to base64 ciphertext safe for text columns.
    /// Identity in disabled mode.
    pub fn encrypt_string(&self, plaintext: &str) -> EngineResult<String> {
        match &self.mode {
            Mode::Active { keys } => Ok(shroud_crypto::encrypt_string(&keys.data, plaintext)?),
            Mode::Disabled => Ok(plaintext.to_string()),
        }
    }

    /// Decrypts base64 ciphertext from [`Self::encrypt_string`].
    /// Identity in disabled mode.
    pub fn decrypt_string(&self, encoded: &str) -> EngineResult<String> {
        match &self.mode {
            Mode::Active { keys } => Ok(shroud_crypto::decrypt_string(&keys.data, encoded)?),
            Mode::Disabled => Ok(encoded.to_string()),
        }
    }

    /// Seals file contents into a versioned container carrying the
    /// original filename. Identity in disabled mode (no container is
    /// written, so no provenance is kept).
    pub fn encrypt_file(&self, contents: &[u8], original_name: &str) -> EngineResult<Vec<u8>> {
        match &self.mode {
            Mode::Active { keys } => {
                Ok(shroud_crypto::seal_file(&keys.data, contents, original_name)?)
            }
            Mode::Disabled => Ok(contents.to_vec()),
        }
    }

    /// Opens a container, returning `(original_name, contents)`.
    /// Identity in disabled mode, with an empty name.
    pub fn decrypt_file(&self, container: &[u8]) -> EngineResult<(String, Vec<u8>)> {
        match &self.mode {
            Mode::Active { keys } => Ok(shroud_crypto::open_file(&keys.data, container)?),
            Mode::Disabled => Ok((String::new(), container.to_vec())),
        }
    }

    /// Hex credential unlocking the storage engine, derived from the
    /// storage-unlock key. `None` when disabled (the storage engine
    /// runs unencrypted too). Never logged.
    pub fn storage_unlock_credential(&self) -> Option<Zeroizing<String>> {
        match &self.mode {
            Mode::Active { keys } => Some(keys.storage_unlock.to_hex()),
            Mode::Disabled => None,
        }
    }
}
