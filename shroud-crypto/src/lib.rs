//! Cryptographic core for Shroud.
//!
//! Everything the host application persists or exports flows through
//! this crate:
//! - PBKDF2-HMAC-SHA256 key derivation from the site master passphrase
//! - ChaCha20-Poly1305 authenticated encryption for byte payloads
//! - Base64 string wrappers for ciphertext stored in text columns
//! - A versioned, self-describing container format for encrypted files
//!
//! # Key model
//!
//! One master passphrase yields two independent keys, each derived with
//! its own fixed salt:
//!
//! 1. **Data key** (256-bit): used for all payload and file encryption.
//! 2. **Storage-unlock key** (128-bit): rendered as a hex string and
//!    handed to the storage engine as its native unlock credential.
//!    Never used for AEAD.
//!
//! This crate is purely computational — no I/O, no environment access,
//! no logging. Lifecycle and configuration live in `shroud-engine`.

mod cipher;
mod container;
mod error;
mod key;

pub use cipher::{
    decrypt, decrypt_string, encrypt, encrypt_string, NONCE_SIZE, TAG_SIZE,
};
pub use container::{open_file, seal_file, FORMAT_VERSION, MAGIC, MAX_NAME_LEN};
pub use error::{CryptoError, CryptoResult};
pub use key::{
    DerivedKey, KeyPair, StorageUnlockKey, DATA_KEY_SALT, KEY_SIZE, PBKDF2_ITERATIONS,
    STORAGE_KEY_SALT, STORAGE_KEY_SIZE,
};
