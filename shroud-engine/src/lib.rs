//! Process-wide encryption service for Shroud.
//!
//! Wires the crypto core to the host process: reads the master
//! passphrase from the environment, derives the key pair exactly once,
//! and exposes encrypt/decrypt operations to every consumer in the
//! process.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized ──init──▶ Active { key pair }
//!               └──init (disabled flag)──▶ Disabled
//! ```
//!
//! Both end states are terminal for the process's life. The first
//! initialization wins; later calls are no-ops returning the existing
//! service. Consumers hold an `Arc<EncryptionService>` — operations
//! take `&self`, never lock, and are safe from any thread.
//!
//! Disabled mode is a development-only bypass: every operation becomes
//! the identity function and a warning is logged at construction.

mod config;
mod error;
mod service;

use std::sync::{Arc, OnceLock};

pub use config::{EngineConfig, ENV_ENCRYPTION_DISABLED, ENV_MASTER_PASSPHRASE};
pub use error::{EngineError, EngineResult};
pub use service::EncryptionService;

static SERVICE: OnceLock<Arc<EncryptionService>> = OnceLock::new();

/// Initializes the process-wide service. First caller wins.
///
/// Subsequent calls return the already-initialized service unchanged,
/// even when handed a different configuration — the derived key pair
/// never changes for the remaining process lifetime. Safe under
/// concurrent first calls: exactly one initialization is published.
pub fn init_global(config: EngineConfig) -> EngineResult<Arc<EncryptionService>> {
    if let Some(existing) = SERVICE.get() {
        return Ok(existing.clone());
    }
    // A losing racer derives a key pair that is immediately dropped;
    // OnceLock publishes exactly one winner.
    let candidate = Arc::new(EncryptionService::new(config)?);
    Ok(SERVICE.get_or_init(|| candidate).clone())
}

/// Initializes the process-wide service from environment variables.
pub fn init_global_from_env() -> EngineResult<Arc<EncryptionService>> {
    init_global(EngineConfig::from_env())
}

/// Returns the process-wide service, if initialized.
pub fn global() -> Option<Arc<EncryptionService>> {
    SERVICE.get().cloned()
}
