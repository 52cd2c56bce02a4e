//! Engine configuration from trusted environment variables.
//!
//! Read once at initialization, never re-read afterward.

use zeroize::Zeroizing;

/// Master passphrase variable.
pub const ENV_MASTER_PASSPHRASE: &str = "SHROUD_MASTER_PASSPHRASE";

/// Disabled-mode flag. When truthy, the passphrase is not required and
/// the service performs no cryptography (local development only).
pub const ENV_ENCRYPTION_DISABLED: &str = "SHROUD_ENCRYPTION_DISABLED";

/// Configuration consumed by [`crate::EncryptionService::new`].
pub struct EngineConfig {
    /// Master passphrase; zeroized once key derivation is done.
    pub passphrase: Option<Zeroizing<String>>,
    /// Explicit security bypass for local development.
    pub disabled: bool,
}

impl EngineConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let disabled = lookup(ENV_ENCRYPTION_DISABLED)
            .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "True"))
            .unwrap_or(false);
        let passphrase = lookup(ENV_MASTER_PASSPHRASE).map(Zeroizing::new);
        Self { passphrase, disabled }
    }

    /// Config with an explicit passphrase (tests, embedded hosts).
    pub fn with_passphrase(passphrase: &str) -> Self {
        Self {
            passphrase: Some(Zeroizing::new(passphrase.to_string())),
            disabled: false,
        }
    }

    /// Config with the encryption bypass enabled.
    pub fn disabled() -> Self {
        Self {
            passphrase: None,
            disabled: true,
        }
    }
}
