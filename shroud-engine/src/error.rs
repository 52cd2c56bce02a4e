//! Engine error type.

use shroud_crypto::CryptoError;
use thiserror::Error;

/// Errors from service construction and encrypt/decrypt operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No passphrase configured and disabled mode was not requested.
    /// Fatal: the process must not continue past startup.
    #[error("master passphrase missing and encryption bypass not requested")]
    MissingPassphrase,

    /// Failure in the crypto core.
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

pub type EngineResult<T> = Result<T, EngineError>;
