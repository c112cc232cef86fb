//! Error types for cryptographic operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Key error: {0}")]
    KeyError(String),

    #[error("Unsupported hash function: {0}")]
    UnsupportedHash(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("PEM encoding error: {0}")]
    Pem(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;
