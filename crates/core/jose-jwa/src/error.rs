//! Error types for key material handling and algorithm dispatch

use jose_crypto::CryptoError;
use jose_encoding::EncodingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JwaError {
    #[error("Key member `{0}` must be a JSON string")]
    MalformedField(&'static str),

    #[error("Key document isn't a JSON object: {0}")]
    InvalidDocument(String),

    #[error("Key material was never parsed")]
    UnparsedKey,

    #[error("Key member `{0}` is required but empty")]
    IncompleteKey(&'static str),

    #[error("Unsupported hash function: {0}")]
    UnsupportedHash(String),

    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Unsupported key type: {0}")]
    UnsupportedKeyType(String),

    #[error("Algorithm {alg} can't be used with a key of type {kty}")]
    KeyMismatch { alg: String, kty: &'static str },

    #[error("Field lookup table already maps {0}")]
    DuplicateField(String),

    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Crypto error: {0}")]
    Crypto(CryptoError),
}

/// Hash rejections from the primitives surface as `UnsupportedHash`; every
/// other primitive error is carried through unchanged.
impl From<CryptoError> for JwaError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::UnsupportedHash(name) => JwaError::UnsupportedHash(name),
            other => JwaError::Crypto(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, JwaError>;
