//! Hash function selector

use std::{fmt, str::FromStr};

use crate::CryptoError;

/// Digest used by a signing primitive
///
/// `None` exists for algorithms that carry no external digest. Neither HMAC
/// nor RSA accept it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFunc {
    #[default]
    None,
    Sha256,
    Sha384,
    Sha512,
}

impl HashFunc {
    /// Output size of the digest in bytes (0 for `None`)
    pub fn digest_len(&self) -> usize {
        match self {
            HashFunc::None => 0,
            HashFunc::Sha256 => 32,
            HashFunc::Sha384 => 48,
            HashFunc::Sha512 => 64,
        }
    }

    /// Returns an error unless this selector names a real digest
    pub fn require_digest(self) -> Result<Self, CryptoError> {
        match self {
            HashFunc::None => Err(CryptoError::UnsupportedHash(self.to_string())),
            _ => Ok(self),
        }
    }
}

impl TryFrom<&str> for HashFunc {
    type Error = CryptoError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "none" => Ok(HashFunc::None),
            "SHA-256" => Ok(HashFunc::Sha256),
            "SHA-384" => Ok(HashFunc::Sha384),
            "SHA-512" => Ok(HashFunc::Sha512),
            _ => Err(CryptoError::UnsupportedHash(value.to_string())),
        }
    }
}

impl FromStr for HashFunc {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HashFunc::try_from(s)
    }
}

impl fmt::Display for HashFunc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HashFunc::None => write!(f, "none"),
            HashFunc::Sha256 => write!(f, "SHA-256"),
            HashFunc::Sha384 => write!(f, "SHA-384"),
            HashFunc::Sha512 => write!(f, "SHA-512"),
        }
    }
}
