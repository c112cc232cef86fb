//! JWA signature algorithm identifiers (RFC 7518 §3.1)

use std::{fmt, str::FromStr};

use jose_crypto::HashFunc;

use crate::JwaError;

/// Which primitive an algorithm runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmFamily {
    Hmac,
    Rsa,
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    HS256,
    HS384,
    HS512,
    RS256,
    RS384,
    RS512,
}

impl Algorithm {
    pub fn hash(self) -> HashFunc {
        match self {
            Algorithm::HS256 | Algorithm::RS256 => HashFunc::Sha256,
            Algorithm::HS384 | Algorithm::RS384 => HashFunc::Sha384,
            Algorithm::HS512 | Algorithm::RS512 => HashFunc::Sha512,
        }
    }

    pub fn family(self) -> AlgorithmFamily {
        match self {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => AlgorithmFamily::Hmac,
            Algorithm::RS256 | Algorithm::RS384 | Algorithm::RS512 => AlgorithmFamily::Rsa,
        }
    }
}

impl TryFrom<&str> for Algorithm {
    type Error = JwaError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "HS256" => Ok(Algorithm::HS256),
            "HS384" => Ok(Algorithm::HS384),
            "HS512" => Ok(Algorithm::HS512),
            "RS256" => Ok(Algorithm::RS256),
            "RS384" => Ok(Algorithm::RS384),
            "RS512" => Ok(Algorithm::RS512),
            _ => Err(JwaError::UnsupportedAlgorithm(value.to_string())),
        }
    }
}

impl FromStr for Algorithm {
    type Err = JwaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::try_from(s)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
