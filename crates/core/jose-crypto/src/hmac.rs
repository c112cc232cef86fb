//! HMAC signing and verification (HS256/HS384/HS512)

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use tracing::debug;

use crate::{CryptoError, HashFunc, error::Result};

macro_rules! keyed_mac {
    ($digest:ty, $key:expr) => {
        Hmac::<$digest>::new_from_slice($key)
            .map_err(|e| CryptoError::KeyError(format!("HMAC key isn't valid: {e}")))
    };
}

/// Computes the HMAC of `data` under `key`
pub fn hmac_sign(hash: HashFunc, data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    debug!(%hash, "HMAC sign");
    let tag = match hash {
        HashFunc::Sha256 => {
            let mut mac = keyed_mac!(Sha256, key)?;
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        HashFunc::Sha384 => {
            let mut mac = keyed_mac!(Sha384, key)?;
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        HashFunc::Sha512 => {
            let mut mac = keyed_mac!(Sha512, key)?;
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        HashFunc::None => return Err(CryptoError::UnsupportedHash(hash.to_string())),
    };
    Ok(tag)
}

/// Checks `signature` against the HMAC of `data` in constant time
///
/// A signature of the wrong length is a mismatch, not an error.
pub fn hmac_verify(hash: HashFunc, data: &[u8], key: &[u8], signature: &[u8]) -> Result<bool> {
    debug!(%hash, "HMAC verify");
    let verified = match hash {
        HashFunc::Sha256 => {
            let mut mac = keyed_mac!(Sha256, key)?;
            mac.update(data);
            mac.verify_slice(signature).is_ok()
        }
        HashFunc::Sha384 => {
            let mut mac = keyed_mac!(Sha384, key)?;
            mac.update(data);
            mac.verify_slice(signature).is_ok()
        }
        HashFunc::Sha512 => {
            let mut mac = keyed_mac!(Sha512, key)?;
            mac.update(data);
            mac.verify_slice(signature).is_ok()
        }
        HashFunc::None => return Err(CryptoError::UnsupportedHash(hash.to_string())),
    };
    Ok(verified)
}
