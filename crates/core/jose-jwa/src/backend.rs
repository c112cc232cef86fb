//! Cryptographic backend seam
//!
//! The dispatcher never computes a signature itself. It validates key
//! material, decodes it, and hands raw bytes to a [`CryptoBackend`].

use jose_crypto::{CryptoError, HashFunc, RsaPrivateComponents};

pub trait CryptoBackend: Send + Sync {
    fn hmac_sign(&self, hash: HashFunc, data: &[u8], key: &[u8]) -> Result<Vec<u8>, CryptoError>;

    fn hmac_verify(
        &self,
        hash: HashFunc,
        data: &[u8],
        key: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError>;

    fn rsa_sign(
        &self,
        hash: HashFunc,
        data: &[u8],
        key: &RsaPrivateComponents,
    ) -> Result<Vec<u8>, CryptoError>;

    fn rsa_verify(
        &self,
        hash: HashFunc,
        data: &[u8],
        n: &[u8],
        e: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError>;

    fn rsa_public_key_to_pem(&self, n: &[u8], e: &[u8]) -> Result<String, CryptoError>;

    fn rsa_private_key_to_pem(&self, key: &RsaPrivateComponents) -> Result<String, CryptoError>;
}

/// Backend built on the RustCrypto primitives in `jose-crypto`
#[derive(Debug, Default, Clone, Copy)]
pub struct RustCryptoBackend;

#[cfg(not(feature = "rsa"))]
fn rsa_disabled<T>() -> Result<T, CryptoError> {
    Err(CryptoError::Unsupported(
        "RSA support isn't enabled (feature `rsa`)".into(),
    ))
}

impl CryptoBackend for RustCryptoBackend {
    fn hmac_sign(&self, hash: HashFunc, data: &[u8], key: &[u8]) -> Result<Vec<u8>, CryptoError> {
        jose_crypto::hmac_sign(hash, data, key)
    }

    fn hmac_verify(
        &self,
        hash: HashFunc,
        data: &[u8],
        key: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError> {
        jose_crypto::hmac_verify(hash, data, key, signature)
    }

    #[cfg(feature = "rsa")]
    fn rsa_sign(
        &self,
        hash: HashFunc,
        data: &[u8],
        key: &RsaPrivateComponents,
    ) -> Result<Vec<u8>, CryptoError> {
        jose_crypto::rsa_sign(hash, data, key)
    }

    #[cfg(not(feature = "rsa"))]
    fn rsa_sign(
        &self,
        _hash: HashFunc,
        _data: &[u8],
        _key: &RsaPrivateComponents,
    ) -> Result<Vec<u8>, CryptoError> {
        rsa_disabled()
    }

    #[cfg(feature = "rsa")]
    fn rsa_verify(
        &self,
        hash: HashFunc,
        data: &[u8],
        n: &[u8],
        e: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError> {
        jose_crypto::rsa_verify(hash, data, n, e, signature)
    }

    #[cfg(not(feature = "rsa"))]
    fn rsa_verify(
        &self,
        _hash: HashFunc,
        _data: &[u8],
        _n: &[u8],
        _e: &[u8],
        _signature: &[u8],
    ) -> Result<bool, CryptoError> {
        rsa_disabled()
    }

    #[cfg(feature = "rsa")]
    fn rsa_public_key_to_pem(&self, n: &[u8], e: &[u8]) -> Result<String, CryptoError> {
        jose_crypto::rsa_public_key_to_pem(n, e)
    }

    #[cfg(not(feature = "rsa"))]
    fn rsa_public_key_to_pem(&self, _n: &[u8], _e: &[u8]) -> Result<String, CryptoError> {
        rsa_disabled()
    }

    #[cfg(feature = "rsa")]
    fn rsa_private_key_to_pem(&self, key: &RsaPrivateComponents) -> Result<String, CryptoError> {
        jose_crypto::rsa_private_key_to_pem(key)
    }

    #[cfg(not(feature = "rsa"))]
    fn rsa_private_key_to_pem(&self, _key: &RsaPrivateComponents) -> Result<String, CryptoError> {
        rsa_disabled()
    }
}
