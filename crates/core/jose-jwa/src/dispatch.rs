//! Algorithm dispatcher
//!
//! Routes key material to the HMAC or RSA primitive for a given hash. Every
//! check happens here, before the backend is called: the hash must name a
//! digest, the record must have parsed cleanly, and every member the
//! operation needs must be non-empty. Members are base64url-decoded on the
//! way through. Errors raised by the primitive itself are passed on as-is.

use jose_crypto::{HashFunc, RsaPrivateComponents};
use jose_encoding::decode_uint;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::{
    Algorithm, AlgorithmFamily, JwaError, Jwk, OctKey, RsaKey,
    backend::{CryptoBackend, RustCryptoBackend},
    error::Result,
    field::{KeyField, OctField, RsaField},
    record::KeyRecord,
};

#[derive(Debug, Default, Clone)]
pub struct Dispatcher<B = RustCryptoBackend> {
    backend: B,
}

fn supported(hash: HashFunc) -> Result<HashFunc> {
    match hash {
        HashFunc::None => Err(JwaError::UnsupportedHash(hash.to_string())),
        _ => Ok(hash),
    }
}

fn required<'a, F: KeyField>(key: &'a KeyRecord<F>, field: F) -> Result<&'a str> {
    key.require(field).inspect_err(|_| {
        warn!(family = F::FAMILY, member = field.name(), "required key member is empty");
    })
}

fn decode<F: KeyField>(key: &KeyRecord<F>, field: F) -> Result<Zeroizing<Vec<u8>>> {
    Ok(decode_uint(required(key, field)?)?)
}

/// Decoded RSA private key members
struct RsaMembers {
    n: Zeroizing<Vec<u8>>,
    e: Zeroizing<Vec<u8>>,
    d: Zeroizing<Vec<u8>>,
    p: Zeroizing<Vec<u8>>,
    q: Zeroizing<Vec<u8>>,
    dp: Zeroizing<Vec<u8>>,
    dq: Zeroizing<Vec<u8>>,
    qi: Zeroizing<Vec<u8>>,
}

impl RsaMembers {
    /// All eight members must be present before any of them is decoded
    fn decode(key: &RsaKey) -> Result<Self> {
        key.ensure_valid()?;
        for (field, _) in RsaField::table().iter() {
            required(key, *field)?;
        }
        Ok(RsaMembers {
            n: decode(key, RsaField::Modulus)?,
            e: decode(key, RsaField::Exponent)?,
            d: decode(key, RsaField::PrivateExponent)?,
            p: decode(key, RsaField::FirstPrime)?,
            q: decode(key, RsaField::SecondPrime)?,
            dp: decode(key, RsaField::FirstCrtExponent)?,
            dq: decode(key, RsaField::SecondCrtExponent)?,
            qi: decode(key, RsaField::CrtCoefficient)?,
        })
    }

    fn components(&self) -> RsaPrivateComponents<'_> {
        RsaPrivateComponents {
            n: &self.n,
            e: &self.e,
            d: &self.d,
            p: &self.p,
            q: &self.q,
            dp: &self.dp,
            dq: &self.dq,
            qi: &self.qi,
        }
    }
}

impl<B: CryptoBackend> Dispatcher<B> {
    pub fn new(backend: B) -> Self {
        Dispatcher { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// HMAC over `data` with raw key bytes
    pub fn hmac_sign(&self, hash: HashFunc, data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let hash = supported(hash)?;
        debug!(%hash, "dispatching HMAC sign");
        Ok(self.backend.hmac_sign(hash, data, key)?)
    }

    /// `Ok(false)` on mismatch, never an error for a malformed signature
    pub fn hmac_verify(
        &self,
        hash: HashFunc,
        data: &[u8],
        key: &[u8],
        signature: &[u8],
    ) -> Result<bool> {
        let hash = supported(hash)?;
        debug!(%hash, "dispatching HMAC verify");
        Ok(self.backend.hmac_verify(hash, data, key, signature)?)
    }

    /// HMAC over `data` with the `k` member of a symmetric key
    pub fn oct_sign(&self, hash: HashFunc, data: &[u8], key: &OctKey) -> Result<Vec<u8>> {
        let hash = supported(hash)?;
        key.ensure_valid()?;
        let k = decode(key, OctField::Key)?;
        self.hmac_sign(hash, data, &k)
    }

    pub fn oct_verify(
        &self,
        hash: HashFunc,
        data: &[u8],
        key: &OctKey,
        signature: &[u8],
    ) -> Result<bool> {
        let hash = supported(hash)?;
        key.ensure_valid()?;
        let k = decode(key, OctField::Key)?;
        self.hmac_verify(hash, data, &k, signature)
    }

    /// RSASSA-PKCS1-v1_5 signature; needs n, e, d and all CRT members
    pub fn rsa_sign(&self, hash: HashFunc, data: &[u8], key: &RsaKey) -> Result<Vec<u8>> {
        let hash = supported(hash)?;
        let members = RsaMembers::decode(key)?;
        debug!(%hash, "dispatching RSA sign");
        Ok(self.backend.rsa_sign(hash, data, &members.components())?)
    }

    /// Public-key verification from base64url `n` and `e`
    pub fn rsa_verify(
        &self,
        hash: HashFunc,
        data: &[u8],
        n: &str,
        e: &str,
        signature: &[u8],
    ) -> Result<bool> {
        let hash = supported(hash)?;
        if n.is_empty() {
            return Err(JwaError::IncompleteKey(RsaField::Modulus.name()));
        }
        if e.is_empty() {
            return Err(JwaError::IncompleteKey(RsaField::Exponent.name()));
        }
        let (n, e) = (decode_uint(n)?, decode_uint(e)?);
        debug!(%hash, "dispatching RSA verify");
        Ok(self.backend.rsa_verify(hash, data, &n, &e, signature)?)
    }

    /// Public-key verification using the `n` and `e` of a record
    pub fn rsa_verify_key(
        &self,
        hash: HashFunc,
        data: &[u8],
        key: &RsaKey,
        signature: &[u8],
    ) -> Result<bool> {
        let hash = supported(hash)?;
        key.ensure_valid()?;
        let n = required(key, RsaField::Modulus)?;
        let e = required(key, RsaField::Exponent)?;
        self.rsa_verify(hash, data, n, e, signature)
    }

    /// Signs with a JWA algorithm name; the key family must match it
    pub fn sign(&self, alg: Algorithm, data: &[u8], key: &Jwk) -> Result<Vec<u8>> {
        match (alg.family(), key) {
            (AlgorithmFamily::Hmac, Jwk::Oct(key)) => self.oct_sign(alg.hash(), data, key),
            (AlgorithmFamily::Rsa, Jwk::Rsa(key)) => self.rsa_sign(alg.hash(), data, key),
            _ => Err(JwaError::KeyMismatch {
                alg: alg.to_string(),
                kty: key.kty(),
            }),
        }
    }

    pub fn verify(&self, alg: Algorithm, data: &[u8], key: &Jwk, signature: &[u8]) -> Result<bool> {
        match (alg.family(), key) {
            (AlgorithmFamily::Hmac, Jwk::Oct(key)) => {
                self.oct_verify(alg.hash(), data, key, signature)
            }
            (AlgorithmFamily::Rsa, Jwk::Rsa(key)) => {
                self.rsa_verify_key(alg.hash(), data, key, signature)
            }
            _ => Err(JwaError::KeyMismatch {
                alg: alg.to_string(),
                kty: key.kty(),
            }),
        }
    }
}

/// [`Dispatcher::hmac_sign`] on the default backend
pub fn hmac_sign(hash: HashFunc, data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    Dispatcher::<RustCryptoBackend>::default().hmac_sign(hash, data, key)
}

/// [`Dispatcher::hmac_verify`] on the default backend
pub fn hmac_verify(hash: HashFunc, data: &[u8], key: &[u8], signature: &[u8]) -> Result<bool> {
    Dispatcher::<RustCryptoBackend>::default().hmac_verify(hash, data, key, signature)
}

/// [`Dispatcher::rsa_sign`] on the default backend
pub fn rsa_sign(hash: HashFunc, data: &[u8], key: &RsaKey) -> Result<Vec<u8>> {
    Dispatcher::<RustCryptoBackend>::default().rsa_sign(hash, data, key)
}

/// [`Dispatcher::rsa_verify`] on the default backend
pub fn rsa_verify(hash: HashFunc, data: &[u8], n: &str, e: &str, signature: &[u8]) -> Result<bool> {
    Dispatcher::<RustCryptoBackend>::default().rsa_verify(hash, data, n, e, signature)
}
