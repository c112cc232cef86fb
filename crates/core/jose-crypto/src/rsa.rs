//! RSASSA-PKCS1-v1_5 signing/verification (RS256/RS384/RS512) and PEM export

use rsa::{
    BigUint, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey,
    pkcs1::EncodeRsaPrivateKey,
    pkcs8::{EncodePublicKey, LineEnding},
    traits::PrivateKeyParts,
};
use sha2::{Digest, Sha256, Sha384, Sha512};
use tracing::debug;

use crate::{CryptoError, HashFunc, RsaPrivateComponents, error::Result};

fn uint(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

fn public_key(n: &[u8], e: &[u8]) -> Result<RsaPublicKey> {
    RsaPublicKey::new(uint(n), uint(e))
        .map_err(|e| CryptoError::KeyError(format!("RSA public key isn't valid: {e}")))
}

/// Rebuilds the private key from n/e/d/p/q and checks the supplied CRT
/// values against the ones derived from it
fn private_key(components: &RsaPrivateComponents) -> Result<RsaPrivateKey> {
    let mut key = RsaPrivateKey::from_components(
        uint(components.n),
        uint(components.e),
        uint(components.d),
        vec![uint(components.p), uint(components.q)],
    )
    .map_err(|e| CryptoError::KeyError(format!("RSA private key isn't valid: {e}")))?;

    key.precompute()
        .map_err(|e| CryptoError::KeyError(format!("RSA CRT precomputation failed: {e}")))?;

    let consistent = key.dp() == Some(&uint(components.dp))
        && key.dq() == Some(&uint(components.dq))
        && key.crt_coefficient() == Some(uint(components.qi));
    if !consistent {
        return Err(CryptoError::KeyError(
            "RSA CRT parameters don't match the private key".into(),
        ));
    }

    Ok(key)
}

/// PKCS#1 v1.5 padding scheme plus the digest of `data` for the given hash
fn pkcs1v15(hash: HashFunc, data: &[u8]) -> Result<(Pkcs1v15Sign, Vec<u8>)> {
    match hash {
        HashFunc::Sha256 => Ok((Pkcs1v15Sign::new::<Sha256>(), Sha256::digest(data).to_vec())),
        HashFunc::Sha384 => Ok((Pkcs1v15Sign::new::<Sha384>(), Sha384::digest(data).to_vec())),
        HashFunc::Sha512 => Ok((Pkcs1v15Sign::new::<Sha512>(), Sha512::digest(data).to_vec())),
        HashFunc::None => Err(CryptoError::UnsupportedHash(hash.to_string())),
    }
}

/// Signs `data` with RSASSA-PKCS1-v1_5
pub fn rsa_sign(hash: HashFunc, data: &[u8], key: &RsaPrivateComponents) -> Result<Vec<u8>> {
    debug!(%hash, modulus_bytes = key.n.len(), "RSA sign");
    let (scheme, digest) = pkcs1v15(hash, data)?;
    private_key(key)?
        .sign(scheme, &digest)
        .map_err(|e| CryptoError::Signing(format!("RSA signing failed: {e}")))
}

/// Verifies an RSASSA-PKCS1-v1_5 signature
///
/// Returns `Ok(false)` for any signature that doesn't verify, including
/// ones of the wrong length. Only an unusable public key or hash is an error.
pub fn rsa_verify(
    hash: HashFunc,
    data: &[u8],
    n: &[u8],
    e: &[u8],
    signature: &[u8],
) -> Result<bool> {
    debug!(%hash, modulus_bytes = n.len(), "RSA verify");
    let (scheme, digest) = pkcs1v15(hash, data)?;
    let key = public_key(n, e)?;
    Ok(key.verify(scheme, &digest, signature).is_ok())
}

/// Encodes an RSA public key as a SubjectPublicKeyInfo PEM ("PUBLIC KEY")
pub fn rsa_public_key_to_pem(n: &[u8], e: &[u8]) -> Result<String> {
    public_key(n, e)?
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| CryptoError::Pem(e.to_string()))
}

/// Encodes an RSA private key as a PKCS#1 PEM ("RSA PRIVATE KEY")
pub fn rsa_private_key_to_pem(key: &RsaPrivateComponents) -> Result<String> {
    let pem = private_key(key)?
        .to_pkcs1_pem(LineEnding::LF)
        .map_err(|e| CryptoError::Pem(e.to_string()))?;
    Ok(pem.to_string())
}
