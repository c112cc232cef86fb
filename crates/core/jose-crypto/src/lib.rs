//! Cryptographic primitives for libjose
//!
//! This crate provides the operations the key material layer delegates to:
//! - HMAC signing and constant-time verification (SHA-256/384/512)
//! - RSASSA-PKCS1-v1_5 signing and verification
//! - RSA public/private key export to PEM
//!
//! All integers are passed as raw big-endian bytes. base64url handling lives
//! in `jose-encoding`, JSON handling in `jose-jwa`.

mod components;
mod error;
mod hash;
pub mod hmac;

#[cfg(feature = "rsa")]
pub mod rsa;

pub use components::RsaPrivateComponents;
pub use error::CryptoError;
pub use hash::HashFunc;
pub use crate::hmac::{hmac_sign, hmac_verify};

#[cfg(feature = "rsa")]
pub use crate::rsa::{rsa_private_key_to_pem, rsa_public_key_to_pem, rsa_sign, rsa_verify};
