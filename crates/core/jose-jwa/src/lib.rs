//! JWK key material and JWA algorithm dispatch for libjose
//!
//! This crate provides:
//! - Field lookup tables between key members and their JSON names
//! - A key document parser that fills typed EC, RSA and symmetric records
//! - An algorithm dispatcher routing records to HMAC or RSA primitives
//! - PEM export of RSA key material
//!
//! Parsing only checks structure: a recognized member that isn't a string
//! marks the record invalid. Missing members are reported by the operation
//! that needs them.
//!
//! ```
//! use jose_jwa::{Dispatcher, HashFunc, OctKey};
//!
//! let key = OctKey::from_json(r#"{"kty":"oct","k":"c2VjcmV0"}"#);
//! assert!(key.is_valid());
//!
//! let dispatcher: Dispatcher = Dispatcher::default();
//! let tag = dispatcher.oct_sign(HashFunc::Sha256, b"payload", &key).unwrap();
//! assert!(dispatcher.oct_verify(HashFunc::Sha256, b"payload", &key, &tag).unwrap());
//! ```

mod algorithm;
pub mod backend;
pub mod dispatch;
mod document;
mod error;
pub mod field;
mod jwk;
mod parser;
pub mod pem;
mod record;

pub use algorithm::{Algorithm, AlgorithmFamily};
pub use backend::{CryptoBackend, RustCryptoBackend};
pub use dispatch::{Dispatcher, hmac_sign, hmac_verify, rsa_sign, rsa_verify};
pub use document::KeyDocument;
pub use error::JwaError;
pub use field::{EcField, FieldTable, KeyField, OctField, RsaField};
pub use jwk::Jwk;
pub use pem::ToPem;
pub use record::{EcKey, KeyRecord, OctKey, RsaKey};

pub use jose_crypto::{CryptoError, HashFunc};
