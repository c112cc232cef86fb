//! base64url text codec for libjose
//!
//! JOSE carries every binary key member as base64url text without padding
//! (RFC 7515 §2). This crate provides the encode/decode pair the key
//! material layer builds on, plus helpers for big-endian integer members.

pub mod base64url;

pub use base64url::{decode_uint, urlsafe_base64_decode, urlsafe_base64_encode};

mod error;
pub use error::EncodingError;
