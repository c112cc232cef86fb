//! base64url encoding/decoding utilities
//!
//! Encoding always emits the unpadded URL-safe alphabet. Decoding accepts
//! input with or without trailing `=` padding, since some producers pad
//! despite RFC 7515.
//!
//! See: <https://www.rfc-editor.org/rfc/rfc4648#section-5>

use base64::{
    Engine,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    prelude::BASE64_URL_SAFE_NO_PAD,
};
use zeroize::Zeroizing;

use crate::EncodingError;

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes as unpadded base64url text
pub fn urlsafe_base64_encode(bytes: &[u8]) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode base64url text (padding optional)
pub fn urlsafe_base64_decode(s: &str) -> Result<Vec<u8>, EncodingError> {
    URL_SAFE_LENIENT
        .decode(s)
        .map_err(|e| EncodingError::InvalidBase64(e.to_string()))
}

/// Decode a base64url big-endian unsigned integer member (`n`, `e`, `d`, ...)
///
/// The result is wrapped in [`Zeroizing`] since most of these members are
/// private key material. An empty string, or text that decodes to zero
/// bytes, is rejected.
pub fn decode_uint(s: &str) -> Result<Zeroizing<Vec<u8>>, EncodingError> {
    let bytes = Zeroizing::new(urlsafe_base64_decode(s)?);
    if bytes.is_empty() {
        return Err(EncodingError::EmptyInteger);
    }
    Ok(bytes)
}
