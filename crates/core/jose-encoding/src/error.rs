//! Encoding errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Invalid base64url encoding: {0}")]
    InvalidBase64(String),

    #[error("Empty integer value")]
    EmptyInteger,
}
