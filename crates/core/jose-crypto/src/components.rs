//! Raw RSA key members handed to the primitives

use std::fmt;

/// Raw big-endian members of an RSA private key, CRT values included
#[derive(Clone, Copy)]
pub struct RsaPrivateComponents<'a> {
    pub n: &'a [u8],
    pub e: &'a [u8],
    pub d: &'a [u8],
    pub p: &'a [u8],
    pub q: &'a [u8],
    pub dp: &'a [u8],
    pub dq: &'a [u8],
    pub qi: &'a [u8],
}

impl fmt::Debug for RsaPrivateComponents<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateComponents")
            .field("n_len", &self.n.len())
            .field("e_len", &self.e.len())
            .finish_non_exhaustive()
    }
}
