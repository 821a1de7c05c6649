//! Digest and byte-order primitives.

use sha2::{Digest, Sha256};

/// The length of a digest (in bytes).
pub const HASH_LENGTH: usize = 32;

/// A double SHA-256 digest.
pub type CryptoHash = [u8; HASH_LENGTH];

/// `sha256(sha256(bytes))`. Any input length is accepted, including zero.
pub fn double_sha256(bytes: &[u8]) -> CryptoHash {
    let first = Sha256::digest(bytes);
    Sha256::digest(first).into()
}

/// Returns a copy of `bytes` in reverse order.
///
/// Converts between the internal (little-endian) byte order digests are
/// computed in and the reversed order hashes are displayed in.
pub fn reverse_bytes(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}
