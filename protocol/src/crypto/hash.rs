//! # Hashing
//!
//! The block hash is a fixed-size digest of the block's canonical pre-image,
//! compared as lowercase hex. Which digest is a deployment decision, so the
//! validators only ever see the [`Hasher`] trait.
//!
//! - **SHA-256**: the default. Chains produced by other implementations of
//!   these consensus rules use it, and hashes must match bit for bit.
//! - **BLAKE3**: available for private deployments that control both the
//!   producing and the validating side.
//!
//! Mixing the two is not an error we can detect; a chain hashed with one and
//! validated with the other simply fails every block's tamper check.

use sha2::{Digest, Sha256};

use crate::config::HASH_OUTPUT_LENGTH;

/// A deterministic, collision-resistant digest rendered as lowercase hex.
///
/// Implementations must be pure: same input, same output, no hidden state.
pub trait Hasher {
    /// Digest `data` and return the result as lowercase hex.
    fn digest_hex(&self, data: &[u8]) -> String;
}

impl<H: Hasher + ?Sized> Hasher for &H {
    fn digest_hex(&self, data: &[u8]) -> String {
        (**self).digest_hex(data)
    }
}

/// SHA-256, hex-encoded. The default block hasher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Hasher;

impl Hasher for Sha256Hasher {
    fn digest_hex(&self, data: &[u8]) -> String {
        hex::encode(sha256(data))
    }
}

/// BLAKE3, hex-encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blake3Hasher;

impl Hasher for Blake3Hasher {
    fn digest_hex(&self, data: &[u8]) -> String {
        blake3::hash(data).to_hex().to_string()
    }
}

/// Compute the SHA-256 hash of the input data as a fixed-size array.
///
/// # Example
///
/// ```
/// use blockcheck::crypto::hash::sha256;
///
/// let hash = sha256(b"blockcheck");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; HASH_OUTPUT_LENGTH] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the BLAKE3 hash of the input data.
pub fn blake3_hash(data: &[u8]) -> [u8; HASH_OUTPUT_LENGTH] {
    *blake3::hash(data).as_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        // SHA-256 of the empty string.
        assert_eq!(
            Sha256Hasher.digest_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_abc_vector() {
        assert_eq!(
            Sha256Hasher.digest_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn digests_are_lowercase_hex() {
        for hex_str in [Sha256Hasher.digest_hex(b"x"), Blake3Hasher.digest_hex(b"x")] {
            assert_eq!(hex_str.len(), HASH_OUTPUT_LENGTH * 2);
            assert!(hex_str
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn blake3_hex_matches_raw() {
        let data = b"consistency check";
        assert_eq!(Blake3Hasher.digest_hex(data), hex::encode(blake3_hash(data)));
        assert_eq!(sha256(data).len(), HASH_OUTPUT_LENGTH);
    }

    #[test]
    fn hashers_disagree() {
        // Same input, different algorithm: a chain built with one must not
        // validate under the other.
        assert_ne!(
            Sha256Hasher.digest_hex(b"blockcheck"),
            Blake3Hasher.digest_hex(b"blockcheck")
        );
    }

    #[test]
    fn reference_hasher_delegates() {
        let hasher = Sha256Hasher;
        let by_ref = &hasher;
        assert_eq!(by_ref.digest_hex(b"abc"), hasher.digest_hex(b"abc"));
    }
}
