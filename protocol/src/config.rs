//! # Protocol Constants
//!
//! Every value that affects what bytes get hashed or signed lives here.
//! Changing any of these silently invalidates every chain produced before
//! the change, so don't.

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// Ed25519 for transaction signatures.
pub const SIGNING_ALGORITHM: &str = "Ed25519";

/// Public (verifying) key length in bytes. An identity is this many bytes, hex-encoded.
pub const IDENTITY_LENGTH: usize = 32;

/// Ed25519 signature length in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// Default block hash function.
pub const DEFAULT_HASH_FUNCTION: &str = "SHA-256";

/// Digest length in bytes. SHA-256 and BLAKE3 both produce 32 bytes,
/// rendered as 64 lowercase hex characters.
pub const HASH_OUTPUT_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// Canonical Encoding
// ---------------------------------------------------------------------------

/// Text substituted for a missing predecessor hash when building a block
/// pre-image. Genesis blocks hash as if their previous hash were this string.
pub const GENESIS_PREVIOUS_HASH_TEXT: &str = "null";

/// Value written into the genesis block's previous hash by
/// [`break_chain`](crate::chain::break_chain). Anything non-`None` fails the
/// genesis check; this one is just easy to spot in a dump.
pub const CORRUPTION_SENTINEL: &str = "hello world";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_not_the_genesis_text() {
        // The corrupted chain must not accidentally hash like a real genesis.
        assert_ne!(CORRUPTION_SENTINEL, GENESIS_PREVIOUS_HASH_TEXT);
        assert!(!CORRUPTION_SENTINEL.is_empty());
    }
}
