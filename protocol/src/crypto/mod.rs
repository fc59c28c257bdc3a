//! # Cryptographic Collaborators
//!
//! The validators treat hashing and signature verification as black boxes.
//! This module defines those boxes as traits and ships the implementations
//! we actually deploy:
//!
//! - **SHA-256** ([`Sha256Hasher`]) for block hashes, with BLAKE3
//!   ([`Blake3Hasher`]) as an alternative.
//! - **Ed25519** ([`Ed25519Verifier`]) for transaction signatures, keyed by
//!   a hex-encoded public key identity.
//!
//! Nothing here is hand-rolled. Everything is a thin wrapper over `sha2`,
//! `blake3`, and `ed25519-dalek`.

pub mod hash;
pub mod keys;
pub mod signatures;

pub use hash::{Blake3Hasher, Hasher, Sha256Hasher};
pub use keys::{KeyError, Keypair};
pub use signatures::{Ed25519Verifier, SignatureVerifier};
