//! # Key Handling
//!
//! Ed25519 keypairs for the producing side of a chain: whoever creates and
//! signs transactions. Validation never needs a private key; it only needs
//! the hex identity that a [`Keypair`] hands out.
//!
//! Private keys are never printed. `Debug` shows the public half only.

use ed25519_dalek::{Signer, SigningKey, VerifyingKey, SECRET_KEY_LENGTH};
use rand::rngs::OsRng;
use std::fmt;
use thiserror::Error;

use crate::config::{IDENTITY_LENGTH, SIGNATURE_LENGTH};

/// Errors from parsing key or signature material.
///
/// Deliberately vague about which byte was wrong.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("invalid secret key: expected 32 hex-encoded bytes")]
    InvalidSecretKey,

    #[error("invalid identity: not a hex-encoded Ed25519 public key")]
    InvalidIdentity,

    #[error("invalid signature: expected 64 hex-encoded bytes")]
    InvalidSignature,
}

/// An Ed25519 signing keypair.
///
/// Does not implement `Serialize`. Exporting a secret should be a
/// deliberate call to [`Keypair::secret_key_hex`], not a side effect of
/// dumping a struct to JSON.
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a fresh keypair from the OS RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Deterministic keypair from a 32-byte seed. Handy for fixtures.
    pub fn from_seed(seed: &[u8; SECRET_KEY_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Parse a hex-encoded 32-byte secret key.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_str).map_err(|_| KeyError::InvalidSecretKey)?;
        let seed: [u8; SECRET_KEY_LENGTH] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| KeyError::InvalidSecretKey)?;
        Ok(Self::from_seed(&seed))
    }

    /// The public identity: hex of the 32-byte verifying key.
    ///
    /// This is the string that goes into `Transaction::source` and
    /// `Transaction::recipient`.
    pub fn identity(&self) -> String {
        hex::encode(self.signing_key.verifying_key().to_bytes())
    }

    /// Sign `message` and return the hex-encoded signature.
    pub fn sign_hex(&self, message: &[u8]) -> String {
        hex::encode(self.signing_key.sign(message).to_bytes())
    }

    /// Hex-encoded secret key. Handle with care.
    pub fn secret_key_hex(&self) -> String {
        hex::encode(self.signing_key.to_bytes())
    }
}

impl Clone for Keypair {
    fn clone(&self) -> Self {
        Self::from_seed(&self.signing_key.to_bytes())
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair(identity={})", self.identity())
    }
}

/// Decode a hex identity into an ed25519-dalek verifying key.
///
/// Rejects wrong lengths and byte strings that are not valid curve points.
pub fn parse_identity(identity: &str) -> Result<VerifyingKey, KeyError> {
    let bytes = hex::decode(identity).map_err(|_| KeyError::InvalidIdentity)?;
    let arr: [u8; IDENTITY_LENGTH] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| KeyError::InvalidIdentity)?;
    VerifyingKey::from_bytes(&arr).map_err(|_| KeyError::InvalidIdentity)
}

/// Decode a hex signature into an ed25519-dalek signature.
pub fn parse_signature(signature: &str) -> Result<ed25519_dalek::Signature, KeyError> {
    let bytes = hex::decode(signature).map_err(|_| KeyError::InvalidSignature)?;
    let arr: [u8; SIGNATURE_LENGTH] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| KeyError::InvalidSignature)?;
    Ok(ed25519_dalek::Signature::from_bytes(&arr))
}
