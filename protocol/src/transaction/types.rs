//! The transaction record and its canonical signing message.

use serde::{Deserialize, Serialize};

/// A signed value transfer from `source` to `recipient`.
///
/// `source` and `recipient` are hex-encoded Ed25519 public keys. `signature`
/// is the hex Ed25519 signature by `source` over [`Transaction::message`].
/// Any field change after signing invalidates the signature.
///
/// The amount is signed so that a negative transfer is representable, and
/// therefore rejectable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    pub source: String,
    pub recipient: String,
    pub amount: i64,
    pub signature: String,
}

impl Transaction {
    /// Canonical message bytes: `source ++ recipient ++ amount`.
    ///
    /// No delimiters, no length prefixes. The amount is decimal ASCII with
    /// an optional leading `-` and no leading zeros (Rust's `Display` for
    /// `i64`). Signers and verifiers must both go through this function.
    pub fn message(&self) -> Vec<u8> {
        canonical_message(&self.source, &self.recipient, self.amount)
    }

    /// `true` for a non-negative amount. Cheap, checked before any crypto.
    pub fn has_valid_amount(&self) -> bool {
        self.amount >= 0
    }
}

/// Build the canonical message for the given fields without a `Transaction`.
pub fn canonical_message(source: &str, recipient: &str, amount: i64) -> Vec<u8> {
    format!("{source}{recipient}{amount}").into_bytes()
}
