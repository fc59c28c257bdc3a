//! Transaction verification.
//!
//! Two rules, cheapest first: the amount must be non-negative, then the
//! source must have signed the canonical message. A negative amount never
//! reaches the signature verifier.

use thiserror::Error;
use tracing::debug;

use super::types::Transaction;
use crate::crypto::SignatureVerifier;

/// The first rule a transaction broke.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransactionError {
    /// The amount is below zero.
    #[error("negative amount: {amount}")]
    NegativeAmount { amount: i64 },

    /// The signature does not verify against the source identity and the
    /// canonical message.
    #[error("invalid signature: does not verify against source {signer}")]
    InvalidSignature { signer: String },
}

/// Checks one transaction, returning the first failing rule.
///
/// # Errors
///
/// - [`TransactionError::NegativeAmount`] if `tx.amount < 0`, regardless of
///   the signature.
/// - [`TransactionError::InvalidSignature`] if `verifier` rejects
///   `(tx.source, tx.message(), tx.signature)`.
pub fn check_transaction<V: SignatureVerifier>(
    tx: &Transaction,
    verifier: &V,
) -> Result<(), TransactionError> {
    if !tx.has_valid_amount() {
        debug!(amount = tx.amount, "transaction rejected: negative amount");
        return Err(TransactionError::NegativeAmount { amount: tx.amount });
    }

    if !verifier.verify(&tx.source, &tx.message(), &tx.signature) {
        debug!(source = %tx.source, "transaction rejected: bad signature");
        return Err(TransactionError::InvalidSignature {
            signer: tx.source.clone(),
        });
    }

    Ok(())
}

/// `true` iff the transaction is non-negative and authentically signed.
pub fn is_valid_transaction<V: SignatureVerifier>(tx: &Transaction, verifier: &V) -> bool {
    check_transaction(tx, verifier).is_ok()
}
