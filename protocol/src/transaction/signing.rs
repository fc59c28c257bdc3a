//! Transaction signing with Ed25519 keypairs.
//!
//! Signing is the producer side of the contract and lives outside the
//! validators. It is here so that every signature in the system is made over
//! the same [`Transaction::message`] bytes the verifier later checks.

use super::types::Transaction;
use crate::crypto::keys::Keypair;

impl Transaction {
    /// Build a transaction from `keypair`'s identity to `recipient` and sign it.
    pub fn signed(keypair: &Keypair, recipient: impl Into<String>, amount: i64) -> Self {
        let mut tx = Transaction {
            source: keypair.identity(),
            recipient: recipient.into(),
            amount,
            signature: String::new(),
        };
        sign_transaction(&mut tx, keypair);
        tx
    }
}

/// Signs a transaction in place, overwriting `tx.signature`.
///
/// The caller is responsible for `keypair` matching `tx.source`. Signing
/// with a different key produces a transaction that fails verification,
/// which is occasionally exactly what a test wants.
pub fn sign_transaction<'a>(tx: &'a mut Transaction, keypair: &Keypair) -> &'a Transaction {
    tx.signature = keypair.sign_hex(&tx.message());
    tx
}
