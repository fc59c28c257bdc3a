//! A hasher and a signature verifier, bundled.
//!
//! The free functions in [`crate::chain`] and [`crate::transaction`] take
//! both collaborators on every call. [`Validator`] holds them once so call
//! sites read `validator.is_valid_chain(&chain)`.

use crate::chain::{self, Block, BlockError, Blockchain, ChainError};
use crate::crypto::{Ed25519Verifier, Hasher, Sha256Hasher, SignatureVerifier};
use crate::transaction::{self, Transaction, TransactionError};

/// Validation entry point with fixed collaborators.
///
/// Holds no mutable state, so one instance can be shared freely across
/// threads.
///
/// # Example
///
/// ```
/// use blockcheck::{Blockchain, Keypair, Sha256Hasher, Transaction, Validator};
///
/// let alice = Keypair::generate();
/// let mut chain = Blockchain::default();
/// chain.append(0, vec![Transaction::signed(&alice, "bob", 10)], &Sha256Hasher);
///
/// let validator = Validator::standard();
/// assert!(validator.is_valid_chain(&chain));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator<H = Sha256Hasher, V = Ed25519Verifier> {
    hasher: H,
    verifier: V,
}

impl Validator {
    /// SHA-256 block hashes, Ed25519 signatures.
    pub fn standard() -> Self {
        Self::new(Sha256Hasher, Ed25519Verifier)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::standard()
    }
}

impl<H: Hasher, V: SignatureVerifier> Validator<H, V> {
    pub fn new(hasher: H, verifier: V) -> Self {
        Self { hasher, verifier }
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    pub fn check_transaction(&self, tx: &Transaction) -> Result<(), TransactionError> {
        transaction::check_transaction(tx, &self.verifier)
    }

    pub fn is_valid_transaction(&self, tx: &Transaction) -> bool {
        transaction::is_valid_transaction(tx, &self.verifier)
    }

    pub fn check_block(&self, block: &Block) -> Result<(), BlockError> {
        chain::check_block(block, &self.hasher, &self.verifier)
    }

    pub fn is_valid_block(&self, block: &Block) -> bool {
        chain::is_valid_block(block, &self.hasher, &self.verifier)
    }

    pub fn check_chain(&self, chain: &Blockchain) -> Result<(), ChainError> {
        chain::check_chain(chain, &self.hasher, &self.verifier)
    }

    pub fn is_valid_chain(&self, chain: &Blockchain) -> bool {
        chain::is_valid_chain(chain, &self.hasher, &self.verifier)
    }
}
