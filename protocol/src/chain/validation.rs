//! Block and chain validation.
//!
//! Every check here is a pure function of its input plus the hasher and
//! verifier handed in. Nothing is cached between calls, so validating the
//! same value twice gives the same answer, and any number of threads may
//! validate one shared chain at once.

use thiserror::Error;
use tracing::debug;

use super::block::Block;
use super::blockchain::Blockchain;
use crate::crypto::{Hasher, SignatureVerifier};
use crate::transaction::{check_transaction, TransactionError};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// The first rule a block broke.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlockError {
    /// The stored hash differs from the digest of the block's pre-image.
    #[error("block hash mismatch: stored={stored}, computed={computed}")]
    HashMismatch { stored: String, computed: String },

    /// A transaction inside the block failed verification.
    #[error("transaction {index} is invalid: {source}")]
    InvalidTransaction {
        index: usize,
        source: TransactionError,
    },
}

/// The first rule a chain broke, in check order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChainError {
    /// There is no genesis block to anchor the chain.
    #[error("chain has no blocks")]
    Empty,

    /// The first block names a predecessor.
    #[error("genesis block has a previous hash: {found:?}")]
    GenesisHasPredecessor { found: String },

    /// A block's previous hash is not its parent's hash.
    #[error("block {index} does not link to its parent: expected {expected}, found {found:?}")]
    BrokenLink {
        index: usize,
        expected: String,
        found: Option<String>,
    },

    /// A block failed [`check_block`].
    #[error("block {index} is invalid: {source}")]
    InvalidBlock { index: usize, source: BlockError },

    /// A transaction failed in the whole-chain pass. `index` counts across
    /// the flattened transaction sequence, not within a block.
    #[error("transaction {index} in chain is invalid: {source}")]
    InvalidTransaction {
        index: usize,
        source: TransactionError,
    },
}

// ---------------------------------------------------------------------------
// Block validation
// ---------------------------------------------------------------------------

/// Checks one block: tamper check first, then every transaction.
///
/// # Errors
///
/// - [`BlockError::HashMismatch`] if `block.hash` is not the digest of
///   [`Block::preimage`]. Comparison is exact and case-sensitive.
/// - [`BlockError::InvalidTransaction`] for the first transaction that fails
///   [`check_transaction`]. Only reached when the hash matches.
pub fn check_block<H: Hasher, V: SignatureVerifier>(
    block: &Block,
    hasher: &H,
    verifier: &V,
) -> Result<(), BlockError> {
    let computed = block.compute_hash(hasher);
    if computed != block.hash {
        debug!(stored = %block.hash, %computed, "block rejected: hash mismatch");
        return Err(BlockError::HashMismatch {
            stored: block.hash.clone(),
            computed,
        });
    }

    for (index, tx) in block.transactions.iter().enumerate() {
        check_transaction(tx, verifier)
            .map_err(|source| BlockError::InvalidTransaction { index, source })?;
    }

    Ok(())
}

/// `true` iff the block hash matches its contents and every transaction is valid.
pub fn is_valid_block<H: Hasher, V: SignatureVerifier>(
    block: &Block,
    hasher: &H,
    verifier: &V,
) -> bool {
    check_block(block, hasher, verifier).is_ok()
}

// ---------------------------------------------------------------------------
// Chain validation
// ---------------------------------------------------------------------------

/// Checks a whole chain. Four passes, in order, stopping at the first failure:
///
/// 1. **Genesis**: the first block has no previous hash.
/// 2. **Linkage**: every later block's previous hash equals its parent's hash.
/// 3. **Blocks**: every block, genesis included, passes [`check_block`].
/// 4. **Transactions**: every transaction across the chain, flattened in
///    block order, passes [`check_transaction`].
///
/// Pass 4 overlaps pass 3. Both always run, so every transaction is
/// verified twice on a valid chain.
///
/// An empty chain fails closed with [`ChainError::Empty`].
pub fn check_chain<H: Hasher, V: SignatureVerifier>(
    chain: &Blockchain,
    hasher: &H,
    verifier: &V,
) -> Result<(), ChainError> {
    let Some(genesis) = chain.genesis() else {
        debug!("chain rejected: empty");
        return Err(ChainError::Empty);
    };

    if let Some(found) = &genesis.previous_hash {
        debug!(%found, "chain rejected: genesis has a predecessor");
        return Err(ChainError::GenesisHasPredecessor {
            found: found.clone(),
        });
    }

    for (offset, pair) in chain.blocks.windows(2).enumerate() {
        let (parent, child) = (&pair[0], &pair[1]);
        if child.previous_hash.as_deref() != Some(parent.hash.as_str()) {
            let index = offset + 1;
            debug!(index, "chain rejected: broken link");
            return Err(ChainError::BrokenLink {
                index,
                expected: parent.hash.clone(),
                found: child.previous_hash.clone(),
            });
        }
    }

    for (index, block) in chain.blocks.iter().enumerate() {
        check_block(block, hasher, verifier)
            .map_err(|source| ChainError::InvalidBlock { index, source })?;
    }

    for (index, tx) in chain.transactions().enumerate() {
        check_transaction(tx, verifier)
            .map_err(|source| ChainError::InvalidTransaction { index, source })?;
    }

    debug!(blocks = chain.len(), "chain accepted");
    Ok(())
}

/// `true` iff the chain is rooted at genesis, correctly linked, and every
/// block and transaction in it is valid.
pub fn is_valid_chain<H: Hasher, V: SignatureVerifier>(
    chain: &Blockchain,
    hasher: &H,
    verifier: &V,
) -> bool {
    check_chain(chain, hasher, verifier).is_ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::Keypair;
    use crate::crypto::{Blake3Hasher, Ed25519Verifier, Sha256Hasher};
    use crate::transaction::Transaction;
    use std::cell::Cell;

    struct CountingVerifier {
        calls: Cell<usize>,
    }

    impl SignatureVerifier for CountingVerifier {
        fn verify(&self, identity: &str, message: &[u8], signature: &str) -> bool {
            self.calls.set(self.calls.get() + 1);
            Ed25519Verifier.verify(identity, message, signature)
        }
    }

    fn signed_tx(amount: i64) -> Transaction {
        let kp = Keypair::generate();
        Transaction::signed(&kp, Keypair::generate().identity(), amount)
    }

    fn valid_chain(len: usize) -> Blockchain {
        let mut chain = Blockchain::default();
        for nonce in 0..len as u64 {
            chain.append(nonce, vec![signed_tx(10 + nonce as i64)], &Sha256Hasher);
        }
        chain
    }

    // --- blocks ---

    #[test]
    fn valid_block_passes() {
        let block = Block::genesis(0, vec![signed_tx(1), signed_tx(2)], &Sha256Hasher);
        assert!(check_block(&block, &Sha256Hasher, &Ed25519Verifier).is_ok());
    }

    #[test]
    fn empty_block_passes_content_check() {
        let block = Block::genesis(0, vec![], &Sha256Hasher);
        assert!(is_valid_block(&block, &Sha256Hasher, &Ed25519Verifier));
    }

    #[test]
    fn tampered_nonce_fails_hash_check() {
        let mut block = Block::genesis(0, vec![signed_tx(1)], &Sha256Hasher);
        block.nonce += 1;
        match check_block(&block, &Sha256Hasher, &Ed25519Verifier) {
            Err(BlockError::HashMismatch { .. }) => {}
            other => panic!("expected HashMismatch, got {:?}", other),
        }
    }

    #[test]
    fn tampered_previous_hash_fails_hash_check() {
        let genesis = Block::genesis(0, vec![], &Sha256Hasher);
        let mut block = Block::next(&genesis, 1, vec![signed_tx(1)], &Sha256Hasher);
        block.previous_hash = Some("00".repeat(32));
        assert!(!is_valid_block(&block, &Sha256Hasher, &Ed25519Verifier));
    }

    #[test]
    fn tampered_amount_fails_transaction_check() {
        let mut block = Block::genesis(0, vec![signed_tx(1), signed_tx(2)], &Sha256Hasher);
        block.transactions[1].amount = 2_000;
        match check_block(&block, &Sha256Hasher, &Ed25519Verifier) {
            Err(BlockError::InvalidTransaction {
                index: 1,
                source: TransactionError::InvalidSignature { .. },
            }) => {}
            other => panic!("expected InvalidTransaction at 1, got {:?}", other),
        }
    }

    #[test]
    fn uppercase_hash_is_a_mismatch() {
        let mut block = Block::genesis(0, vec![], &Sha256Hasher);
        block.hash = block.hash.to_uppercase();
        assert!(!is_valid_block(&block, &Sha256Hasher, &Ed25519Verifier));
    }

    #[test]
    fn hash_mismatch_skips_transaction_checks() {
        let mut block = Block::genesis(0, vec![signed_tx(1)], &Sha256Hasher);
        block.hash = "ff".repeat(32);
        let verifier = CountingVerifier {
            calls: Cell::new(0),
        };
        assert!(!is_valid_block(&block, &Sha256Hasher, &verifier));
        assert_eq!(verifier.calls.get(), 0);
    }

    #[test]
    fn block_verdict_is_stable() {
        let good = Block::genesis(0, vec![signed_tx(1)], &Sha256Hasher);
        let mut bad = good.clone();
        bad.transactions[0].amount = -1;
        bad.rehash(&Sha256Hasher);

        for _ in 0..3 {
            assert!(is_valid_block(&good, &Sha256Hasher, &Ed25519Verifier));
            assert!(!is_valid_block(&bad, &Sha256Hasher, &Ed25519Verifier));
        }
    }

    #[test]
    fn wrong_hasher_rejects_block() {
        let block = Block::genesis(0, vec![signed_tx(1)], &Sha256Hasher);
        assert!(!is_valid_block(&block, &Blake3Hasher, &Ed25519Verifier));
    }

    // --- chains ---

    #[test]
    fn chain_of_one_is_valid() {
        let chain = valid_chain(1);
        assert!(check_chain(&chain, &Sha256Hasher, &Ed25519Verifier).is_ok());
    }

    #[test]
    fn chain_of_three_is_valid() {
        let chain = valid_chain(3);
        assert!(is_valid_chain(&chain, &Sha256Hasher, &Ed25519Verifier));
    }

    #[test]
    fn empty_chain_fails_closed() {
        assert_eq!(
            check_chain(&Blockchain::default(), &Sha256Hasher, &Ed25519Verifier),
            Err(ChainError::Empty)
        );
    }

    #[test]
    fn empty_string_predecessor_is_not_genesis() {
        let mut chain = valid_chain(1);
        chain.blocks[0].previous_hash = Some(String::new());
        chain.blocks[0].rehash(&Sha256Hasher);
        match check_chain(&chain, &Sha256Hasher, &Ed25519Verifier) {
            Err(ChainError::GenesisHasPredecessor { found }) => assert!(found.is_empty()),
            other => panic!("expected GenesisHasPredecessor, got {:?}", other),
        }
    }

    #[test]
    fn broken_link_is_reported_at_its_index() {
        let mut chain = valid_chain(3);
        // Rehash so the block itself stays internally consistent.
        chain.blocks[2].previous_hash = Some("ab".repeat(32));
        chain.blocks[2].rehash(&Sha256Hasher);
        assert!(is_valid_block(&chain.blocks[2], &Sha256Hasher, &Ed25519Verifier));

        match check_chain(&chain, &Sha256Hasher, &Ed25519Verifier) {
            Err(ChainError::BrokenLink { index: 2, .. }) => {}
            other => panic!("expected BrokenLink at 2, got {:?}", other),
        }
    }

    #[test]
    fn later_block_without_predecessor_breaks_link() {
        let mut chain = valid_chain(2);
        chain.blocks[1].previous_hash = None;
        chain.blocks[1].rehash(&Sha256Hasher);
        match check_chain(&chain, &Sha256Hasher, &Ed25519Verifier) {
            Err(ChainError::BrokenLink {
                index: 1,
                found: None,
                ..
            }) => {}
            other => panic!("expected BrokenLink with no predecessor, got {:?}", other),
        }
    }

    #[test]
    fn tampered_genesis_fails_block_pass() {
        // The stored genesis hash is untouched, so linkage still holds and
        // the failure surfaces in the block pass.
        let mut chain = valid_chain(2);
        chain.blocks[0].nonce = 99;
        match check_chain(&chain, &Sha256Hasher, &Ed25519Verifier) {
            Err(ChainError::InvalidBlock {
                index: 0,
                source: BlockError::HashMismatch { .. },
            }) => {}
            other => panic!("expected InvalidBlock at 0, got {:?}", other),
        }
    }

    #[test]
    fn negative_amount_invalidates_chain() {
        let mut chain = valid_chain(3);
        chain.blocks[1].transactions[0].amount = -1;
        match check_chain(&chain, &Sha256Hasher, &Ed25519Verifier) {
            Err(ChainError::InvalidBlock {
                index: 1,
                source:
                    BlockError::InvalidTransaction {
                        index: 0,
                        source: TransactionError::NegativeAmount { amount: -1 },
                    },
            }) => {}
            other => panic!("expected negative amount in block 1, got {:?}", other),
        }
    }

    #[test]
    fn transaction_pass_runs_after_block_pass() {
        // Each transaction is verified once by the block pass and once more
        // by the whole-chain pass.
        let chain = valid_chain(3);
        let verifier = CountingVerifier {
            calls: Cell::new(0),
        };
        assert!(is_valid_chain(&chain, &Sha256Hasher, &verifier));
        assert_eq!(verifier.calls.get(), 2 * chain.transactions().count());
    }

    #[test]
    fn linkage_failure_skips_block_pass() {
        let mut chain = valid_chain(3);
        chain.blocks[1].previous_hash = Some("cd".repeat(32));
        let verifier = CountingVerifier {
            calls: Cell::new(0),
        };
        assert!(!is_valid_chain(&chain, &Sha256Hasher, &verifier));
        assert_eq!(verifier.calls.get(), 0);
    }

    #[test]
    fn chain_verdict_is_stable() {
        let chain = valid_chain(3);
        let first = check_chain(&chain, &Sha256Hasher, &Ed25519Verifier);
        for _ in 0..3 {
            assert_eq!(check_chain(&chain, &Sha256Hasher, &Ed25519Verifier), first);
        }
    }

    #[test]
    fn error_messages_name_the_rule() {
        let err = ChainError::BrokenLink {
            index: 4,
            expected: "aa".to_string(),
            found: None,
        };
        assert_eq!(
            err.to_string(),
            "block 4 does not link to its parent: expected aa, found None"
        );
        assert_eq!(ChainError::Empty.to_string(), "chain has no blocks");
    }
}
