//! # Block Structure
//!
//! A block is an ordered list of signed transactions plus the digest that
//! links it to its predecessor.
//!
//! ## Block Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  hash: String          (hex digest)         │
//! │  previousHash: Option<String>  (None = gen.)│
//! │  nonce: u64                                 │
//! ├─────────────────────────────────────────────┤
//! │  transactions: Vec<Transaction>             │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Hash Computation
//!
//! The stored hash is the digest of the pre-image
//!
//! ```text
//! signature_0 ++ signature_1 ++ ... ++ previous_hash ++ nonce
//! ```
//!
//! with no separators. A missing previous hash is written as the literal
//! `null`; the nonce is decimal ASCII. Only signatures are covered, not the
//! other transaction fields. Those are already bound to their signature, so
//! tampering with an amount shows up as a bad transaction rather than a bad
//! block hash.

use serde::{Deserialize, Serialize};

use crate::config::GENESIS_PREVIOUS_HASH_TEXT;
use crate::crypto::Hasher;
use crate::transaction::Transaction;

/// A block of transactions linked to its predecessor by digest.
///
/// `previous_hash` is `None` only for the genesis block. Linkage is by value:
/// a block holds a copy of its parent's hash, never a reference to the parent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Hex digest of [`Block::preimage`].
    pub hash: String,
    /// Hash of the preceding block, or `None` for genesis.
    ///
    /// The key is required in JSON. Only an explicit `null` reads as `None`.
    #[serde(deserialize_with = "Option::deserialize")]
    pub previous_hash: Option<String>,
    pub nonce: u64,
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Build a block and compute its hash with `hasher`.
    pub fn new<H: Hasher>(
        previous_hash: Option<String>,
        nonce: u64,
        transactions: Vec<Transaction>,
        hasher: &H,
    ) -> Self {
        let mut block = Block {
            hash: String::new(),
            previous_hash,
            nonce,
            transactions,
        };
        block.rehash(hasher);
        block
    }

    /// Build a genesis block (no predecessor).
    pub fn genesis<H: Hasher>(nonce: u64, transactions: Vec<Transaction>, hasher: &H) -> Self {
        Self::new(None, nonce, transactions, hasher)
    }

    /// Build a block that extends `parent`.
    pub fn next<H: Hasher>(
        parent: &Block,
        nonce: u64,
        transactions: Vec<Transaction>,
        hasher: &H,
    ) -> Self {
        Self::new(Some(parent.hash.clone()), nonce, transactions, hasher)
    }

    /// The canonical bytes the block hash is computed over.
    pub fn preimage(&self) -> Vec<u8> {
        let previous = self
            .previous_hash
            .as_deref()
            .unwrap_or(GENESIS_PREVIOUS_HASH_TEXT);

        let mut preimage = String::with_capacity(
            self.transactions.iter().map(|tx| tx.signature.len()).sum::<usize>()
                + previous.len()
                + 20,
        );
        for tx in &self.transactions {
            preimage.push_str(&tx.signature);
        }
        preimage.push_str(previous);
        preimage.push_str(&self.nonce.to_string());
        preimage.into_bytes()
    }

    /// Recompute the hash from the current contents. Does not touch `self.hash`.
    pub fn compute_hash<H: Hasher>(&self, hasher: &H) -> String {
        hasher.digest_hex(&self.preimage())
    }

    /// Overwrite the stored hash with a fresh computation.
    ///
    /// Used when producing blocks. A validator never calls this.
    pub fn rehash<H: Hasher>(&mut self, hasher: &H) {
        self.hash = self.compute_hash(hasher);
    }

    /// `true` if the block claims to have no predecessor.
    pub fn is_genesis(&self) -> bool {
        self.previous_hash.is_none()
    }
}
