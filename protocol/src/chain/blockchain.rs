//! The chain container: blocks ordered from genesis to tip.

use serde::{Deserialize, Serialize};

use super::block::Block;
use crate::crypto::Hasher;
use crate::transaction::Transaction;

/// Ordered blocks, genesis at index 0.
///
/// The container enforces nothing. A `Blockchain` may be empty, mislinked,
/// or full of forged transactions; that is what
/// [`check_chain`](super::check_chain) is for.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blockchain {
    pub blocks: Vec<Block>,
}

impl Blockchain {
    /// A chain holding only `genesis`.
    pub fn new(genesis: Block) -> Self {
        Self {
            blocks: vec![genesis],
        }
    }

    /// Append a block as-is, without checking linkage.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Build, hash, and append a block linked to the current tip.
    ///
    /// On an empty chain the new block becomes genesis.
    pub fn append<H: Hasher>(
        &mut self,
        nonce: u64,
        transactions: Vec<Transaction>,
        hasher: &H,
    ) -> &Block {
        let block = match self.tip() {
            Some(parent) => Block::next(parent, nonce, transactions, hasher),
            None => Block::genesis(nonce, transactions, hasher),
        };
        self.blocks.push(block);
        &self.blocks[self.blocks.len() - 1]
    }

    /// The first block, if any.
    pub fn genesis(&self) -> Option<&Block> {
        self.blocks.first()
    }

    /// The latest block, if any.
    pub fn tip(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Every transaction in the chain, block order then in-block order.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> + '_ {
        self.blocks.iter().flat_map(|b| b.transactions.iter())
    }

    /// Parse a chain from its JSON document form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Render the chain as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
