// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # blockcheck - Chain Validation Core
//!
//! Pure, stateless predicates that decide whether a signed transaction, a
//! block, or a whole hash-linked chain is valid. Nothing in here mines,
//! gossips, or persists anything. You hand us values, we hand you a verdict.
//!
//! ## Architecture
//!
//! Validation is layered strictly bottom-up:
//!
//! ```text
//! chain::validation::check_chain
//!   └── chain::validation::check_block ──── crypto::Hasher
//!         └── transaction::check_transaction
//!               └── crypto::SignatureVerifier
//! ```
//!
//! - **crypto**: Hashing and Ed25519 signature verification behind small traits.
//! - **transaction**: The transaction record, its canonical message, signing, and verification.
//! - **chain**: Blocks, the chain container, block/chain validation, and the
//!   deliberately destructive [`chain::break_chain`].
//! - **validator**: A bundle of hasher + verifier for callers that don't want
//!   to thread both through every call.
//! - **config**: Encoding constants and sentinels.
//!
//! Every `is_valid_*` predicate has a `check_*` twin that returns the first
//! failing rule. The predicate is literally `check_*(..).is_ok()`, so the two
//! can never disagree.

pub mod chain;
pub mod config;
pub mod crypto;
pub mod transaction;
pub mod validator;

pub use chain::{
    break_chain, check_block, check_chain, is_valid_block, is_valid_chain, Block, BlockError,
    Blockchain, ChainError,
};
pub use crypto::{Blake3Hasher, Ed25519Verifier, Hasher, Keypair, Sha256Hasher, SignatureVerifier};
pub use transaction::{check_transaction, is_valid_transaction, Transaction, TransactionError};
pub use validator::Validator;
