//! # Transaction Module
//!
//! The signed transfer record and the rules that make one valid.
//!
//! ## Architecture
//!
//! ```text
//! types.rs        - Transaction and its canonical message
//! signing.rs      - Producing signatures with an Ed25519 keypair
//! verification.rs - Amount and signature checks
//! ```
//!
//! ## Canonical message
//!
//! `source ++ recipient ++ decimal(amount)`, no separators. The string form
//! of the amount is Rust's `Display` for `i64`. Both sides of the contract
//! must build it with [`Transaction::message`]; a single stray byte makes
//! every signature fail.

pub mod signing;
pub mod types;
pub mod verification;

pub use signing::sign_transaction;
pub use types::{canonical_message, Transaction};
pub use verification::{check_transaction, is_valid_transaction, TransactionError};
