//! # Chain Module
//!
//! Blocks, the chain that holds them, and the rules that decide whether
//! either is valid.
//!
//! ## Architecture
//!
//! ```text
//! block.rs      - Block, its canonical pre-image, hash computation
//! blockchain.rs - Ordered block container, JSON form
//! validation.rs - check_block / check_chain and their boolean twins
//! corrupt.rs    - break_chain, for proving that validation catches tampering
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! Blockchain ─▶ genesis ─▶ linkage ─▶ every block ─▶ every transaction
//!                                         │
//!                                   hash ─┴─ transactions
//! ```

pub mod block;
pub mod blockchain;
pub mod corrupt;
pub mod validation;

pub use block::Block;
pub use blockchain::Blockchain;
pub use corrupt::break_chain;
pub use validation::{
    check_block, check_chain, is_valid_block, is_valid_chain, BlockError, ChainError,
};
