//! Deliberate chain corruption.
//!
//! [`break_chain`] exists to prove that validation notices tampering. It is
//! never part of a normal validation flow.
//!
//! It takes `&mut Blockchain`, so the borrow checker already guarantees no
//! other reference observes the chain mid-write. Callers sharing a chain
//! across threads must hold an exclusive lock around the call.

use tracing::warn;

use super::blockchain::Blockchain;
use crate::config::CORRUPTION_SENTINEL;

/// Give the genesis block a predecessor so the chain fails its genesis check.
///
/// Writes [`CORRUPTION_SENTINEL`] into `blocks[0].previous_hash` and nothing
/// else. An empty chain has no genesis to corrupt; the call logs a warning
/// and leaves it untouched.
pub fn break_chain(chain: &mut Blockchain) {
    let Some(genesis) = chain.blocks.first_mut() else {
        warn!("break_chain called on an empty chain; nothing to corrupt");
        return;
    };
    warn!(
        genesis = %genesis.hash,
        sentinel = CORRUPTION_SENTINEL,
        "corrupting genesis link"
    );
    genesis.previous_hash = Some(CORRUPTION_SENTINEL.to_string());
}
