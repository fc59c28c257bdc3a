//! Subcommand implementations.
//!
//! Everything here returns a [`Verdict`] rather than printing, so the
//! commands are testable without capturing stdout. `main` does the printing
//! and picks the exit code.

use anyhow::{bail, Context, Result};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

use blockcheck::chain::{break_chain, Blockchain};
use blockcheck::crypto::{Ed25519Verifier, Hasher, Keypair};
use blockcheck::transaction::Transaction;
use blockcheck::Validator;

use crate::cli::HashAlgorithm;

/// Outcome of a validation command. An invalid chain is a normal result,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(String),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    fn from_result<E: fmt::Display>(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Verdict::Valid,
            Err(e) => Verdict::Invalid(e.to_string()),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Valid => write!(f, "valid"),
            Verdict::Invalid(reason) => write!(f, "invalid: {reason}"),
        }
    }
}

/// Verdicts from the demo scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub untouched: Verdict,
    pub negative_amount: Verdict,
    pub corrupted: Verdict,
}

impl DemoReport {
    /// `true` when validation accepted the honest chain and rejected both
    /// tampered copies.
    pub fn as_expected(&self) -> bool {
        self.untouched.is_valid() && !self.negative_amount.is_valid() && !self.corrupted.is_valid()
    }
}

/// Read a chain from a JSON document.
pub fn load_chain(path: &Path) -> Result<Blockchain> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read chain file: {}", path.display()))?;
    let chain = Blockchain::from_json(&raw)
        .with_context(|| format!("failed to parse chain JSON: {}", path.display()))?;
    info!(path = %path.display(), blocks = chain.len(), "chain loaded");
    Ok(chain)
}

/// Write a chain as pretty-printed JSON.
pub fn write_chain(path: &Path, chain: &Blockchain) -> Result<()> {
    let json = chain.to_json_pretty().context("failed to serialize chain")?;
    fs::write(path, json)
        .with_context(|| format!("failed to write chain file: {}", path.display()))?;
    info!(path = %path.display(), blocks = chain.len(), "chain written");
    Ok(())
}

fn validator(hash: HashAlgorithm) -> Validator<HashAlgorithm, Ed25519Verifier> {
    Validator::new(hash, Ed25519Verifier)
}

/// `blockcheck validate`
pub fn validate(path: &Path, hash: HashAlgorithm) -> Result<Verdict> {
    let chain = load_chain(path)?;
    let verdict = Verdict::from_result(validator(hash).check_chain(&chain));
    info!(path = %path.display(), valid = verdict.is_valid(), "chain validated");
    Ok(verdict)
}

/// `blockcheck block`
pub fn validate_block(path: &Path, index: usize, hash: HashAlgorithm) -> Result<Verdict> {
    let chain = load_chain(path)?;
    let Some(block) = chain.blocks.get(index) else {
        bail!(
            "block index {} out of range: chain has {} block(s)",
            index,
            chain.len()
        );
    };
    let verdict = Verdict::from_result(validator(hash).check_block(block));
    info!(index, valid = verdict.is_valid(), "block validated");
    Ok(verdict)
}

/// `blockcheck corrupt`
pub fn corrupt(input: &Path, output: &Path) -> Result<()> {
    let mut chain = load_chain(input)?;
    if chain.is_empty() {
        bail!("chain in {} is empty; nothing to corrupt", input.display());
    }
    break_chain(&mut chain);
    write_chain(output, &chain)
}

/// Build the three-block demo chain with fresh keys.
pub fn demo_chain<H: Hasher>(hasher: &H) -> Blockchain {
    let alice = Keypair::generate();
    let bob = Keypair::generate();
    let carol = Keypair::generate();

    let mut chain = Blockchain::default();
    chain.append(
        0,
        vec![Transaction::signed(&alice, bob.identity(), 50)],
        hasher,
    );
    chain.append(
        1,
        vec![Transaction::signed(&bob, carol.identity(), 20)],
        hasher,
    );
    chain.append(
        2,
        vec![Transaction::signed(&carol, alice.identity(), 5)],
        hasher,
    );
    chain
}

/// `blockcheck demo`
pub fn demo(out: Option<&Path>, hash: HashAlgorithm) -> Result<DemoReport> {
    let validator = validator(hash);
    let chain = demo_chain(&hash);

    if let Some(path) = out {
        write_chain(path, &chain)?;
    }

    let untouched = Verdict::from_result(validator.check_chain(&chain));

    let mut negative = chain.clone();
    negative.blocks[1].transactions[0].amount = -1;
    let negative_amount = Verdict::from_result(validator.check_chain(&negative));

    let mut corrupted = chain;
    break_chain(&mut corrupted);
    let corrupted = Verdict::from_result(validator.check_chain(&corrupted));

    Ok(DemoReport {
        untouched,
        negative_amount,
        corrupted,
    })
}
