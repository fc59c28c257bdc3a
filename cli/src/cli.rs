//! # CLI Interface
//!
//! Command-line structure for `blockcheck`, built with `clap` derive.
//! Global options pick the hash algorithm and logging; subcommands pick
//! what to validate.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use blockcheck::crypto::{Blake3Hasher, Hasher, Sha256Hasher};

use crate::logging::LogFormat;

/// Validate signed transactions, blocks, and hash-linked chains.
#[derive(Parser, Debug)]
#[command(
    name = "blockcheck",
    about = "Validate signed transactions, blocks, and hash-linked chains",
    version,
    propagate_version = true
)]
pub struct BlockcheckCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Block hash algorithm the chain was produced with.
    #[arg(long, global = true, env = "BLOCKCHECK_HASH", value_enum, default_value_t = HashAlgorithm::Sha256)]
    pub hash: HashAlgorithm,

    /// Default log filter when `RUST_LOG` is unset.
    #[arg(
        long,
        global = true,
        env = "BLOCKCHECK_LOG",
        default_value = "blockcheck=info,blockcheck_cli=info"
    )]
    pub log_level: String,

    /// Log output format.
    #[arg(long, global = true, env = "BLOCKCHECK_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a whole chain from a JSON file.
    Validate {
        /// Path to a JSON chain document (`{"blocks": [...]}`).
        file: PathBuf,
    },
    /// Validate a single block of a chain file.
    Block {
        /// Path to a JSON chain document.
        file: PathBuf,
        /// Zero-based index of the block to validate.
        #[arg(long, short = 'i')]
        index: usize,
    },
    /// Corrupt a chain's genesis link and write the result.
    Corrupt {
        /// Chain to read.
        input: PathBuf,
        /// Where to write the corrupted chain.
        output: PathBuf,
    },
    /// Build a three-block chain and show how validation reacts to tampering.
    Demo {
        /// Also write the untampered chain to this file.
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },
    /// Print version information and exit.
    Version,
}

/// Hash algorithm selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HashAlgorithm {
    Sha256,
    Blake3,
}

impl Hasher for HashAlgorithm {
    fn digest_hex(&self, data: &[u8]) -> String {
        match self {
            HashAlgorithm::Sha256 => Sha256Hasher.digest_hex(data),
            HashAlgorithm::Blake3 => Blake3Hasher.digest_hex(data),
        }
    }
}
