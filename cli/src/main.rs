// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # blockcheck CLI
//!
//! Entry point for the `blockcheck` binary. Parses CLI arguments,
//! initializes logging, runs one subcommand, and maps its verdict to an
//! exit code.
//!
//! - `validate` - validate a chain file
//! - `block`    - validate one block of a chain file
//! - `corrupt`  - break a chain's genesis link
//! - `demo`     - build a chain, tamper with it, show the verdicts
//! - `version`  - print build version information
//!
//! Exit status is 0 for a valid result and 1 for an invalid one. I/O and
//! parse failures also exit with 1, after printing the error chain.

mod cli;
mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use blockcheck::config;

use cli::{BlockcheckCli, Commands};
use commands::Verdict;

fn main() -> Result<ExitCode> {
    let cli = BlockcheckCli::parse();
    logging::init_logging(&cli.global.log_level, cli.global.log_format);

    let hash = cli.global.hash;
    tracing::debug!(?hash, "hash algorithm selected");

    match cli.command {
        Commands::Validate { file } => Ok(report(&commands::validate(&file, hash)?)),
        Commands::Block { file, index } => {
            Ok(report(&commands::validate_block(&file, index, hash)?))
        }
        Commands::Corrupt { input, output } => {
            commands::corrupt(&input, &output)?;
            println!("corrupted genesis link written to {}", output.display());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Demo { out } => {
            let report = commands::demo(out.as_deref(), hash)?;
            println!("untouched chain:        {}", report.untouched);
            println!("after amount flip (-1): {}", report.negative_amount);
            println!("after break_chain:      {}", report.corrupted);
            if let Some(path) = out {
                println!("valid chain written to {}", path.display());
            }
            Ok(if report.as_expected() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Version => {
            print_version();
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Print a verdict and turn it into an exit code.
fn report(verdict: &Verdict) -> ExitCode {
    println!("{verdict}");
    if verdict.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_version() {
    println!("blockcheck {}", env!("CARGO_PKG_VERSION"));
    println!("  signatures: {}", config::SIGNING_ALGORITHM);
    println!("  default hash: {}", config::DEFAULT_HASH_FUNCTION);
}
