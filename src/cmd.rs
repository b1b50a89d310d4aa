// SPDX-FileCopyrightText: 2026 oddeven developers
// SPDX-License-Identifier: MIT

//! Command set implementation.
//!
//! This module is the forward facing API of the internal library. It is meant to be
//! used in `main` of the oddeven binary. Every command drives the same deploy/call
//! flow the integration tests exercise.

use crate::{
    chain::DevChain,
    contract::OddEvenDiff,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::instrument;

/// Oddeven public command set CLI.
#[derive(Debug, Clone, Parser)]
#[command(
    about,
    override_usage = "\n  oddeven [options] <oddeven-command>",
    subcommand_help_heading = "Commands",
    version
)]
pub struct Oddeven {
    /// Command-set interfaces.
    #[command(subcommand)]
    pub command: Command,
}

impl Oddeven {
    /// Run oddeven command based on given arguments.
    ///
    /// # Errors
    ///
    /// Will fail if given command implementation fails.
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Diff(opts) => run_diff(opts).await,
            Command::List => run_list(),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Report odd/even difference of given values.
    #[command(override_usage = "oddeven diff [value]...")]
    Diff(DiffOptions),

    /// List all deployable contract templates.
    List,
}

/// Report odd/even difference of given values.
#[derive(Parser, Clone, Debug)]
#[command(author, about, long_about)]
pub struct DiffOptions {
    /// Integer values to report on.
    #[arg(value_name = "value", allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

#[instrument(level = "debug")]
async fn run_diff(opts: DiffOptions) -> Result<()> {
    let chain = DevChain::new();
    let contract = chain.factory(OddEvenDiff::NAME)?.deploy().await?;
    let diff = contract.call("get_odd_even_diff", &opts.values).await?;
    println!("{diff}");

    Ok(())
}

fn run_list() -> Result<()> {
    let chain = DevChain::new();
    for name in chain.contract_names() {
        println!("{name}");
    }

    Ok(())
}
