//! Binary crate for the `pogoda` command-line tool.
//!
//! This crate focuses on:
//! - The interactive menu loop
//! - Human-friendly output formatting
//!
//! All the lookup and generation logic lives in `pogoda-core`.

use clap::Parser;

mod cli;
mod display;

fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run()
}
