//! blockgen - generate Rust block-state types from a block catalog
//!
//! Run with: `blockgen --input data/blocks.json --output src/generated/block.rs`

use blockgen::cli::{self, Cli};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);
    cli::run(&cli)
}
