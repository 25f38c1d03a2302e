//! Generates `block.rs` in `OUT_DIR` from `data/blocks.json`.

use blockgen_codegen::CodegenOptions;
use std::path::{Path, PathBuf};

const BLOCK_DATA: &str = "data/blocks.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed={}", BLOCK_DATA);

    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    let options = CodegenOptions::default().with_state_table(true);

    blockgen_codegen::generate_to_file(
        Path::new(BLOCK_DATA),
        &out_dir.join("block.rs"),
        &options,
    )?;

    Ok(())
}
