//! Command-line front end.
//!
//! Reads a catalog, generates the block-state source and writes it to a file
//! or to stdout.

use anyhow::Context;
use blockgen_codegen::CodegenOptions;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Command-line arguments of the `blockgen` binary.
#[derive(Debug, Parser)]
#[command(name = "blockgen")]
#[command(
    author,
    version,
    about = "Generate Rust block-state types from a block catalog",
    long_about = None
)]
pub struct Cli {
    /// Path to the JSON block catalog
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file for the generated code (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Module the generated code imports BlockProperty and BlockState from
    #[arg(long, default_value = blockgen_codegen::generator::DEFAULT_TRAIT_PATH)]
    pub trait_path: String,

    /// File whose contents replace the default license banner
    #[arg(long)]
    pub license_file: Option<PathBuf>,

    /// Also emit `all_block_states()` listing every catalog state
    #[arg(long)]
    pub state_table: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds generator options from the arguments.
    ///
    /// # Errors
    /// Returns an error if the license file cannot be read.
    pub fn options(&self) -> anyhow::Result<CodegenOptions> {
        let mut options = CodegenOptions::default()
            .with_trait_path(self.trait_path.clone())
            .with_state_table(self.state_table);

        if let Some(path) = &self.license_file {
            let header = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read license file {}", path.display()))?;
            options = options.with_license_header(header);
        }

        Ok(options)
    }
}

/// Installs the tracing subscriber. `RUST_LOG` takes precedence over
/// `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs one generation.
///
/// # Errors
/// Returns an error if reading, generation or writing fails.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = cli.options()?;
    tracing::info!(
        input = %cli.input.display(),
        trait_path = %options.trait_path,
        state_table = options.emit_state_table,
        "generating block states"
    );

    match &cli.output {
        Some(output) => {
            blockgen_codegen::generate_to_file(&cli.input, output, &options).with_context(|| {
                format!(
                    "failed to generate {} from {}",
                    output.display(),
                    cli.input.display()
                )
            })?;
        }
        None => {
            let json = std::fs::read_to_string(&cli.input)
                .with_context(|| format!("failed to read {}", cli.input.display()))?;
            let code = blockgen_codegen::generate_from_json_with(&json, &options)
                .with_context(|| format!("failed to generate from {}", cli.input.display()))?;
            print!("{}", code);
            tracing::info!(bytes = code.len(), "wrote generated block states to stdout");
        }
    }

    Ok(())
}
