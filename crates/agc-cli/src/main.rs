//! `agc` — compiles a register schema into a packed genome artifact.

mod logging;
mod writer;

use std::path::{Path, PathBuf};

use agc_core::Schema;
use agc_genome::{Compiler, CompilerConfig};
use anyhow::Result;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about = "ATOMiK genome compiler")]
struct Cli {
    /// Path to the JSON schema to compile.
    #[arg(value_name = "SCHEMA")]
    schema: PathBuf,

    /// Directory the artifact is written to.
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    info!("ATOMiK genome translator v{}", env!("CARGO_PKG_VERSION"));

    let out_path = run(&cli.schema, &cli.out_dir)?;

    info!("synthesized {}", out_path.display());
    Ok(())
}

/// Loads, compiles, and persists one schema; returns the artifact path.
fn run(schema_path: &Path, out_dir: &Path) -> Result<PathBuf> {
    info!("reading schema {}", schema_path.display());
    let schema = Schema::load(schema_path)?;

    let compiler = Compiler::new(CompilerConfig::default());
    let artifact = compiler.compile(&schema)?;

    let out_path = out_dir.join(compiler.output_filename(&schema));
    writer::write_artifact(&out_path, artifact.bytes())?;

    Ok(out_path)
}
