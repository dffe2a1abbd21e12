use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kasiski::io::read_text;
use kasiski::FrequencyReport;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the letter frequency program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file (standard input is read when omitted)
    #[arg(help = "Path to the input file")]
    file: Option<PathBuf>,
}

/// Main entry point for the letter frequency program.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();

    let content: String = match &cli.file {
        Some(path) => read_text(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read standard input")?;
            buffer
        }
    };

    print!("{}", FrequencyReport::new(&content));
    Ok(())
}
