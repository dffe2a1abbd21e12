use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kasiski::io::{read_text, write_prefixed, OutputPrefix};
use kasiski::{Caesar, SubstitutionCipher};
use tracing_subscriber::EnvFilter;

// Defining the command-line arguments.
#[derive(Parser, Debug)]
struct Cli {
    #[arg(help = "Path to the input file")]
    file: PathBuf,

    #[arg(allow_negative_numbers = true, help = "Shift between -25 and 25")]
    shift: i32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();

    // Reject a bad shift before reading anything
    let cipher = Caesar::new(cli.shift).context("Invalid shift")?;

    let content: String = read_text(&cli.file)?;
    let shifted = cipher.encrypt(&content);
    let output = write_prefixed(&cli.file, OutputPrefix::Shifted, &shifted)?;

    println!("Processed {} with shift {}", cli.file.display(), cli.shift);
    println!("Output written to {}", output.display());
    Ok(())
}
