use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use kasiski::io::{read_text, write_prefixed, OutputPrefix};
use kasiski::{Direction, SubstitutionCipher, Vigenere};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: PathBuf,

    /// Key string for the Vigenère cipher
    #[arg(short, long, help = "Key string for the cipher (letters only)")]
    key: String,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

impl OperationMode {
    fn direction(self) -> Direction {
        match self {
            OperationMode::Encrypt => Direction::Encrypt,
            OperationMode::Decrypt => Direction::Decrypt,
        }
    }

    fn prefix(self) -> OutputPrefix {
        match self {
            OperationMode::Encrypt => OutputPrefix::Encrypted,
            OperationMode::Decrypt => OutputPrefix::Decrypted,
        }
    }
}

/// Main entry point for the Vigenère cipher program.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Validate the key before touching any file
    let cipher = Vigenere::new(&cli.key).context("Invalid key")?;

    let content: String = read_text(&cli.file)?;
    let result = cipher.transform(&content, cli.mode.direction());
    info!(mode = ?cli.mode, letters = content.len(), "processed input");

    let output = write_prefixed(&cli.file, cli.mode.prefix(), &result)?;

    println!(
        "Processed {} in {:?} mode with key '{}'",
        cli.file.display(),
        cli.mode,
        cli.key
    );
    println!("Output written to {}", output.display());
    Ok(())
}
