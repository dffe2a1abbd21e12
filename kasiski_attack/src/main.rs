use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use kasiski::io::read_text;
use kasiski::{analyze, recover, AnalysisConfig, Decryption};
use tracing_subscriber::EnvFilter;

mod report;

/// Command-line arguments for the Kasiski attack program.
#[derive(Parser, Debug)]
#[command(version, about = "Break a Vigenère cipher with the Kasiski method and index of coincidence")]
struct Cli {
    /// Path to the ciphertext file (a built-in sample is used when omitted)
    file: Option<PathBuf>,

    /// Largest key length tested by the index of coincidence sweep
    #[arg(short, long, default_value_t = 15, help = "Largest key length to test (1-50)")]
    max_key_length: usize,

    /// Key length to recover; skips the prompt
    #[arg(short, long, help = "Key length to recover (0 exits after the analysis)")]
    key_length: Option<usize>,

    /// Extra key to decrypt with; skips the prompt
    #[arg(long, help = "Decrypt again with this key after recovery")]
    manual_key: Option<String>,

    /// Number of histogram entries to show
    #[arg(short, long, default_value_t = 10, help = "Number of common distances to show")]
    top: usize,
}

/// Example ciphertext (key length 6)
const SAMPLE_CIPHERTEXT: &str = "ZVZPV TOGGE KHXSN LRYRP ZHZIO RZHZA ZCOAF PNOHF \
    VEYHC ILCVS MGRYR SYXYR YSIEK RGBYX YRRCR IIVYH \
    CIYBA GZSWE KDMIJ RTHVX ZIKG";

/// Main entry point for the Kasiski attack program.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli: Cli = Cli::parse();
    let config = AnalysisConfig {
        max_key_length: cli.max_key_length,
        histogram_top: cli.top,
        ..Default::default()
    };
    config.validate().context("Invalid analysis settings")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    writeln!(out, "========================================")?;
    writeln!(out, "KASISKI ATTACK - Vigenère Cipher Breaker")?;
    writeln!(out, "========================================")?;

    // Get ciphertext from file or use example
    let raw = match &cli.file {
        Some(path) => {
            let content = read_text(path)?;
            writeln!(out, "Loaded ciphertext from: {}", path.display())?;
            content
        }
        None => {
            writeln!(out, "Using example ciphertext.")?;
            SAMPLE_CIPHERTEXT.to_string()
        }
    };

    // Step 1 and 2: Kasiski distances and index of coincidence
    let report = analyze(&raw, &config)?;
    writeln!(out, "Ciphertext length: {} letters", report.ciphertext.len())?;
    writeln!(out, "Ciphertext: {}", report.ciphertext)?;
    report::write_kasiski(&mut out, &report, &config)?;
    report::write_ic_table(&mut out, &report, &config)?;

    // Step 3: Key length from the command line or the user
    let key_length = match cli.key_length {
        Some(key_length) => key_length,
        None => {
            writeln!(out, "\n========================================")?;
            writeln!(out, "Based on the analysis above, what key length do you want to try?")?;
            write!(out, "Enter key length (or 0 to exit): ")?;
            out.flush()?;
            match read_key_length(&mut input)? {
                Some(key_length) => key_length,
                None => 0,
            }
        }
    };

    if config.check_key_length(key_length).is_err() {
        writeln!(out, "Exiting.")?;
        return Ok(());
    }

    // Step 4 and 5: Recover the key and decrypt
    let (recovered, decryption) = recover(&report, key_length, &config)?;
    report::write_recovery(&mut out, &recovered)?;
    report::write_decryption(&mut out, &decryption)?;

    // Optional: a different key if the recovered one looks wrong
    let manual_key = match cli.manual_key {
        Some(key) => Some(key),
        None if cli.key_length.is_none() => {
            writeln!(out, "If the above doesn't look right, you can try a different key.")?;
            write!(out, "Enter key manually (or press Enter to finish): ")?;
            out.flush()?;
            read_manual_key(&mut input)?
        }
        None => None,
    };

    if let Some(key) = manual_key {
        let manual = Decryption::with_key(&report.ciphertext, &key)
            .with_context(|| format!("Cannot decrypt with key \"{}\"", key))?;
        report::write_manual(&mut out, &manual)?;
    }

    Ok(())
}

/// Reads a key length line. End of input counts as a request to exit.
fn read_key_length<R: BufRead>(input: &mut R) -> Result<Option<usize>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed = line.trim();
    match trimmed.parse::<usize>() {
        Ok(key_length) => Ok(Some(key_length)),
        // Negative numbers exit like 0
        Err(_) if trimmed.parse::<i64>().is_ok() => Ok(None),
        Err(_) => bail!("Key length must be a number, got \"{}\"", trimmed),
    }
}

/// Reads an optional manual key; an empty line means none.
fn read_manual_key<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let key = line.trim();
    Ok((!key.is_empty()).then(|| key.to_string()))
}
