//! Whole-file input and prefixed output for the command-line tools

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{KasiskiError, Result};

/// Operation label prepended to the input file name to form the output name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputPrefix {
    Encrypted,
    Decrypted,
    Shifted,
}

impl OutputPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputPrefix::Encrypted => "encrypted_",
            OutputPrefix::Decrypted => "decrypted_",
            OutputPrefix::Shifted => "shifted_",
        }
    }

    /// `dir/name.txt` becomes `dir/<prefix>name.txt`.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        input.with_file_name(format!("{}{}", self.as_str(), name))
    }
}

/// Reads an entire text file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => KasiskiError::FileNotFound(path.to_path_buf()),
        _ => KasiskiError::ReadFailed {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Writes `content` to a file, replacing anything already there.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| KasiskiError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "wrote output file");
    Ok(())
}

/// Writes `content` next to `input` under the prefixed name and returns that path.
pub fn write_prefixed(input: &Path, prefix: OutputPrefix, content: &str) -> Result<PathBuf> {
    let output = prefix.output_path(input);
    write_text(&output, content)?;
    Ok(output)
}
