//! Error types for cryptanalysis and cipher operations

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KasiskiError {
    #[error("Key cannot be empty")]
    EmptyKey,

    #[error("Key must contain only letters (found {0:?})")]
    InvalidKeyCharacter(char),

    #[error("Invalid key length {length} (must be between 1 and {max})")]
    InvalidKeyLength { length: usize, max: usize },

    #[error("Invalid shift {0} (must be between -25 and 25)")]
    InvalidShift(i32),

    #[error("Invalid n-gram length {0} (must be at least 2)")]
    InvalidNGramLength(usize),

    #[error("Could not open file {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Could not read file {}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write to file {}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Coarse classification used by the binaries when reporting failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    FileNotFound,
    ReadFailed,
    WriteFailed,
}

impl KasiskiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KasiskiError::EmptyKey
            | KasiskiError::InvalidKeyCharacter(_)
            | KasiskiError::InvalidKeyLength { .. }
            | KasiskiError::InvalidShift(_)
            | KasiskiError::InvalidNGramLength(_) => ErrorKind::InvalidArgument,
            KasiskiError::FileNotFound(_) => ErrorKind::FileNotFound,
            KasiskiError::ReadFailed { .. } => ErrorKind::ReadFailed,
            KasiskiError::WriteFailed { .. } => ErrorKind::WriteFailed,
        }
    }
}

pub type Result<T> = std::result::Result<T, KasiskiError>;
