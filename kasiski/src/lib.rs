//! # Kasiski Library
//!
//! This library breaks Vigenère ciphertext without the key, using three
//! classical statistical techniques.
//!
//! ## Techniques
//!
//! - **Kasiski examination** - repeated n-grams and the distances between them
//! - **Index of coincidence** - average column IC for every candidate key length
//! - **Chi-squared frequency matching** - one Caesar break per key column
//!
//! ## Usage
//!
//! ```rust
//! use kasiski::{analyze, recover, vigenere_encrypt, AnalysisConfig};
//!
//! let plaintext = "It was the best of times, it was the worst of times, it was the age of \
//!     wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
//!     incredulity, it was the season of light, it was the season of darkness, it was the \
//!     spring of hope, it was the winter of despair, we had everything before us, we had \
//!     nothing before us, we were all going direct to heaven, we were all going direct the \
//!     other way";
//! let ciphertext = vigenere_encrypt(plaintext, "KEY")?;
//!
//! let config = AnalysisConfig::default();
//! let report = analyze(&ciphertext, &config)?;
//! let (key, decryption) = recover(&report, 3, &config)?;
//!
//! assert_eq!(key.key(), "KEY");
//! assert!(decryption.plaintext.starts_with("ITWASTHEBESTOFTIMES"));
//! # Ok::<(), kasiski::KasiskiError>(())
//! ```

// Public modules
pub mod analysis;
pub mod breaker;
pub mod cipher;
pub mod coincidence;
pub mod columns;
pub mod config;
pub mod distance;
pub mod error;
pub mod frequency;
pub mod io;
pub mod ngram;
pub mod recovery;
pub mod text;

// Re-exports for easy access
pub use analysis::{
    analyze, recover, run_attack, AttackOutcome, AttackRequest, Decryption, KasiskiReport,
    NGramFinding,
};
pub use breaker::{break_column, score_shifts, CaesarShiftResult};
pub use cipher::{vigenere_decrypt, vigenere_encrypt, Caesar, Direction, SubstitutionCipher, Vigenere};
pub use coincidence::{index_of_coincidence, IcSweep, KeyLengthHypothesis};
pub use columns::{interleave, split_columns};
pub use config::{AnalysisConfig, LIKELY_IC_THRESHOLD, MAX_KEY_LENGTH};
pub use distance::{gcd, gcd_of, DistanceCount, DistanceSummary};
pub use error::{ErrorKind, KasiskiError, Result};
pub use frequency::{chi_squared, FrequencyReport, ENGLISH_FREQUENCIES};
pub use ngram::{NGramIndex, NGramOccurrence};
pub use recovery::{ColumnResult, RecoveredKey};
pub use text::NormalizedText;
