//! Analysis configuration

use crate::error::{KasiskiError, Result};
use crate::frequency::ENGLISH_FREQUENCIES;
use crate::text::ALPHABET_SIZE;

/// Hard upper bound for any key length the analysis will consider.
pub const MAX_KEY_LENGTH: usize = 50;

/// Average IC above which a key length is flagged as likely.
pub const LIKELY_IC_THRESHOLD: f64 = 0.060;

/// Tunable parameters of the Kasiski / IC / chi-squared pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Upper bound of the IC sweep (inclusive)
    pub max_key_length: usize,
    /// Largest key length accepted for recovery
    pub max_accepted_key_length: usize,
    /// N-gram lengths examined, most reliable first
    pub ngram_lengths: Vec<usize>,
    /// Histogram entries reported
    pub histogram_top: usize,
    /// Trigram occurrences listed before truncating
    pub trigram_display_limit: usize,
    pub likely_threshold: f64,
    /// Expected letter percentages of the plaintext language
    pub reference: [f64; ALPHABET_SIZE],
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_key_length: 15,
            max_accepted_key_length: MAX_KEY_LENGTH,
            ngram_lengths: vec![4, 3],
            histogram_top: 10,
            trigram_display_limit: 10,
            likely_threshold: LIKELY_IC_THRESHOLD,
            reference: ENGLISH_FREQUENCIES,
        }
    }
}

impl AnalysisConfig {
    /// Checks bounds before any processing happens.
    pub fn validate(&self) -> Result<()> {
        if self.max_key_length == 0 || self.max_key_length > MAX_KEY_LENGTH {
            return Err(KasiskiError::InvalidKeyLength {
                length: self.max_key_length,
                max: MAX_KEY_LENGTH,
            });
        }
        if self.max_accepted_key_length == 0 || self.max_accepted_key_length > MAX_KEY_LENGTH {
            return Err(KasiskiError::InvalidKeyLength {
                length: self.max_accepted_key_length,
                max: MAX_KEY_LENGTH,
            });
        }
        if let Some(&n) = self.ngram_lengths.iter().find(|&&n| n < 2) {
            return Err(KasiskiError::InvalidNGramLength(n));
        }
        Ok(())
    }

    /// Whether `key_length` may be used for recovery.
    pub fn check_key_length(&self, key_length: usize) -> Result<()> {
        if key_length == 0 || key_length > self.max_accepted_key_length {
            Err(KasiskiError::InvalidKeyLength {
                length: key_length,
                max: self.max_accepted_key_length,
            })
        } else {
            Ok(())
        }
    }
}
