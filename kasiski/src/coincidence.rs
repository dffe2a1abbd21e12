//! Index of coincidence scoring across candidate key lengths

use tracing::{debug, info, warn};

use crate::columns::split_columns;
use crate::error::Result;
use crate::text::{count_letters, NormalizedText};

/// Typical IC of English plaintext (about 1/15).
pub const ENGLISH_IC: f64 = 0.0667;

/// IC of uniformly random letters (about 1/26).
pub const RANDOM_IC: f64 = 0.0385;

/// Calculates the Index of Coincidence (IC) for the given text.
///
/// `IC = Σ fᵢ(fᵢ - 1) / (N(N - 1))` over the 26 letter counts. Returns 0.0
/// when the text has fewer than two letters.
///
/// ```rust
/// use kasiski::index_of_coincidence;
///
/// assert_eq!(index_of_coincidence("AAAA"), 1.0);
/// assert_eq!(index_of_coincidence("A"), 0.0);
/// ```
pub fn index_of_coincidence(text: &str) -> f64 {
    let frequencies = count_letters(text);
    let total: u64 = frequencies.iter().map(|&f| u64::from(f)).sum();

    if total < 2 {
        return 0.0;
    }

    let numerator: u64 = frequencies
        .iter()
        .map(|&f| u64::from(f) * u64::from(f.saturating_sub(1)))
        .sum();

    numerator as f64 / (total * (total - 1)) as f64
}

/// Average column IC for one candidate key length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyLengthHypothesis {
    pub length: usize,
    pub avg_ic: f64,
}

impl KeyLengthHypothesis {
    /// Scores `key_length` by averaging the IC of its columns.
    /// Empty and single-letter columns contribute 0.
    pub fn score(text: &NormalizedText, key_length: usize) -> Result<Self> {
        let columns = split_columns(text, key_length)?;
        let total: f64 = columns.iter().map(|c| index_of_coincidence(c)).sum();

        Ok(Self {
            length: key_length,
            avg_ic: total / key_length as f64,
        })
    }

    pub fn is_likely(&self, threshold: f64) -> bool {
        self.avg_ic > threshold
    }
}

/// Result of sweeping key lengths `1..=max_length`.
#[derive(Debug, Clone, PartialEq)]
pub struct IcSweep {
    hypotheses: Vec<KeyLengthHypothesis>,
}

impl IcSweep {
    pub fn run(text: &NormalizedText, max_length: usize) -> Result<Self> {
        if text.len() < 2 {
            warn!(letters = text.len(), "no letters to score, every IC is 0");
        }

        let hypotheses = (1..=max_length)
            .map(|length| KeyLengthHypothesis::score(text, length))
            .collect::<Result<Vec<_>>>()?;

        for h in &hypotheses {
            debug!(length = h.length, avg_ic = h.avg_ic, "scored key length");
        }

        let sweep = Self { hypotheses };
        if let Some(best) = sweep.best() {
            info!(length = best.length, avg_ic = best.avg_ic, "best key length by IC");
        }
        Ok(sweep)
    }

    /// One hypothesis per length, in ascending length order.
    pub fn hypotheses(&self) -> &[KeyLengthHypothesis] {
        &self.hypotheses
    }

    /// Highest average IC; the smallest length wins ties.
    pub fn best(&self) -> Option<KeyLengthHypothesis> {
        self.hypotheses.iter().copied().fold(None, |best, h| match best {
            Some(b) if b.avg_ic >= h.avg_ic => Some(b),
            _ => Some(h),
        })
    }

    /// Lengths whose average IC exceeds `threshold`, ascending.
    pub fn likely(&self, threshold: f64) -> Vec<KeyLengthHypothesis> {
        self.hypotheses
            .iter()
            .copied()
            .filter(|h| h.is_likely(threshold))
            .collect()
    }
}
