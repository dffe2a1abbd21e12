//! Letter frequency statistics and the chi-squared goodness-of-fit test

use std::fmt;

use crate::text::{count_letters, index_letter, ALPHABET_SIZE};

/// Expected letter frequencies of English text, as percentages of A-Z.
///
/// E is most common at 13%, Z least common at 0.074%. Every entry is
/// strictly positive, so chi-squared against this table is always defined.
pub const ENGLISH_FREQUENCIES: [f64; ALPHABET_SIZE] = [
    8.2, 1.5, 2.8, 4.3, 13.0, 2.2, 2.0, 6.1, 7.0, 0.15, 0.77, 4.0, 2.4,
    6.7, 7.5, 1.9, 0.095, 6.0, 6.3, 9.1, 2.8, 0.98, 2.4, 0.15, 2.0, 0.074,
];

/// Converts letter counts to percentages (0-100). All zeros when there are no letters.
pub fn percentages(counts: &[u32; ALPHABET_SIZE]) -> [f64; ALPHABET_SIZE] {
    let total: u32 = counts.iter().sum();
    let mut freq = [0.0; ALPHABET_SIZE];

    if total > 0 {
        for (slot, &count) in freq.iter_mut().zip(counts) {
            *slot = f64::from(count) * 100.0 / f64::from(total);
        }
    }

    freq
}

/// Chi-squared distance of an observed distribution from an expected one.
///
/// `χ² = Σ (observed - expected)² / expected`. Letters with a non-positive
/// expected value are skipped. Lower means a closer match.
pub fn chi_squared(observed: &[f64; ALPHABET_SIZE], expected: &[f64; ALPHABET_SIZE]) -> f64 {
    observed
        .iter()
        .zip(expected)
        .filter(|&(_, &e)| e > 0.0)
        .map(|(&o, &e)| (o - e).powi(2) / e)
        .sum()
}

/// Letter counts of a text, printable in the plain frequency-report format.
///
/// ```rust
/// use kasiski::FrequencyReport;
///
/// let report = FrequencyReport::new("Aab");
/// assert_eq!(
///     report.to_string(),
///     "Letter frequencies (total letters: 3):\n\nA:  66.67% (2)\nB:  33.33% (1)\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyReport {
    counts: [u32; ALPHABET_SIZE],
}

impl FrequencyReport {
    pub fn new(text: &str) -> Self {
        Self {
            counts: count_letters(text),
        }
    }

    pub fn counts(&self) -> &[u32; ALPHABET_SIZE] {
        &self.counts
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn percentages(&self) -> [f64; ALPHABET_SIZE] {
        percentages(&self.counts)
    }
}

impl fmt::Display for FrequencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total();
        if total == 0 {
            return writeln!(f, "No letters found in input.");
        }

        writeln!(f, "Letter frequencies (total letters: {}):", total)?;
        writeln!(f)?;
        for (i, (&count, percentage)) in self.counts.iter().zip(self.percentages()).enumerate() {
            // Only show letters that appear
            if count > 0 {
                writeln!(f, "{}: {:>6.2}% ({})", index_letter(i), percentage, count)?;
            }
        }
        Ok(())
    }
}
