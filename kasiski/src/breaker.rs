//! Single-column Caesar breaking by minimum chi-squared

use crate::frequency::{chi_squared, percentages};
use crate::text::{count_letters, index_letter, ALPHABET_SIZE};

/// Best shift found for one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaesarShiftResult {
    /// Shift in `0..26`
    pub shift: u8,
    pub chi_squared: f64,
}

impl CaesarShiftResult {
    /// Key letter for this shift: 0 is 'A', 25 is 'Z'.
    pub fn key_letter(&self) -> char {
        index_letter(self.shift as usize)
    }
}

/// Chi-squared score of every candidate shift against `expected`.
///
/// Entry `s` scores the column decrypted by subtracting `s` from each letter.
pub fn score_shifts(column: &str, expected: &[f64; ALPHABET_SIZE]) -> [f64; ALPHABET_SIZE] {
    let counts = count_letters(column);
    let mut scores = [0.0; ALPHABET_SIZE];

    for (shift, score) in scores.iter_mut().enumerate() {
        // Decrypted letter i was ciphertext letter i + shift
        let mut shifted = [0u32; ALPHABET_SIZE];
        for (i, slot) in shifted.iter_mut().enumerate() {
            *slot = counts[(i + shift) % ALPHABET_SIZE];
        }
        *score = chi_squared(&percentages(&shifted), expected);
    }

    scores
}

/// Finds the shift that makes a column look most like the expected language.
///
/// The first shift reaching the minimum wins, so an empty column yields shift 0.
pub fn break_column(column: &str, expected: &[f64; ALPHABET_SIZE]) -> CaesarShiftResult {
    let scores = score_shifts(column, expected);
    let mut best = CaesarShiftResult {
        shift: 0,
        chi_squared: scores[0],
    };

    for (shift, &score) in scores.iter().enumerate().skip(1) {
        if score < best.chi_squared {
            best = CaesarShiftResult {
                shift: shift as u8,
                chi_squared: score,
            };
        }
    }

    best
}
