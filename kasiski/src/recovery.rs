//! Full key recovery: one Caesar break per column

use tracing::{debug, info};

use crate::breaker::{break_column, CaesarShiftResult};
use crate::cipher::{SubstitutionCipher, Vigenere};
use crate::columns::split_columns;
use crate::error::Result;
use crate::text::{NormalizedText, ALPHABET_SIZE};

/// Outcome of breaking one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnResult {
    pub index: usize,
    /// Letters in the column
    pub letters: usize,
    pub best: CaesarShiftResult,
}

/// A key recovered column by column, with the per-column evidence.
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveredKey {
    key: String,
    columns: Vec<ColumnResult>,
}

impl RecoveredKey {
    /// Splits `text` into `key_length` columns and breaks each independently.
    pub fn recover(
        text: &NormalizedText,
        key_length: usize,
        expected: &[f64; ALPHABET_SIZE],
    ) -> Result<Self> {
        let columns: Vec<ColumnResult> = split_columns(text, key_length)?
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let best = break_column(column, expected);
                debug!(
                    column = index,
                    letters = column.len(),
                    shift = best.shift,
                    chi_squared = best.chi_squared,
                    "broke column"
                );
                ColumnResult {
                    index,
                    letters: column.len(),
                    best,
                }
            })
            .collect();

        let key: String = columns.iter().map(|c| c.best.key_letter()).collect();
        info!(%key, key_length, "recovered key");

        Ok(Self { key, columns })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn columns(&self) -> &[ColumnResult] {
        &self.columns
    }

    /// Decrypts `ciphertext` with the recovered key.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Ok(Vigenere::new(&self.key)?.decrypt(ciphertext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::vigenere_encrypt;
    use crate::frequency::ENGLISH_FREQUENCIES;

    const PLAINTEXT: &str = "It was the best of times, it was the worst of times, it was the age of \
        wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
        incredulity, it was the season of light, it was the season of darkness, it was the spring \
        of hope, it was the winter of despair, we had everything before us, we had nothing before \
        us, we were all going direct to heaven, we were all going direct the other way";

    #[test]
    fn test_recover_and_decrypt() {
        let ciphertext = vigenere_encrypt(PLAINTEXT, "KEY").unwrap();
        let text = NormalizedText::new(&ciphertext);

        let recovered = RecoveredKey::recover(&text, 3, &ENGLISH_FREQUENCIES).unwrap();
        assert_eq!(recovered.key(), "KEY");
        assert_eq!(recovered.columns().len(), 3);
        assert_eq!(
            recovered.columns().iter().map(|c| c.letters).sum::<usize>(),
            text.len()
        );
        assert_eq!(
            recovered.decrypt(text.as_str()).unwrap(),
            NormalizedText::new(PLAINTEXT).as_str()
        );
    }

    #[test]
    fn test_key_length_one_on_empty_text() {
        let recovered =
            RecoveredKey::recover(&NormalizedText::default(), 1, &ENGLISH_FREQUENCIES).unwrap();
        assert_eq!(recovered.key(), "A");
    }

    #[test]
    fn test_zero_key_length() {
        assert!(RecoveredKey::recover(&NormalizedText::new("ABC"), 0, &ENGLISH_FREQUENCIES).is_err());
    }
}
