//! Columnar split of ciphertext by position modulo the key length

use crate::config::MAX_KEY_LENGTH;
use crate::error::{KasiskiError, Result};
use crate::text::NormalizedText;

/// Splits text into `key_length` columns.
/// Column `i` holds every letter at a position congruent to `i` modulo `key_length`,
/// in position order.
pub fn split_columns(text: &NormalizedText, key_length: usize) -> Result<Vec<String>> {
    if key_length == 0 {
        return Err(KasiskiError::InvalidKeyLength {
            length: key_length,
            max: MAX_KEY_LENGTH,
        });
    }

    let mut columns = vec![String::new(); key_length];

    for (i, c) in text.as_str().chars().enumerate() {
        columns[i % key_length].push(c);
    }

    Ok(columns)
}

/// Re-interleaves columns produced by [`split_columns`].
pub fn interleave(columns: &[String]) -> String {
    if columns.is_empty() {
        return String::new();
    }

    let total: usize = columns.iter().map(String::len).sum();
    let mut iters: Vec<std::str::Chars<'_>> = columns.iter().map(|c| c.chars()).collect();
    let mut result = String::with_capacity(total);

    'rows: loop {
        for column in iters.iter_mut() {
            match column.next() {
                Some(c) => result.push(c),
                None => break 'rows,
            }
        }
    }

    result
}
