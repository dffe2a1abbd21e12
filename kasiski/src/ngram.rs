//! Repeated n-gram search over normalized ciphertext

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{KasiskiError, Result};
use crate::text::NormalizedText;

/// An n-gram that occurs at least twice, with every start offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NGramOccurrence {
    pub sequence: String,
    /// Strictly increasing start offsets, at least two of them
    pub positions: Vec<usize>,
}

impl NGramOccurrence {
    /// Forward distances between every pair of positions, `positions[j] - positions[i]` for `i < j`.
    ///
    /// A sequence at `[5, 12, 33]` yields `[7, 28, 21]`.
    pub fn distances(&self) -> Vec<usize> {
        let n = self.positions.len();
        let mut distances = Vec::with_capacity(n * n.saturating_sub(1) / 2);

        for (i, &earlier) in self.positions.iter().enumerate() {
            for &later in &self.positions[i + 1..] {
                distances.push(later - earlier);
            }
        }

        distances
    }
}

/// All repeated n-grams of one length, keyed by sequence in lexical order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NGramIndex {
    n: usize,
    repeated: BTreeMap<String, NGramOccurrence>,
}

impl NGramIndex {
    /// Indexes every n-gram of `text` and keeps those occurring at least twice.
    ///
    /// Text shorter than `n` gives an empty index. `n` must be at least 2.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kasiski::{NGramIndex, NormalizedText};
    ///
    /// let text = NormalizedText::new("abcXabcYabc");
    /// let index = NGramIndex::build(&text, 3)?;
    /// assert_eq!(index.get("ABC").unwrap().positions, vec![0, 4, 8]);
    /// # Ok::<(), kasiski::KasiskiError>(())
    /// ```
    pub fn build(text: &NormalizedText, n: usize) -> Result<Self> {
        if n < 2 {
            return Err(KasiskiError::InvalidNGramLength(n));
        }

        let mut all: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        let s = text.as_str();

        if s.len() >= n {
            for i in 0..=s.len() - n {
                all.entry(&s[i..i + n]).or_default().push(i);
            }
        }

        let repeated: BTreeMap<String, NGramOccurrence> = all
            .into_iter()
            .filter(|(_, positions)| positions.len() >= 2)
            .map(|(sequence, positions)| {
                (
                    sequence.to_string(),
                    NGramOccurrence {
                        sequence: sequence.to_string(),
                        positions,
                    },
                )
            })
            .collect();

        debug!(n, repeated = repeated.len(), "indexed repeated n-grams");

        Ok(Self { n, repeated })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn get(&self, sequence: &str) -> Option<&NGramOccurrence> {
        self.repeated.get(sequence)
    }

    /// Occurrences in lexical order of their sequence.
    pub fn iter(&self) -> impl Iterator<Item = &NGramOccurrence> {
        self.repeated.values()
    }

    pub fn len(&self) -> usize {
        self.repeated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repeated.is_empty()
    }

    /// Every pairwise distance from every occurrence, in index order.
    pub fn distances(&self) -> Vec<usize> {
        self.iter().flat_map(NGramOccurrence::distances).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_repeats_only() {
        let text = NormalizedText::new("HELLOHELLO");
        let index = NGramIndex::build(&text, 3).unwrap();

        let hel = index.get("HEL").unwrap();
        assert_eq!(hel.positions, vec![0, 5]);
        assert!(index.get("LOH").is_none());
        assert!(index.iter().all(|occ| occ.positions.len() >= 2));
        assert_eq!(index.len(), 3); // HEL, ELL, LLO
    }

    #[test]
    fn test_short_text_is_empty() {
        let text = NormalizedText::new("ABC");
        assert!(NGramIndex::build(&text, 4).unwrap().is_empty());
        assert!(NGramIndex::build(&NormalizedText::default(), 3).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_tiny_n() {
        let text = NormalizedText::new("AAAA");
        assert!(matches!(
            NGramIndex::build(&text, 1),
            Err(KasiskiError::InvalidNGramLength(1))
        ));
    }

    #[test]
    fn test_overlapping_occurrences() {
        let text = NormalizedText::new("AAAAA");
        let index = NGramIndex::build(&text, 2).unwrap();
        assert_eq!(index.get("AA").unwrap().positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_pairwise_distances() {
        let occurrence = NGramOccurrence {
            sequence: "PTR".to_string(),
            positions: vec![5, 12, 33],
        };
        assert_eq!(occurrence.distances(), vec![7, 28, 21]);
    }

    #[test]
    fn test_distance_count_is_pairs() {
        let text = NormalizedText::new("AAAAA");
        let index = NGramIndex::build(&text, 2).unwrap();
        // 4 positions -> 4 choose 2
        assert_eq!(index.distances().len(), 6);
        assert!(index.distances().iter().all(|&d| d > 0));
    }
}
