//! Text normalization and letter helpers shared by every analysis stage

use std::fmt;

/// Number of letters in the alphabet the analysis works over.
pub const ALPHABET_SIZE: usize = 26;

/// Ciphertext reduced to uppercase ASCII letters only.
///
/// Built once from raw input by [`NormalizedText::new`] and never mutated
/// afterwards. All analysis stages index into it by letter position, so the
/// string is guaranteed to be pure ASCII.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Removes every non-alphabetic character and uppercases the rest.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kasiski::NormalizedText;
    ///
    /// let text = NormalizedText::new("Hello, World!");
    /// assert_eq!(text.as_str(), "HELLOWORLD");
    /// ```
    pub fn new(raw: &str) -> Self {
        NormalizedText(
            raw.chars()
                .filter(|c| c.is_ascii_alphabetic())
                .map(|c| c.to_ascii_uppercase())
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns the alphabet rank (A=0 .. Z=25) of an ASCII letter of either case.
pub fn letter_index(byte: u8) -> Option<usize> {
    if byte.is_ascii_alphabetic() {
        Some((byte.to_ascii_uppercase() - b'A') as usize)
    } else {
        None
    }
}

/// Same as [`letter_index`] for a `char`; non-ASCII characters have no rank.
pub fn char_index(c: char) -> Option<usize> {
    if c.is_ascii() {
        letter_index(c as u8)
    } else {
        None
    }
}

/// Uppercase letter for an alphabet rank, wrapping modulo 26.
pub fn index_letter(index: usize) -> char {
    (b'A' + (index % ALPHABET_SIZE) as u8) as char
}

/// Counts the frequency of each letter in the given text.
///
/// Non-alphabetic bytes are skipped; both cases count towards the same slot.
pub fn count_letters(text: &str) -> [u32; ALPHABET_SIZE] {
    let mut counts: [u32; ALPHABET_SIZE] = [0; ALPHABET_SIZE];

    for index in text.bytes().filter_map(letter_index) {
        counts[index] += 1;
    }

    counts
}
