//! Additive substitution ciphers used by the attack and the sibling tools

use crate::error::{KasiskiError, Result};
use crate::text::{char_index, ALPHABET_SIZE};

/// Direction of a cipher transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Trait for a letter-wise substitution cipher over A-Z.
///
/// Implementors uppercase every letter they emit and pass every other
/// character through untouched.
pub trait SubstitutionCipher {
    /// Applies the cipher in the given direction
    fn transform(&self, text: &str, direction: Direction) -> String;

    fn encrypt(&self, text: &str) -> String {
        self.transform(text, Direction::Encrypt)
    }

    fn decrypt(&self, text: &str) -> String {
        self.transform(text, Direction::Decrypt)
    }
}

/// Shifts a letter rank by `shift` in the given direction, modulo 26.
fn shift_rank(rank: usize, shift: usize, direction: Direction) -> u8 {
    let shifted = match direction {
        Direction::Encrypt => rank + shift,
        Direction::Decrypt => rank + ALPHABET_SIZE - shift,
    };
    b'A' + (shifted % ALPHABET_SIZE) as u8
}

/// Vigenère cipher with a validated, non-empty alphabetic key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    shifts: Vec<usize>,
}

impl Vigenere {
    /// Create a cipher from a key of letters (either case).
    ///
    /// # Example
    ///
    /// ```rust
    /// use kasiski::{SubstitutionCipher, Vigenere};
    ///
    /// let cipher = Vigenere::new("key")?;
    /// assert_eq!(cipher.encrypt("hello"), "RIJVS");
    /// # Ok::<(), kasiski::KasiskiError>(())
    /// ```
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(KasiskiError::EmptyKey);
        }

        let shifts = key
            .chars()
            .map(|c| char_index(c).ok_or(KasiskiError::InvalidKeyCharacter(c)))
            .collect::<Result<Vec<usize>>>()?;

        Ok(Self { shifts })
    }

    /// The key in canonical uppercase form.
    pub fn key(&self) -> String {
        self.shifts.iter().map(|&s| (b'A' + s as u8) as char).collect()
    }

    pub fn key_len(&self) -> usize {
        self.shifts.len()
    }
}

impl SubstitutionCipher for Vigenere {
    fn transform(&self, text: &str, direction: Direction) -> String {
        let mut result = String::with_capacity(text.len());
        let mut key_index: usize = 0;

        for c in text.chars() {
            match char_index(c) {
                Some(rank) => {
                    let shift = self.shifts[key_index % self.shifts.len()];
                    result.push(shift_rank(rank, shift, direction) as char);
                    // Only letters advance the key position
                    key_index += 1;
                }
                None => result.push(c),
            }
        }

        result
    }
}

/// Caesar cipher: a single additive shift applied to every letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    shift: usize,
}

impl Caesar {
    /// Create a cipher from a signed shift in `-25..=25`.
    pub fn new(shift: i32) -> Result<Self> {
        if !(-25..=25).contains(&shift) {
            return Err(KasiskiError::InvalidShift(shift));
        }
        Ok(Self {
            shift: shift.rem_euclid(ALPHABET_SIZE as i32) as usize,
        })
    }

    /// Normalized shift in `0..26`.
    pub fn shift(&self) -> usize {
        self.shift
    }
}

impl SubstitutionCipher for Caesar {
    fn transform(&self, text: &str, direction: Direction) -> String {
        text.chars()
            .map(|c| match char_index(c) {
                Some(rank) => shift_rank(rank, self.shift, direction) as char,
                None => c,
            })
            .collect()
    }
}

/// Convenience wrapper: Vigenère encryption with a key string.
pub fn vigenere_encrypt(text: &str, key: &str) -> Result<String> {
    Ok(Vigenere::new(key)?.encrypt(text))
}

/// Convenience wrapper: Vigenère decryption with a key string.
pub fn vigenere_decrypt(text: &str, key: &str) -> Result<String> {
    Ok(Vigenere::new(key)?.decrypt(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vigenere_known_vector() {
        let cipher = Vigenere::new("LEMON").unwrap();
        assert_eq!(cipher.encrypt("ATTACKATDAWN"), "LXFOPVEFRNHR");
        assert_eq!(cipher.decrypt("LXFOPVEFRNHR"), "ATTACKATDAWN");
    }

    #[test]
    fn test_decrypt() {
        let decrypted = vigenere_decrypt("RIJVS", "KEY").unwrap();
        assert_eq!(decrypted, "HELLO");
    }

    #[test]
    fn test_non_letters_do_not_advance_key() {
        let cipher = Vigenere::new("AB").unwrap();
        // A+A, B+B skipping the space and comma
        assert_eq!(cipher.encrypt("a, b"), "A, C");
        assert_eq!(cipher.encrypt("ab"), "AC");
    }

    #[test]
    fn test_output_is_uppercase() {
        assert_eq!(vigenere_encrypt("Hello World", "a").unwrap(), "HELLO WORLD");
    }

    #[test]
    fn test_key_validation() {
        assert!(matches!(Vigenere::new(""), Err(KasiskiError::EmptyKey)));
        assert!(matches!(
            Vigenere::new("AB1"),
            Err(KasiskiError::InvalidKeyCharacter('1'))
        ));
        assert!(matches!(
            Vigenere::new("ÄB"),
            Err(KasiskiError::InvalidKeyCharacter('Ä'))
        ));
        assert_eq!(Vigenere::new("lemon").unwrap().key(), "LEMON");
    }

    #[test]
    fn test_caesar_shift_zero_is_identity() {
        let cipher = Caesar::new(0).unwrap();
        assert_eq!(cipher.encrypt("QWERTY"), "QWERTY");
        assert_eq!(cipher.decrypt("QWERTY"), "QWERTY");
    }

    #[test]
    fn test_caesar_negative_shift() {
        let cipher = Caesar::new(-3).unwrap();
        assert_eq!(cipher.shift(), 23);
        assert_eq!(cipher.encrypt("abc xyz"), "XYZ UVW");
        assert_eq!(Caesar::new(3).unwrap().encrypt("XYZ"), "ABC");
    }

    #[test]
    fn test_caesar_shift_range() {
        assert!(Caesar::new(25).is_ok());
        assert!(Caesar::new(-25).is_ok());
        assert!(matches!(Caesar::new(26), Err(KasiskiError::InvalidShift(26))));
        assert!(matches!(Caesar::new(-26), Err(KasiskiError::InvalidShift(-26))));
    }
}
