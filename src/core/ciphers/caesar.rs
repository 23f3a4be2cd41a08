use crate::core::errors::Result;
use crate::core::models::alphabet::Alphabet;
use crate::core::traits::cipher::Cipher;

/// Caesar cipher: fixed-shift substitution over the alphabet.
///
/// Characters outside the alphabet pass through unchanged, so any
/// Unicode string is a valid input. The shift is normalized modulo the
/// alphabet length at construction.
pub struct CaesarCipher {
    alphabet: Alphabet,
    shift: usize,
}

impl CaesarCipher {
    pub fn new(alphabet: Alphabet, shift: i64) -> Self {
        let shift = shift.rem_euclid(alphabet.len() as i64) as usize;
        Self { alphabet, shift }
    }

    /// Substitute one character by `offset` alphabet positions.
    fn shift_char(&self, c: char, offset: usize) -> char {
        match self.alphabet.index_of(c) {
            Some(index) => self
                .alphabet
                .char_at((index + offset) % self.alphabet.len()),
            None => c,
        }
    }

    /// Decode `ciphertext` under every shift in `[0, alphabet.len())`.
    ///
    /// Returns all (shift, decoded) pairs in shift order, with no
    /// semantic filtering; the crack service decides which ones are
    /// plausible.
    pub fn brute_force(alphabet: &Alphabet, ciphertext: &str) -> Vec<(usize, String)> {
        (0..alphabet.len())
            .map(|shift| {
                let cipher = Self::new(alphabet.clone(), shift as i64);
                // Decryption under a fixed shift cannot fail
                let decrypted = cipher.decrypt(ciphertext).unwrap_or_default();
                (shift, decrypted)
            })
            .collect()
    }
}

impl Cipher for CaesarCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(plaintext
            .chars()
            .map(|c| self.shift_char(c, self.shift))
            .collect())
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        // Shift backwards by adding the modular complement
        let back = self.alphabet.len() - self.shift;
        Ok(ciphertext
            .chars()
            .map(|c| self.shift_char(c, back % self.alphabet.len()))
            .collect())
    }

    fn name(&self) -> &str {
        "Caesar"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::loaders::charsets::load_alphabet;

    const PLAINTEXT: &str = "猫は泣いている";

    #[test]
    fn round_trip_common_shifts() {
        let alphabet = load_alphabet().unwrap();

        for shift in [3, 13, 25] {
            let cipher = CaesarCipher::new(alphabet.clone(), shift);
            let encrypted = cipher.encrypt(PLAINTEXT).unwrap();
            let decrypted = cipher.decrypt(&encrypted).unwrap();
            assert_eq!(decrypted, PLAINTEXT, "shift {shift}");
        }
    }

    #[test]
    fn shift_zero_is_identity() {
        let alphabet = load_alphabet().unwrap();
        let cipher = CaesarCipher::new(alphabet, 0);

        assert_eq!(cipher.encrypt(PLAINTEXT).unwrap(), PLAINTEXT);
    }

    #[test]
    fn shift_wraps_modulo_alphabet_length() {
        let alphabet = load_alphabet().unwrap();
        let len = alphabet.len() as i64;

        let plain = CaesarCipher::new(alphabet.clone(), 3);
        let wrapped = CaesarCipher::new(alphabet.clone(), len + 3);
        let negative = CaesarCipher::new(alphabet, -(len - 3));

        assert_eq!(
            plain.encrypt(PLAINTEXT).unwrap(),
            wrapped.encrypt(PLAINTEXT).unwrap()
        );
        assert_eq!(
            plain.encrypt(PLAINTEXT).unwrap(),
            negative.encrypt(PLAINTEXT).unwrap()
        );
    }

    #[test]
    fn latin_letters_shift_within_contiguous_block() {
        let alphabet = load_alphabet().unwrap();
        let cipher = CaesarCipher::new(alphabet, 3);

        assert_eq!(cipher.encrypt("abc").unwrap(), "def");
        assert_eq!(cipher.decrypt("def").unwrap(), "abc");
    }

    #[test]
    fn characters_outside_alphabet_pass_through() {
        let alphabet = load_alphabet().unwrap();
        let cipher = CaesarCipher::new(alphabet, 7);

        let encrypted = cipher.encrypt("猫!？ is ねこ").unwrap();
        assert!(encrypted.starts_with("猫!？"));
        assert_eq!(cipher.decrypt(&encrypted).unwrap(), "猫!？ is ねこ");
    }

    #[test]
    fn brute_force_covers_every_shift() {
        let alphabet = load_alphabet().unwrap();
        let cipher = CaesarCipher::new(alphabet.clone(), 42);
        let ciphertext = cipher.encrypt(PLAINTEXT).unwrap();

        let candidates = CaesarCipher::brute_force(&alphabet, &ciphertext);

        assert_eq!(candidates.len(), alphabet.len());
        assert_eq!(candidates[42], (42, PLAINTEXT.to_string()));
        // Shifts enumerate in order starting at the identity
        assert_eq!(candidates[0].0, 0);
        assert_eq!(candidates[0].1, ciphertext);
    }
}
