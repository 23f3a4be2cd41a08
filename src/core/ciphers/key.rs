use crate::core::errors::{KaidokuError, Result};
use crate::core::traits::cipher::Cipher;

/// Repeating-key XOR cipher over Unicode scalar values.
///
/// Symmetric: applying the same key twice restores the input, so
/// `decrypt` simply calls `encrypt`. XOR runs on scalar values rather
/// than bytes, so output may contain non-printable characters when the
/// key and input scripts differ.
#[derive(Debug)]
pub struct KeyCipher {
    key: Vec<char>,
}

impl KeyCipher {
    /// # Errors
    ///
    /// `InvalidKey` for an empty key string.
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(KaidokuError::InvalidKey {
                detail: "XOR key must not be empty".into(),
            });
        }
        Ok(Self {
            key: key.chars().collect(),
        })
    }
}

impl Cipher for KeyCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        plaintext
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let code = (c as u32) ^ (self.key[i % self.key.len()] as u32);
                // XOR can land in the surrogate range, which char cannot hold
                char::from_u32(code).ok_or(KaidokuError::UnrepresentableCodePoint { code })
            })
            .collect()
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        self.encrypt(ciphertext)
    }

    fn name(&self) -> &str {
        "XOR"
    }
}
