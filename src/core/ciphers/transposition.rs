use crate::core::errors::{KaidokuError, Result};
use crate::core::traits::cipher::Cipher;

/// Columnar transposition cipher.
///
/// The key is the column count of a logical grid: encryption writes the
/// plaintext row by row and reads it out column by column. A key of 1
/// is the identity and is excluded from brute force.
pub struct TranspositionCipher {
    key: usize,
}

impl TranspositionCipher {
    /// # Errors
    ///
    /// `InvalidKey` for a column count of 0.
    pub fn new(key: usize) -> Result<Self> {
        if key == 0 {
            return Err(KaidokuError::InvalidKey {
                detail: "transposition column count must be at least 1".into(),
            });
        }
        Ok(Self { key })
    }

    /// Decode `ciphertext` under every column count in `2..=max_key`.
    ///
    /// `max_key` defaults to `len(ciphertext) - 1`. A candidate whose
    /// decode fails is skipped, never fatal to the batch.
    pub fn brute_force(ciphertext: &str, max_key: Option<usize>) -> Vec<(usize, String)> {
        let char_count = ciphertext.chars().count();
        let max_key = max_key.unwrap_or(char_count.saturating_sub(1));

        (2..=max_key)
            .filter_map(|key| {
                let cipher = Self::new(key).ok()?;
                let decrypted = cipher.decrypt(ciphertext).ok()?;
                Some((key, decrypted))
            })
            .collect()
    }
}

impl Cipher for TranspositionCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        let chars: Vec<char> = plaintext.chars().collect();
        let mut columns = vec![String::new(); self.key];

        for (col, column) in columns.iter_mut().enumerate() {
            let mut pointer = col;
            while pointer < chars.len() {
                column.push(chars[pointer]);
                pointer += self.key;
            }
        }

        Ok(columns.concat())
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let chars: Vec<char> = ciphertext.chars().collect();
        let num_cols = self.key;
        let num_rows = chars.len().div_ceil(num_cols);
        // Grid cells the last (short) row never filled, on the rightmost columns
        let num_shaded = num_cols * num_rows - chars.len();

        let mut rows = vec![String::new(); num_rows];
        let mut col = 0;
        let mut row = 0;
        for &symbol in &chars {
            rows[row].push(symbol);
            row += 1;
            // Shaded columns run one row short; wrap to the next column early
            if row == num_rows || (row == num_rows - 1 && col >= num_cols - num_shaded) {
                row = 0;
                col += 1;
            }
        }

        Ok(rows.concat())
    }

    fn name(&self) -> &str {
        "Transposition"
    }
}
