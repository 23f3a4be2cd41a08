use std::sync::OnceLock;

use regex::Regex;

use crate::core::errors::Result;
use crate::core::traits::cipher::Cipher;

/// Sentinel emitted when a plaintext character appears in no reference line.
const MISS_TOKEN: &str = "??-??";

/// Placeholder emitted when a ciphertext token cannot be resolved.
const UNKNOWN_CHAR: &str = "<?>";

static COORD_RE: OnceLock<Regex> = OnceLock::new();

fn coord_re() -> &'static Regex {
    COORD_RE.get_or_init(|| Regex::new(r"^(\d+)-(\d+)$").expect("valid coordinate regex"))
}

/// Book cipher: characters become `line-position` coordinates into a
/// reference text.
///
/// Lossy by contract. Encryption always picks the first occurrence in
/// the first matching line, and decryption joins recovered characters
/// with spaces, so encrypt→decrypt is not the identity on multi-character
/// plaintexts.
pub struct BookCipher {
    lines: Vec<String>,
}

impl BookCipher {
    pub fn new(book_text: &str) -> Self {
        Self {
            lines: book_text.lines().map(|l| l.to_string()).collect(),
        }
    }

    /// First `line-position` coordinate for `target`, both 1-indexed.
    /// Positions count characters, not bytes.
    fn find_coordinate(&self, target: char) -> Option<String> {
        for (line_idx, line) in self.lines.iter().enumerate() {
            if let Some(pos) = line.chars().position(|c| c == target) {
                return Some(format!("{}-{}", line_idx + 1, pos + 1));
            }
        }
        None
    }

    /// Resolve one coordinate token back to its character.
    fn resolve_token(&self, token: &str) -> Option<char> {
        let caps = coord_re().captures(token)?;
        let line_num: usize = caps[1].parse().ok()?;
        let char_num: usize = caps[2].parse().ok()?;

        let line = self.lines.get(line_num.checked_sub(1)?)?;
        line.chars().nth(char_num.checked_sub(1)?)
    }
}

impl Cipher for BookCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        let coordinates: Vec<String> = plaintext
            .chars()
            .map(|c| {
                self.find_coordinate(c)
                    .unwrap_or_else(|| MISS_TOKEN.to_string())
            })
            .collect();

        Ok(coordinates.join(" "))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let recovered: Vec<String> = ciphertext
            .split_whitespace()
            .map(|token| match self.resolve_token(token) {
                Some(c) => c.to_string(),
                None => UNKNOWN_CHAR.to_string(),
            })
            .collect();

        let joined = recovered.join(" ");
        // A lone placeholder means nothing was recovered at all
        if joined == UNKNOWN_CHAR {
            return Ok(String::new());
        }
        Ok(joined)
    }

    fn name(&self) -> &str {
        "Book"
    }
}
