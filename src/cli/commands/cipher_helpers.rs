use std::path::Path;

use crate::adapters::loaders::{book, charsets};
use crate::cli::CipherKind;
use crate::config::app_config::AppConfig;
use crate::core::ciphers::book::BookCipher;
use crate::core::ciphers::caesar::CaesarCipher;
use crate::core::ciphers::key::KeyCipher;
use crate::core::ciphers::transposition::TranspositionCipher;
use crate::core::errors::{KaidokuError, Result};
use crate::core::traits::cipher::Cipher;

/// Build a cipher instance from CLI key material.
///
/// All key validation happens here, before any cipher work: numeric keys
/// for caesar/transposition, a non-empty string for xor, an existing
/// reference file for book.
pub fn build_cipher(
    kind: CipherKind,
    key: Option<&str>,
    book_path: Option<&Path>,
    config: &AppConfig,
) -> Result<Box<dyn Cipher>> {
    match kind {
        CipherKind::Caesar => {
            let shift = parse_numeric_key(kind, key)?;
            let alphabet = charsets::load_alphabet()?;
            Ok(Box::new(CaesarCipher::new(alphabet, shift)))
        }
        CipherKind::Transposition => {
            let columns = parse_numeric_key(kind, key)?;
            if columns < 1 {
                return Err(KaidokuError::InvalidKey {
                    detail: "transposition column count must be at least 1".into(),
                });
            }
            Ok(Box::new(TranspositionCipher::new(columns as usize)?))
        }
        CipherKind::Xor => {
            let key = key.ok_or_else(|| KaidokuError::InvalidKey {
                detail: "the xor cipher needs a key string".into(),
            })?;
            Ok(Box::new(KeyCipher::new(key)?))
        }
        CipherKind::Book => {
            let path = book_path.unwrap_or(&config.defaults.book);
            let text = book::read_book_file(path)?;
            Ok(Box::new(BookCipher::new(&text)))
        }
    }
}

/// Parse the integer key caesar and transposition require.
fn parse_numeric_key(kind: CipherKind, key: Option<&str>) -> Result<i64> {
    let name = match kind {
        CipherKind::Caesar => "caesar",
        CipherKind::Transposition => "transposition",
        _ => unreachable!("only caesar and transposition take numeric keys"),
    };
    let key = key.ok_or_else(|| KaidokuError::InvalidKey {
        detail: format!("the {name} cipher needs an integer key"),
    })?;
    key.parse().map_err(|_| KaidokuError::InvalidKey {
        detail: format!("the {name} cipher needs an integer key, got '{key}'"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caesar_requires_a_numeric_key() {
        let config = AppConfig::default();

        assert!(build_cipher(CipherKind::Caesar, Some("3"), None, &config).is_ok());
        assert!(build_cipher(CipherKind::Caesar, Some("abc"), None, &config).is_err());
        assert!(build_cipher(CipherKind::Caesar, None, None, &config).is_err());
    }

    #[test]
    fn transposition_rejects_non_positive_counts() {
        let config = AppConfig::default();

        assert!(build_cipher(CipherKind::Transposition, Some("4"), None, &config).is_ok());
        assert!(build_cipher(CipherKind::Transposition, Some("0"), None, &config).is_err());
        assert!(build_cipher(CipherKind::Transposition, Some("-2"), None, &config).is_err());
    }

    #[test]
    fn xor_requires_a_key_string() {
        let config = AppConfig::default();

        assert!(build_cipher(CipherKind::Xor, Some("secret"), None, &config).is_ok());
        assert!(build_cipher(CipherKind::Xor, Some(""), None, &config).is_err());
        assert!(build_cipher(CipherKind::Xor, None, None, &config).is_err());
    }

    #[test]
    fn book_requires_an_existing_reference_file() {
        let config = AppConfig::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.txt");
        std::fs::write(&path, "吾輩は猫である\n").unwrap();

        let cipher = build_cipher(CipherKind::Book, None, Some(&path), &config).unwrap();
        assert_eq!(cipher.name(), "Book");

        let missing = dir.path().join("missing.txt");
        assert!(build_cipher(CipherKind::Book, None, Some(&missing), &config).is_err());
    }
}
