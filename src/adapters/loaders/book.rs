use std::path::Path;

use crate::core::errors::{KaidokuError, Result};

/// Read a reference text file for the book cipher.
///
/// The existence check lives here, before any cipher is constructed, so
/// a bad path surfaces as a configuration error up front.
pub fn read_book_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(KaidokuError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}
