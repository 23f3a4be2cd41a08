use std::path::Path;

use crate::cli::commands::cipher_helpers;
use crate::cli::{CipherKind, output};
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;

/// Execute the `kaidoku encrypt` command.
///
/// Builds the selected cipher from CLI key material and prints the
/// ciphertext on its own line.
pub fn execute(
    cipher: CipherKind,
    key: Option<&str>,
    book: Option<&Path>,
    text: &str,
    config_path: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let config = AppConfig::load(config_path)?;
    let cipher = cipher_helpers::build_cipher(cipher, key, book, &config)?;

    if verbose {
        output::header(&format!("Encrypting with {}", cipher.name()));
    }

    let result = cipher.encrypt(text)?;
    println!("{result}");
    Ok(())
}
