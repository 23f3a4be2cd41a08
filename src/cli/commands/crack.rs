use std::path::Path;
use std::time::Duration;

use indicatif::ProgressBar;

use crate::adapters::loaders::{book, charsets};
use crate::adapters::oracle::gemini::GeminiOracle;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::ciphers::book::BookCipher;
use crate::core::ciphers::caesar::CaesarCipher;
use crate::core::ciphers::key::KeyCipher;
use crate::core::ciphers::transposition::TranspositionCipher;
use crate::core::errors::Result;
use crate::core::models::candidate::{CandidateCap, CrackHit};
use crate::core::services::crack_service::CrackService;

/// Execute the `kaidoku crack` command.
///
/// Runs Caesar and Transposition brute force, then XOR and Book
/// single-key validation, filtering every candidate through the
/// plausibility oracle. Configuration problems (missing book file,
/// missing API key) surface before any oracle traffic.
pub fn execute(
    ciphertext: &str,
    xor_key: Option<&str>,
    book_path: Option<&Path>,
    max_candidates: usize,
    max_key: Option<usize>,
    config_path: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let config = AppConfig::load(config_path)?;

    // Fail fast on configuration before any oracle round trips
    let book_path = book_path.unwrap_or(&config.defaults.book);
    let book_text = book::read_book_file(book_path)?;
    let xor_cipher = KeyCipher::new(xor_key.unwrap_or(&config.defaults.xor_key))?;
    let oracle = GeminiOracle::from_config(&config.oracle)?;

    let alphabet = charsets::load_alphabet()?;
    let service = CrackService::new(oracle);
    let cap = CandidateCap::from_cli(max_candidates);

    let mut hits: Vec<CrackHit> = Vec::new();

    let candidates = CaesarCipher::brute_force(&alphabet, ciphertext);
    if verbose {
        output::detail(&format!("Caesar: {} candidates", candidates.len()));
    }
    hits.extend(with_spinner("Trying Caesar shifts...", || {
        service.search("Caesar", &candidates, cap)
    }));

    let candidates = TranspositionCipher::brute_force(ciphertext, max_key);
    if verbose {
        output::detail(&format!("Transposition: {} candidates", candidates.len()));
    }
    hits.extend(with_spinner("Trying transposition columns...", || {
        service.search("Transposition", &candidates, cap)
    }));

    hits.extend(with_spinner("Trying the XOR key...", || {
        service.validate_single(&xor_cipher, ciphertext)
    })?);

    let book_cipher = BookCipher::new(&book_text);
    hits.extend(with_spinner("Trying the book cipher...", || {
        service.validate_single(&book_cipher, ciphertext)
    })?);

    if hits.is_empty() {
        output::warning("No plausible plaintext found.");
        return Ok(());
    }

    for hit in &hits {
        output::success(&format!("[{}] → {}", hit.method, hit.text));
    }
    Ok(())
}

/// Run a blocking phase behind a spinner.
fn with_spinner<T>(message: &'static str, f: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = f();
    spinner.finish_and_clear();
    result
}
