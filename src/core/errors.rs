use std::path::PathBuf;

/// All domain errors for kaidoku.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum KaidokuError {
    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct and the file exists.\n  \
         The book cipher needs a readable reference text file."
    )]
    FileNotFound { path: PathBuf },

    #[error(
        "Invalid key: {detail}\n\n  \
         Expected key material:\n    \
         → caesar:        integer shift (e.g. --key 3)\n    \
         → transposition: column count >= 1 (e.g. --key 4)\n    \
         → xor:           non-empty string (e.g. --key abc123)\n    \
         → book:          reference text file (e.g. --book material/books/kokoro.txt)"
    )]
    InvalidKey { detail: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(
        "XOR produced the unrepresentable code point U+{code:04X}\n\n  \
         The key and input scripts are too far apart for a reversible\n  \
         character mapping. Pick a key closer to the input's script."
    )]
    UnrepresentableCodePoint { code: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KaidokuError>;
