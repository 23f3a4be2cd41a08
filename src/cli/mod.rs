pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Classical cipher toolkit: encrypt, decrypt and crack.
#[derive(Parser, Debug)]
#[command(name = "kaidoku", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to alternative config file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt text with one cipher variant
    Encrypt {
        /// Cipher variant
        #[arg(long, value_enum)]
        cipher: CipherKind,

        /// Key material: integer shift (caesar), column count
        /// (transposition) or key string (xor)
        #[arg(long)]
        key: Option<String>,

        /// Reference text file for the book cipher
        #[arg(long)]
        book: Option<PathBuf>,

        /// Text to process
        text: String,
    },

    /// Decrypt text with one cipher variant
    Decrypt {
        /// Cipher variant
        #[arg(long, value_enum)]
        cipher: CipherKind,

        /// Key material: integer shift (caesar), column count
        /// (transposition) or key string (xor)
        #[arg(long)]
        key: Option<String>,

        /// Reference text file for the book cipher
        #[arg(long)]
        book: Option<PathBuf>,

        /// Text to process
        text: String,
    },

    /// Search ciphertext for plausible plaintexts: brute force plus an
    /// LLM plausibility oracle
    Crack {
        /// Ciphertext to crack
        ciphertext: String,

        /// Key tried for XOR single-key validation
        #[arg(long)]
        xor_key: Option<String>,

        /// Reference text file for the book cipher
        #[arg(long)]
        book: Option<PathBuf>,

        /// Accepted results kept per brute-force run (0 = unlimited)
        #[arg(long, default_value_t = 0)]
        max_candidates: usize,

        /// Upper bound for the transposition key space
        /// (default: ciphertext length - 1)
        #[arg(long)]
        max_key: Option<usize>,
    },
}

/// The cipher variant, selected at the call site.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CipherKind {
    Caesar,
    Xor,
    Transposition,
    Book,
}
