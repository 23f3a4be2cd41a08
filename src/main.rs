mod adapters;
mod cli;
mod config;
mod core;

use std::path::Path;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();
    let config_path = args.config.as_deref().map(Path::new);

    let result = match &args.command {
        Commands::Encrypt {
            cipher,
            key,
            book,
            text,
        } => cli::commands::encrypt::execute(
            *cipher,
            key.as_deref(),
            book.as_deref(),
            text,
            config_path,
            args.verbose,
        ),
        Commands::Decrypt {
            cipher,
            key,
            book,
            text,
        } => cli::commands::decrypt::execute(
            *cipher,
            key.as_deref(),
            book.as_deref(),
            text,
            config_path,
            args.verbose,
        ),
        Commands::Crack {
            ciphertext,
            xor_key,
            book,
            max_candidates,
            max_key,
        } => cli::commands::crack::execute(
            ciphertext,
            xor_key.as_deref(),
            book.as_deref(),
            *max_candidates,
            *max_key,
            config_path,
            args.verbose,
        ),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
