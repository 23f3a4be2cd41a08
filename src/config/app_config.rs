use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::errors::{KaidokuError, Result};

/// Default config file looked up in the working directory.
const CONFIG_FILE: &str = "kaidoku.toml";

/// Top-level kaidoku configuration.
///
/// Every field has a default, so the tool runs with no config file at
/// all; `kaidoku.toml` (or a `--config` path) overrides selectively.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub oracle: OracleSection,
    pub defaults: DefaultsSection,
}

impl AppConfig {
    /// Load the configuration.
    ///
    /// An explicit `path` must exist and parse. With no explicit path,
    /// a missing `kaidoku.toml` just means built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(KaidokuError::FileNotFound {
                        path: p.to_path_buf(),
                    });
                }
                p.to_path_buf()
            }
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&config_path)?;
        toml::from_str(&content).map_err(|e| KaidokuError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", config_path.display()),
        })
    }
}

/// The `[oracle]` section: how to reach the plausibility oracle.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OracleSection {
    /// Gemini model used for the yes/no judgement.
    pub model: String,
    /// Per-call timeout in seconds.
    pub timeout_secs: u64,
    /// Environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for OracleSection {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            timeout_secs: 10,
            api_key_env: "GEMINI_API_KEY".to_string(),
        }
    }
}

/// The `[defaults]` section: fallback key material for `crack`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DefaultsSection {
    /// Reference text for the book cipher.
    pub book: PathBuf,
    /// Key tried for XOR single-key validation.
    pub xor_key: String,
}

impl Default for DefaultsSection {
    fn default() -> Self {
        Self {
            book: PathBuf::from("material/books/kokoro.txt"),
            xor_key: "abc123".to_string(),
        }
    }
}
