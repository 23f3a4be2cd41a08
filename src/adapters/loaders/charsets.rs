use crate::core::errors::{KaidokuError, Result};
use crate::core::models::alphabet::Alphabet;
use crate::core::models::charset_table::CharsetTable;

/// The charset table resource, compiled into the binary so kaidoku works
/// from any working directory.
const CHARSETS_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/material/charsets.json"));

/// Load the character-set table from the embedded resource.
pub fn load_charsets() -> Result<CharsetTable> {
    serde_json::from_str(CHARSETS_JSON).map_err(|e| KaidokuError::InvalidConfig {
        detail: format!("Failed to parse charsets.json: {e}"),
    })
}

/// Load the full Caesar alphabet: charset subsets plus Latin letters.
pub fn load_alphabet() -> Result<Alphabet> {
    let table = load_charsets()?;
    Alphabet::from_table(&table)
}
