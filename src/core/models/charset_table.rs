use serde::Deserialize;

/// The fixed character-set table backing the Caesar alphabet.
///
/// Deserialized from the embedded `material/charsets.json` resource.
/// Subset order matters: the alphabet concatenates them in field order,
/// then appends the 52 basic Latin letters.
#[derive(Debug, Clone, Deserialize)]
pub struct CharsetTable {
    pub hiragana: String,
    pub katakana: String,
    pub numbers: String,
    pub choon: String,
}

impl CharsetTable {
    /// The subsets in alphabet order.
    pub fn subsets(&self) -> [&str; 4] {
        [&self.hiragana, &self.katakana, &self.numbers, &self.choon]
    }
}
