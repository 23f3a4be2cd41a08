use std::collections::HashMap;

use crate::core::errors::{KaidokuError, Result};
use crate::core::models::charset_table::CharsetTable;

/// The fixed ordered alphabet the Caesar cipher substitutes over.
///
/// Built once from the charset table plus `a..=z` and `A..=Z`, then
/// immutable. Order defines substitution distance; duplicates would make
/// the substitution ambiguous and are rejected at construction.
#[derive(Debug, Clone)]
pub struct Alphabet {
    chars: Vec<char>,
    index: HashMap<char, usize>,
}

impl Alphabet {
    /// Build the alphabet from a charset table.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if any character appears twice across the subsets
    /// or the Latin tail.
    pub fn from_table(table: &CharsetTable) -> Result<Self> {
        let mut chars = Vec::new();
        for subset in table.subsets() {
            chars.extend(subset.chars());
        }
        chars.extend('a'..='z');
        chars.extend('A'..='Z');

        let mut index = HashMap::with_capacity(chars.len());
        for (i, &c) in chars.iter().enumerate() {
            if index.insert(c, i).is_some() {
                return Err(KaidokuError::InvalidConfig {
                    detail: format!("duplicate character '{c}' in charset table"),
                });
            }
        }

        Ok(Self { chars, index })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Position of `c` in the alphabet, if it is a member.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.index.get(&c).copied()
    }

    /// Character at position `i`. Panics if out of range; callers only
    /// pass indices already reduced modulo `len()`.
    pub fn char_at(&self, i: usize) -> char {
        self.chars[i]
    }
}
