//! Global ingredient substitute table.

use std::collections::HashMap;

use crate::normalizer::normalize_ingredient;

/// Maps a canonical ingredient to substitutes, most preferred first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubstituteTable {
    entries: HashMap<String, Vec<String>>,
}

impl SubstituteTable {
    /// Build a table from raw entries.
    ///
    /// Keys are normalized so that "Eggs" and "egg" land on the same entry.
    /// If two raw keys normalize to the same token, the first one wins.
    pub fn new<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut entries = HashMap::new();
        for (key, substitutes) in raw {
            let token = normalize_ingredient(&key);
            if token.is_empty() {
                tracing::debug!("Skipping substitute entry with empty key: {:?}", key);
                continue;
            }
            entries.entry(token).or_insert(substitutes);
        }
        Self { entries }
    }

    /// Ranked substitutes for an ingredient, or an empty slice if unknown.
    pub fn substitutes_for(&self, ingredient: &str) -> &[String] {
        let token = normalize_ingredient(ingredient);
        self.entries
            .get(&token)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// At most `limit` of the most preferred substitutes.
    pub fn top_substitutes(&self, ingredient: &str, limit: usize) -> &[String] {
        let all = self.substitutes_for(ingredient);
        &all[..all.len().min(limit)]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
