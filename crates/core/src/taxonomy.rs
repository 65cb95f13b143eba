//! Autocomplete index over the known additive taxonomy. Built once at
//! startup, read-only afterwards; doubles as the name-to-code lookup used
//! by query normalization.

use providers::TaxonomyEntry;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    // Codes and display names in load order; suggest() preserves it.
    display: Vec<String>,
    code_by_key: HashMap<String, String>,
}

impl Taxonomy {
    pub fn from_entries(entries: impl IntoIterator<Item = TaxonomyEntry>) -> Self {
        let mut taxonomy = Self::default();
        for entry in entries {
            let code = entry.code.to_lowercase();
            taxonomy.display.push(code.clone());
            taxonomy.code_by_key.insert(code.clone(), code.clone());
            if let Some(name) = entry.name {
                taxonomy
                    .code_by_key
                    .insert(name.to_lowercase(), code.clone());
                taxonomy.display.push(name);
            }
        }
        taxonomy
    }

    /// Resolve a lowercase name or code to its E-code.
    pub fn code_for(&self, key: &str) -> Option<&str> {
        self.code_by_key.get(key).map(String::as_str)
    }

    /// Case-insensitive substring match against codes and names, in
    /// taxonomy order, capped at `limit`. Never fails; no match means an
    /// empty vec.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        let needle = prefix.trim().to_lowercase();
        self.display
            .iter()
            .filter(|entry| entry.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.display.len()
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }
}
