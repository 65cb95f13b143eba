//! Curated known-risk additives. The table is immutable after construction
//! and injected into the aggregator, so tests can swap it out.

use crate::models::Safety;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct RiskTable {
    entries: HashMap<String, Safety>,
}

impl Default for RiskTable {
    fn default() -> Self {
        let mut entries = HashMap::new();
        // Nitrites / nitrates
        for code in ["e249", "e250", "e251", "e252"] {
            entries.insert(code.to_string(), Safety::HighRisk);
        }
        // Titanium dioxide (banned in the EU), BHA/BHT, potassium bromate
        for code in ["e171", "e320", "e321", "e924"] {
            entries.insert(code.to_string(), Safety::HighRisk);
        }
        // MSG, aspartame/acesulfame K, azo colors, sulfur dioxide,
        // sodium benzoate
        for code in ["e621", "e950", "e951", "e102", "e129", "e133", "e220", "e211"] {
            entries.insert(code.to_string(), Safety::Caution);
        }
        Self { entries }
    }
}

#[derive(Deserialize)]
struct RiskTableFile {
    #[serde(default)]
    entries: HashMap<String, Safety>,
}

impl RiskTable {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: &str, tier: Safety) {
        self.entries.insert(key.to_lowercase(), tier);
    }

    /// Look up by code first, then by canonical name. Keys are lowercase.
    pub fn lookup(&self, code: Option<&str>, name: &str) -> Option<Safety> {
        code.and_then(|c| self.entries.get(&c.to_lowercase()))
            .or_else(|| self.entries.get(&name.to_lowercase()))
            .copied()
    }

    /// Layer entries from a TOML file over the current table.
    ///
    /// ```toml
    /// [entries]
    /// e999 = "high-risk"
    /// "quinoline yellow" = "caution"
    /// ```
    pub fn with_overrides_from(mut self, path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let file: RiskTableFile = toml::from_str(&content)?;
        for (key, tier) in file.entries {
            self.entries.insert(key.to_lowercase(), tier);
        }
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
