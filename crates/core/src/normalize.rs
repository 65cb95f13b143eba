//! Raw query normalization: case-fold, collapse whitespace, and split
//! combined "E330 - Citric Acid" forms into code and name.

use crate::taxonomy::Taxonomy;
use once_cell::sync::Lazy;
use regex::Regex;

// "e330 - citric acid" / "e330 – citric acid" / "e330_citric acid"
static COMBINED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(e\d+)\s*[-\u{2013}_]\s*(.+)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    pub code: Option<String>,
    pub name: String,
}

/// Returns `None` for an empty (post-normalization) query; the aggregator
/// rejects those before any provider call.
pub fn normalize(raw: &str, taxonomy: &Taxonomy) -> Option<NormalizedQuery> {
    let clean = raw
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if clean.is_empty() {
        return None;
    }

    if let Some(caps) = COMBINED.captures(&clean) {
        return Some(NormalizedQuery {
            code: Some(caps[1].to_string()),
            name: caps[2].trim().to_string(),
        });
    }

    let code = taxonomy
        .code_for(&clean)
        .map(str::to_string)
        .or_else(|| looks_like_code(&clean).then(|| clean.clone()));

    Some(NormalizedQuery { code, name: clean })
}

fn looks_like_code(text: &str) -> bool {
    text.starts_with('e') && text.chars().any(|c| c.is_ascii_digit())
}
