//! Keyword heuristics over description text. Pure functions, no I/O, so the
//! classification policy can be tested without mocking HTTP.

use crate::models::{Origin, Safety};
use once_cell::sync::Lazy;
use regex::Regex;

// The Synthetic set is checked before the Natural set; a text mentioning
// both classifies as Synthetic. That precedence is a tunable policy carried
// over from the keyword lists below, not a correctness requirement.
const SYNTHETIC_KEYWORDS: &[&str] = &[
    "petroleum",
    "artificial",
    "synthetic",
    "lab",
    "chemical synthesis",
    "coal tar",
];
const NATURAL_KEYWORDS: &[&str] = &[
    "plant",
    "extracted",
    "natural",
    "fruit",
    "vegetable",
    "fermentation",
    "animal",
    "vitamin",
    "mineral",
];

const HIGH_RISK_KEYWORDS: &[&str] = &[
    "carcinogen",
    "carcinogenic",
    "cancer",
    "banned",
    "toxic",
    "dna damage",
];
const CAUTION_KEYWORDS: &[&str] = &[
    "hyperactivity",
    "allergy",
    "asthma",
    "migraine",
    "intolerance",
];
const SAFE_KEYWORDS: &[&str] = &[
    "recognized as safe",
    "considered safe",
    "no adverse effects",
];

// Whole-keyword boundaries only, so "plant" does not fire inside "implant".
fn keyword_set(words: &[&str]) -> Regex {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).unwrap()
}

static SYNTHETIC_RE: Lazy<Regex> = Lazy::new(|| keyword_set(SYNTHETIC_KEYWORDS));
static NATURAL_RE: Lazy<Regex> = Lazy::new(|| keyword_set(NATURAL_KEYWORDS));
static HIGH_RISK_RE: Lazy<Regex> = Lazy::new(|| keyword_set(HIGH_RISK_KEYWORDS));
static CAUTION_RE: Lazy<Regex> = Lazy::new(|| keyword_set(CAUTION_KEYWORDS));
static SAFE_RE: Lazy<Regex> = Lazy::new(|| keyword_set(SAFE_KEYWORDS));

// A quantity bound to a per-weight unit, or an ADI/LD50 marker followed by
// its numeric clause. The first matching span in document order is returned
// verbatim.
static DOSAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:ADI|LD50)\b[^.;]{0,60}?\d+(?:\.\d+)?\s*(?:mg|g|µg|mcg)(?:\s*/\s*kg)?|\b\d+(?:\.\d+)?\s*(?:mg|g|µg|mcg)\s*/\s*kg\b(?:\s*(?:bw|body\s+weight|per\s+day|/day))?",
    )
    .unwrap()
});

/// Ordered keyword-set membership test over the description text.
pub fn classify_origin(text: &str) -> Origin {
    if text.trim().is_empty() {
        return Origin::Unknown;
    }
    if SYNTHETIC_RE.is_match(text) {
        Origin::Synthetic
    } else if NATURAL_RE.is_match(text) {
        Origin::Natural
    } else {
        Origin::Unknown
    }
}

/// Keyword scan for a safety verdict; `None` when the text is inconclusive
/// so the aggregator can fall through to the next rule.
pub fn scan_safety(text: &str) -> Option<Safety> {
    if text.trim().is_empty() {
        return None;
    }
    if HIGH_RISK_RE.is_match(text) {
        Some(Safety::HighRisk)
    } else if CAUTION_RE.is_match(text) {
        Some(Safety::Caution)
    } else if SAFE_RE.is_match(text) {
        Some(Safety::Safe)
    } else {
        None
    }
}

/// Extract the first dosage expression from the text, verbatim.
pub fn extract_dosage(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    DOSAGE_RE.find(text).map(|m| m.as_str().to_string())
}
