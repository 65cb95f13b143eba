use serde::{Deserialize, Serialize};

/// Safety tier of an additive. Serialized form matches the public record
/// contract ("safe" | "caution" | "high-risk" | "unknown").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Safety {
    Safe,
    Caution,
    #[serde(rename = "high-risk")]
    HighRisk,
    Unknown,
}

impl Safety {
    pub fn as_str(&self) -> &'static str {
        match self {
            Safety::Safe => "safe",
            Safety::Caution => "caution",
            Safety::HighRisk => "high-risk",
            Safety::Unknown => "unknown",
        }
    }
}

/// Whether the additive is plant/biologically derived or petrochemical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    Natural,
    Synthetic,
    Unknown,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Natural => "Natural",
            Origin::Synthetic => "Synthetic",
            Origin::Unknown => "Unknown",
        }
    }
}

/// Final merged verdict for one query. Every field is always populated;
/// missing provider data degrades to sentinel values instead of absent keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyRecord {
    pub e_number: String,
    pub name: String,
    pub safety: Safety,
    pub origin: Origin,
    pub description: String,
    pub dosage: String,
    pub verified: bool,
    pub image_url: String,
}
