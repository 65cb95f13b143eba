//! Outbound query formatting shared by the provider clients.
//!
//! Users type things like "E330 - Citric Acid"; the upstream APIs reject
//! that form, so every client cleans its lookup key before the request.

use once_cell::sync::Lazy;
use regex::Regex;

// Leading E-code plus separator, e.g. "E330 - ", "e102_".
static CODE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[eE]\d+\s*[-\u{2013}_]\s*").unwrap());

/// Drop a leading "E330 - " style prefix and surrounding whitespace.
pub fn strip_code_prefix(name: &str) -> String {
    CODE_PREFIX.replace(name, "").trim().to_string()
}

/// Uppercase the first letter of each word.
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wikipedia page titles: code prefix stripped, Title Case, underscores.
pub fn wiki_title(name: &str) -> String {
    title_case(&strip_code_prefix(name)).replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_code_prefix_variants() {
        assert_eq!(strip_code_prefix("E330 - Citric Acid"), "Citric Acid");
        assert_eq!(strip_code_prefix("e102_tartrazine"), "tartrazine");
        assert_eq!(strip_code_prefix("citric acid"), "citric acid");
    }

    #[test]
    fn wiki_title_formats() {
        assert_eq!(wiki_title("E330 - citric acid"), "Citric_Acid");
        assert_eq!(wiki_title("sodium benzoate"), "Sodium_Benzoate");
    }
}
