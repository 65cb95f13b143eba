use additive_core::classifier::{classify_origin, extract_dosage, scan_safety};
use additive_core::models::{Origin, Safety};

#[test]
fn synthetic_keywords_win_over_natural() {
    let text = "Derived from petroleum, though some grades are plant-extracted.";
    assert_eq!(classify_origin(text), Origin::Synthetic);
}

#[test]
fn natural_keywords_classify_natural() {
    let text = "Commonly extracted from citrus fruit via fermentation.";
    assert_eq!(classify_origin(text), Origin::Natural);
}

#[test]
fn partial_words_do_not_match() {
    // "implant" contains "plant", "label" contains "lab".
    assert_eq!(
        classify_origin("Used in dental implant cements."),
        Origin::Unknown
    );
    assert_eq!(
        classify_origin("Listed on the label of many products."),
        Origin::Unknown
    );
}

#[test]
fn origin_matching_is_case_insensitive() {
    assert_eq!(classify_origin("PETROLEUM derivative"), Origin::Synthetic);
}

#[test]
fn empty_text_is_unknown_everywhere() {
    assert_eq!(classify_origin(""), Origin::Unknown);
    assert_eq!(classify_origin("   "), Origin::Unknown);
    assert_eq!(scan_safety(""), None);
    assert_eq!(extract_dosage(""), None);
}

#[test]
fn safety_scan_tiers() {
    assert_eq!(
        scan_safety("Classified as a carcinogen by IARC."),
        Some(Safety::HighRisk)
    );
    assert_eq!(
        scan_safety("May cause hyperactivity in some children."),
        Some(Safety::Caution)
    );
    assert_eq!(
        scan_safety("It is generally recognized as safe."),
        Some(Safety::Safe)
    );
    assert_eq!(scan_safety("A colorless crystalline powder."), None);
}

#[test]
fn high_risk_terms_outrank_caution_terms() {
    let text = "Linked to hyperactivity and banned in several countries.";
    assert_eq!(scan_safety(text), Some(Safety::HighRisk));
}

#[test]
fn adi_clause_is_extracted_verbatim() {
    let text = "After review, an ADI of 40 mg/kg was established for this compound.";
    let dosage = extract_dosage(text).unwrap();
    assert!(dosage.contains("40 mg/kg"), "got {dosage:?}");
}

#[test]
fn plain_quantity_with_unit_is_extracted() {
    let text = "Typical exposure stays below 5 mg/kg body weight per day.";
    let dosage = extract_dosage(text).unwrap();
    assert!(dosage.contains("5 mg/kg"), "got {dosage:?}");
}

#[test]
fn ld50_clause_is_extracted() {
    let text = "The oral LD50 in rats is approximately 3000 mg/kg.";
    let dosage = extract_dosage(text).unwrap();
    assert!(dosage.to_lowercase().contains("ld50"), "got {dosage:?}");
    assert!(dosage.contains("3000"), "got {dosage:?}");
}

#[test]
fn first_dosage_span_wins() {
    let text = "An ADI of 10 mg/kg applies; older studies cite 50 mg/kg.";
    let dosage = extract_dosage(text).unwrap();
    assert!(dosage.contains("10 mg/kg"), "got {dosage:?}");
}

#[test]
fn text_without_dosage_yields_none() {
    assert_eq!(
        extract_dosage("A widely used preservative with a long history."),
        None
    );
}
