use additive_core::normalize::normalize;
use additive_core::taxonomy::Taxonomy;
use providers::TaxonomyEntry;

fn taxonomy() -> Taxonomy {
    Taxonomy::from_entries(vec![TaxonomyEntry {
        code: "e330".to_string(),
        name: Some("Citric Acid".to_string()),
    }])
}

#[test]
fn combined_form_splits_into_code_and_name() {
    let q = normalize("E330 - Citric Acid", &Taxonomy::default()).unwrap();
    assert_eq!(q.code.as_deref(), Some("e330"));
    assert_eq!(q.name, "citric acid");
}

#[test]
fn known_name_resolves_code_via_taxonomy() {
    let q = normalize("Citric Acid", &taxonomy()).unwrap();
    assert_eq!(q.code.as_deref(), Some("e330"));
    assert_eq!(q.name, "citric acid");
}

#[test]
fn bare_code_is_kept_as_code() {
    let q = normalize("e951", &Taxonomy::default()).unwrap();
    assert_eq!(q.code.as_deref(), Some("e951"));
}

#[test]
fn unknown_name_has_no_code() {
    let q = normalize("dragon fruit extract", &Taxonomy::default()).unwrap();
    assert_eq!(q.code, None);
    assert_eq!(q.name, "dragon fruit extract");
}

#[test]
fn whitespace_collapses_and_empty_is_rejected() {
    let q = normalize("  Citric\t  Acid  ", &Taxonomy::default()).unwrap();
    assert_eq!(q.name, "citric acid");
    assert!(normalize("   ", &Taxonomy::default()).is_none());
    assert!(normalize("", &Taxonomy::default()).is_none());
}
