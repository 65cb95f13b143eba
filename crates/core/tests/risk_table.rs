use additive_core::models::Safety;
use additive_core::risk_table::RiskTable;
use std::fs;
use tempfile::tempdir;

#[test]
fn default_table_contains_curated_entries() {
    let table = RiskTable::default();
    assert_eq!(table.lookup(Some("e250"), ""), Some(Safety::HighRisk));
    assert_eq!(table.lookup(Some("E171"), ""), Some(Safety::HighRisk));
    assert_eq!(table.lookup(Some("e621"), ""), Some(Safety::Caution));
    assert_eq!(table.lookup(Some("e330"), "citric acid"), None);
}

#[test]
fn lookup_falls_back_to_name() {
    let mut table = RiskTable::empty();
    table.insert("Potassium Bromate", Safety::HighRisk);
    assert_eq!(
        table.lookup(None, "potassium bromate"),
        Some(Safety::HighRisk)
    );
}

#[test]
fn toml_overrides_layer_on_top_of_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("risks.toml");
    fs::write(
        &path,
        r#"
[entries]
e999 = "high-risk"
e621 = "safe"
"#,
    )
    .unwrap();

    let table = RiskTable::default().with_overrides_from(&path).unwrap();
    assert_eq!(table.lookup(Some("e999"), ""), Some(Safety::HighRisk));
    // Override replaces the compiled-in tier.
    assert_eq!(table.lookup(Some("e621"), ""), Some(Safety::Safe));
    // Untouched defaults survive.
    assert_eq!(table.lookup(Some("e250"), ""), Some(Safety::HighRisk));
}
