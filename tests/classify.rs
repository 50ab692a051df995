//! Tests for keyword tables and classification.
use flownorm::classify::defaults;
use flownorm::prelude::*;

fn kylar_table() -> MappingTable {
    MappingTable::new(
        vec![
            MappingEntry::new("kylar", "A1", "G1"),
            MappingEntry::new("kyl", "A2", "G2"),
        ],
        Classification::new("fallback", "Fallback"),
    )
}

#[test]
fn test_first_match_wins() {
    let table = kylar_table();
    assert_eq!(
        classify("Visa Kylar", &table),
        Classification::new("A1", "G1")
    );
    assert_eq!(classify("kylrum", &table), Classification::new("A2", "G2"));

    let reversed = MappingTable::new(
        table.entries.iter().rev().cloned().collect(),
        table.fallback.clone(),
    );
    assert_eq!(
        classify("Visa Kylar", &reversed),
        Classification::new("A2", "G2")
    );
}

#[test]
fn test_matching_is_case_insensitive() {
    let table = kylar_table();
    assert_eq!(table.classify("KYLAR"), Classification::new("A1", "G1"));

    let upper_keyword = MappingTable::new(
        vec![MappingEntry::new("Frysar", "showFrysar", "Frysar")],
        Classification::new("unknown", "Unknown"),
    );
    assert_eq!(upper_keyword.classify("alla frysar").action, "showFrysar");
}

#[test]
fn test_fallback_when_nothing_matches() {
    let table = kylar_table();
    assert_eq!(table.classify("pump"), table.fallback);
    assert_eq!(table.classify(""), table.fallback);
    assert!(table.lookup("pump").is_none());
}

#[test]
fn test_classify_first_tries_candidates_in_order() {
    let table = defaults::button_table();

    // The label does not match, so the name decides.
    let c = table.classify_first(["Öppna", "Larm"]);
    assert_eq!(c, Classification::new("showAlarms", "Alarms"));

    // The label matches, so the name is never consulted.
    let c = table.classify_first(["Visa Kylar", "Larm"]);
    assert_eq!(c, Classification::new("showKylar", "Kylar"));

    let c = table.classify_first(std::iter::empty());
    assert_eq!(c, Classification::new("unknown", "Unknown"));
}

#[test]
fn test_default_tables_use_distinct_fallbacks() {
    assert_eq!(
        defaults::button_table().fallback,
        Classification::new("unknown", "Unknown")
    );
    assert_eq!(
        defaults::processing_table().fallback,
        Classification::new("processData", "Data")
    );
    assert_eq!(
        defaults::emitter_table().fallback,
        Classification::new("processData", "Data")
    );
}

#[test]
fn test_default_tables_order_specific_phrases_first() {
    let emitters = defaults::emitter_table();
    assert_eq!(
        emitters.classify("Fake freq maskin 1"),
        Classification::new("updateMachine", "Machines")
    );
    assert_eq!(
        emitters.classify("Visa maskiner"),
        Classification::new("showMachines", "Machines")
    );

    let processing = defaults::processing_table();
    assert_eq!(
        processing.classify("Get Alarms"),
        Classification::new("showAlarms", "Alarms")
    );
    assert_eq!(
        processing.classify("Hämta data"),
        Classification::new("getData", "Data")
    );
    assert_eq!(
        processing.classify("Format payload"),
        Classification::new("processData", "Data")
    );
}

#[test]
fn test_non_ascii_keywords_match() {
    let buttons = defaults::button_table();
    assert_eq!(
        buttons.classify("SERVICELÄGE"),
        Classification::new("toggleService", "Service")
    );
    assert_eq!(
        buttons.classify("Ändra börvärde"),
        Classification::new("setSetpoint", "Controllers")
    );
}

#[test]
fn test_empty_keyword_never_matches() {
    let table = MappingTable::new(
        vec![MappingEntry::new("", "everything", "All")],
        Classification::new("none", "None"),
    );
    assert_eq!(table.classify("anything"), Classification::new("none", "None"));
}

#[test]
fn test_classification_display() {
    assert_eq!(
        Classification::new("showKylar", "Kylar").to_string(),
        "showKylar → Kylar"
    );
}
