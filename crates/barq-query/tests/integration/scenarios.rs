//! End-to-end scenarios for searching and promoting vessels.

use barq_ingest::{ImportOptions, ImportRow, promote, validate};
use barq_query::FilterCriteria;
use serde_json::json;

use crate::common::TestHarness;

#[test]
fn test_search_lun_returns_only_lune() {
    let harness = TestHarness::with_two_vessels();
    let criteria = FilterCriteria::from_json(json!({
        "search": "lun",
        "port": "",
        "status": "",
        "gerantId": ""
    }))
    .expect("criteria should parse");

    let result = harness
        .vessels
        .select_filtered(harness.fleet.vessels(), &criteria);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "2");
    assert_eq!(result[0].name, "Lune");
}

#[test]
fn test_status_filter_uses_lowercase_names() {
    let harness = TestHarness::with_two_vessels();
    let criteria = FilterCriteria::default().with_status("inactive");

    let result = harness
        .vessels
        .select_filtered(harness.fleet.vessels(), &criteria);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "2");
}

#[test]
fn test_minimal_valid_row_promotes() {
    let row = ImportRow::from_json(json!({
        "affiliation": "X",
        "immatriculation": "10/2-7",
        "name": "Test"
    }))
    .unwrap();

    assert!(validate(&row).is_empty());

    let mut harness = TestHarness::new();
    let record = promote(&row, &ImportOptions::default()).expect("row should promote");
    let id = record.id.clone();
    harness.fleet.upsert_vessel(record).unwrap();

    let found = harness
        .vessels
        .select_by_id(harness.fleet.vessels(), &id)
        .expect("promoted vessel should be findable");
    assert_eq!(found.name, "Test");
    assert_eq!(found.registration.as_deref(), Some("10/2-7"));
}

#[test]
fn test_lookup_of_unknown_id_is_none() {
    let harness = TestHarness::with_two_vessels();
    assert!(
        harness
            .vessels
            .select_by_id(harness.fleet.vessels(), "does-not-exist")
            .is_none()
    );
}

#[test]
fn test_empty_store_views_are_empty() {
    let harness = TestHarness::new();
    let vessels = harness.fleet.vessels();

    assert!(harness.vessels.select_all(vessels).is_empty());
    assert!(
        harness
            .vessels
            .select_filtered(vessels, &FilterCriteria::default().with_search("x"))
            .is_empty()
    );
    assert!(harness.vessels.select_ports(vessels).is_empty());
    assert!(harness.fleet.status().is_idle());
}

#[test]
fn test_duplicate_load_keeps_last() {
    let mut harness = TestHarness::new();
    let mut records = crate::common::two_vessels();
    records.push(barq_core::VesselRecord::new("1", "Etoile Neuve").with_port("Safi"));
    harness.fleet.load_vessels(records).unwrap();

    let all = harness.vessels.select_all(harness.fleet.vessels());
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Etoile Neuve");
    assert_eq!(all[1].name, "Lune");
}
