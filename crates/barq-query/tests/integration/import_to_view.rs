//! Integration tests for the spreadsheet import path.

use barq_ingest::{CsvOptions, ImportOptions, import_rows, read_csv};
use barq_query::{FilterCriteria, PaymentCriteria, select_party_for_vessel};
use barq_core::{Payment, PaymentStatus, ResponsibleParty};
use chrono::NaiveDate;

use crate::common::{LOCALIZED_CSV, TestHarness};

fn import_localized(harness: &mut TestHarness) -> barq_ingest::ImportReport {
    let options = CsvOptions {
        delimiter: b';',
        ..Default::default()
    };
    let rows = read_csv(LOCALIZED_CSV.as_bytes(), &options).expect("fixture CSV should parse");
    let report = import_rows(rows, &ImportOptions::default());
    harness
        .fleet
        .accept_import(report.accepted.clone())
        .expect("accepted records satisfy invariants");
    report
}

#[test]
fn test_localized_csv_report() {
    let mut harness = TestHarness::new();
    let report = import_localized(&mut harness);

    assert_eq!(report.total(), 5);
    assert_eq!(report.accepted.len(), 3);

    let rejected: Vec<(usize, Vec<String>)> = report
        .rejected
        .iter()
        .map(|r| (r.row_number, r.messages()))
        .collect();
    assert_eq!(
        rejected,
        vec![
            (3, vec!["Name is required".to_string()]),
            (
                4,
                vec![
                    "Affiliation is required".to_string(),
                    "Registration number must match the format 10/N-NNN (N between 1 and 4)"
                        .to_string(),
                ]
            ),
        ]
    );
}

#[test]
fn test_imported_rows_are_searchable() {
    let mut harness = TestHarness::new();
    import_localized(&mut harness);
    let vessels = harness.fleet.vessels();

    let all = harness.vessels.select_all(vessels);
    let names: Vec<&str> = all.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Etoile", "Lune", "Mistral"]);

    let by_registration = harness
        .vessels
        .select_filtered(vessels, &FilterCriteria::default().with_search("10/4"));
    assert_eq!(by_registration.len(), 1);
    assert_eq!(by_registration[0].name, "Mistral");

    let for_g1 = harness
        .vessels
        .select_filtered(vessels, &FilterCriteria::default().with_gerant("g1"));
    assert_eq!(for_g1.len(), 2);
}

#[test]
fn test_imported_ports() {
    let mut harness = TestHarness::new();
    import_localized(&mut harness);

    let ports = harness.vessels.select_ports(harness.fleet.vessels());
    let ports: Vec<&str> = ports.iter().map(String::as_str).collect();
    assert_eq!(ports, vec!["Agadir", "Casablanca"]);
}

#[test]
fn test_party_and_payments_for_imported_vessel() {
    let mut harness = TestHarness::new();
    import_localized(&mut harness);
    harness
        .fleet
        .load_parties([ResponsibleParty::new("g1", "Ahmed Benali")])
        .unwrap();

    let etoile_id = harness
        .vessels
        .select_filtered(harness.fleet.vessels(), &FilterCriteria::default().with_search("etoile"))[0]
        .id
        .clone();

    let party = select_party_for_vessel(&harness.fleet, &etoile_id).expect("Etoile has a gérant");
    assert_eq!(party.full_name, "Ahmed Benali");

    let day = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    harness
        .fleet
        .load_payments([
            Payment::new("p1", etoile_id.clone(), 120_000, day).with_status(PaymentStatus::Completed),
            Payment::new("p2", etoile_id.clone(), 30_000, day),
            Payment::new("p3", "other", 99, day).with_status(PaymentStatus::Completed),
        ])
        .unwrap();

    let paid = harness.payments.select_total(
        harness.fleet.payments(),
        &PaymentCriteria::default()
            .for_vessel(etoile_id)
            .with_status("completed"),
    );
    assert_eq!(paid, 120_000);
}

#[test]
fn test_reimport_replaces_by_id() {
    let mut harness = TestHarness::new();
    harness
        .fleet
        .load_vessels(crate::common::two_vessels())
        .unwrap();

    let rows = vec![
        barq_ingest::ImportRow::new()
            .with("id", "2")
            .with("name", "Lune Rouge")
            .with("affiliation", "COOP-B")
            .with("immatriculation", "10/1-7")
            .with("port", "Agadir"),
    ];
    let report = import_rows(rows, &ImportOptions::default());
    harness.fleet.accept_import(report.accepted).unwrap();

    let lune = harness
        .vessels
        .select_by_id(harness.fleet.vessels(), "2")
        .unwrap();
    assert_eq!(lune.name, "Lune Rouge");
    assert_eq!(harness.fleet.vessels().len(), 2);
}
