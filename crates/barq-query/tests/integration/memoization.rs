//! Cache behavior of the views as the fleet store changes underneath.

use std::sync::Arc;

use barq_core::{Payment, PaymentStatus, ResponsibleParty, VesselRecord, VesselStatus};
use barq_query::{FilterCriteria, PaymentCriteria};
use chrono::NaiveDate;

use crate::common::TestHarness;

// ----------------------------------------------------------------------------
// Vessel views
// ----------------------------------------------------------------------------

#[test]
fn test_unrelated_changes_keep_vessel_views() {
    let mut harness = TestHarness::with_two_vessels();
    let criteria = FilterCriteria::default().with_port("Agadir");

    let all = harness.vessels.select_all(harness.fleet.vessels());
    let filtered = harness
        .vessels
        .select_filtered(harness.fleet.vessels(), &criteria);

    harness
        .fleet
        .upsert_party(ResponsibleParty::new("g1", "Ahmed Benali"))
        .unwrap();
    harness.fleet.begin_loading();
    harness.fleet.finish_loading();
    harness.fleet.set_known_ports(["Safi"]);

    let all_again = harness.vessels.select_all(harness.fleet.vessels());
    let filtered_again = harness
        .vessels
        .select_filtered(harness.fleet.vessels(), &criteria);

    assert!(Arc::ptr_eq(&all, &all_again));
    assert!(Arc::ptr_eq(&filtered, &filtered_again));
}

#[test]
fn test_equal_criteria_values_share_result() {
    let harness = TestHarness::with_two_vessels();
    let first = FilterCriteria::default().with_search("etoile");
    let second = FilterCriteria::default().with_search("etoile");

    let a = harness.vessels.select_filtered(harness.fleet.vessels(), &first);
    let b = harness.vessels.select_filtered(harness.fleet.vessels(), &second);

    assert!(Arc::ptr_eq(&a, &b));
    let stats = harness.vessels.stats();
    assert_eq!(stats.filtered.misses, 1);
    assert_eq!(stats.filtered.hits, 1);
}

#[test]
fn test_vessel_edit_invalidates_views() {
    let mut harness = TestHarness::with_two_vessels();
    let inactive = FilterCriteria::default().with_status("inactive");

    let before = harness
        .vessels
        .select_filtered(harness.fleet.vessels(), &inactive);
    assert_eq!(before.len(), 1);

    harness
        .fleet
        .upsert_vessel(
            VesselRecord::new("1", "Etoile")
                .with_port("Casablanca")
                .with_status(VesselStatus::Inactive),
        )
        .unwrap();

    let after = harness
        .vessels
        .select_filtered(harness.fleet.vessels(), &inactive);
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(after.len(), 2);
}

#[test]
fn test_removing_unknown_vessel_keeps_views() {
    let mut harness = TestHarness::with_two_vessels();
    let ports = harness.vessels.select_ports(harness.fleet.vessels());

    assert!(harness.fleet.remove_vessel("missing").is_none());

    let ports_again = harness.vessels.select_ports(harness.fleet.vessels());
    assert!(Arc::ptr_eq(&ports, &ports_again));
}

#[test]
fn test_removing_vessel_updates_ports() {
    let mut harness = TestHarness::with_two_vessels();
    let before = harness.vessels.select_ports(harness.fleet.vessels());
    assert_eq!(before.len(), 2);

    harness.fleet.remove_vessel("2").unwrap();

    let after = harness.vessels.select_ports(harness.fleet.vessels());
    let after: Vec<&str> = after.iter().map(String::as_str).collect();
    assert_eq!(after, vec!["Casablanca"]);
}

// ----------------------------------------------------------------------------
// Payment views
// ----------------------------------------------------------------------------

#[test]
fn test_vessel_changes_keep_payment_views() {
    let mut harness = TestHarness::with_two_vessels();
    let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    harness
        .fleet
        .load_payments([
            Payment::new("p1", "1", 500, day).with_status(PaymentStatus::Completed),
            Payment::new("p2", "2", 700, day).with_status(PaymentStatus::Failed),
        ])
        .unwrap();

    let criteria = PaymentCriteria::default().for_vessel("1");
    let before = harness
        .payments
        .select_filtered(harness.fleet.payments(), &criteria);

    harness
        .fleet
        .upsert_vessel(VesselRecord::new("3", "Mistral"))
        .unwrap();

    let after = harness
        .payments
        .select_filtered(harness.fleet.payments(), &criteria);
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(
        harness
            .payments
            .select_total(harness.fleet.payments(), &criteria),
        500
    );
}
