//! Shared fixtures for the integration tests.

use barq_core::{VesselRecord, VesselStatus};
use barq_query::{PaymentViews, VesselViews};
use barq_store::FleetStore;

/// A fleet store with its views, as the console wires them up.
pub struct TestHarness {
    /// The store under test.
    pub fleet: FleetStore,
    /// Vessel views over `fleet`.
    pub vessels: VesselViews,
    /// Payment views over `fleet`.
    pub payments: PaymentViews,
}

impl TestHarness {
    /// Creates a harness with an empty store.
    pub fn new() -> Self {
        Self {
            fleet: FleetStore::new(),
            vessels: VesselViews::new(),
            payments: PaymentViews::new(),
        }
    }

    /// Creates a harness preloaded with [`two_vessels`].
    pub fn with_two_vessels() -> Self {
        let mut harness = Self::new();
        harness.fleet.load_vessels(two_vessels()).unwrap();
        harness
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Etoile in Casablanca (active) and Lune in Agadir (inactive).
pub fn two_vessels() -> Vec<VesselRecord> {
    vec![
        VesselRecord::new("1", "Etoile")
            .with_port("Casablanca")
            .with_status(VesselStatus::Active),
        VesselRecord::new("2", "Lune")
            .with_port("Agadir")
            .with_status(VesselStatus::Inactive),
    ]
}

/// A spreadsheet export using the French template headers and `;`.
pub const LOCALIZED_CSV: &str = "\
Nom de la barque;Affiliation;Immatriculation;Port d'attache;Statut;Gérant
Etoile;COOP-A;10/2-345;Casablanca;active;g1
Lune;COOP-B;10/1-7;Agadir;inactive;
;COOP-C;10/3-8;Safi;active;g2
Sirocco;;11/2-1;Safi;;
Mistral;COOP-A;10/4-99;Agadir;;g1
";
