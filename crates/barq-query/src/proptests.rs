//! Property-based tests for the derived views.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use crate::criteria::FilterCriteria;
    use crate::vessels::VesselViews;
    use barq_core::{VesselRecord, VesselStatus};
    use barq_store::Collection;
    use proptest::prelude::*;

    const PORTS: [&str; 3] = ["Agadir", "Casablanca", "Safi"];
    // Stored ports may carry padding or be missing altogether.
    const STORED_PORTS: [&str; 5] = ["Agadir", "Casablanca", "Safi", " Agadir", ""];
    const GERANTS: [&str; 2] = ["g1", "g2"];

    fn vessel_strategy() -> impl Strategy<Value = VesselRecord> {
        (
            "[0-9]{1,3}",
            "[A-Za-z]{1,8}",
            prop::option::of((1u8..=4, 0u32..500)),
            prop::sample::select(STORED_PORTS.to_vec()),
            any::<bool>(),
            prop::option::of(prop::sample::select(GERANTS.to_vec())),
        )
            .prop_map(|(id, name, registration, port, active, gerant)| {
                let mut vessel = VesselRecord::new(id, name).with_port(port).with_status(
                    if active {
                        VesselStatus::Active
                    } else {
                        VesselStatus::Inactive
                    },
                );
                if let Some((district, serial)) = registration {
                    vessel = vessel.with_registration(format!("10/{district}-{serial}"));
                }
                if let Some(gerant) = gerant {
                    vessel = vessel.with_gerant(gerant);
                }
                vessel
            })
    }

    fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
        (
            prop::option::of("[a-z0-9/-]{1,3}"),
            prop::option::of(prop::sample::select(PORTS.to_vec())),
            prop::option::of(prop::sample::select(vec!["active", "inactive"])),
            prop::option::of(prop::sample::select(GERANTS.to_vec())),
        )
            .prop_map(|(search, port, status, gerant)| FilterCriteria {
                search: search.unwrap_or_default(),
                port: port.unwrap_or_default().to_string(),
                status: status.unwrap_or_default().to_string(),
                gerant_id: gerant.unwrap_or_default().to_string(),
            })
    }

    fn collection(vessels: Vec<VesselRecord>) -> Collection<VesselRecord> {
        let mut collection = Collection::new();
        collection.load(vessels).unwrap();
        collection
    }

    proptest! {
        #[test]
        fn test_unconstrained_equals_select_all(vessels in prop::collection::vec(vessel_strategy(), 0..30)) {
            let collection = collection(vessels);
            let views = VesselViews::new();
            let all = views.select_all(&collection);
            let filtered = views.select_filtered(&collection, &FilterCriteria::default());
            prop_assert_eq!(&*all, &*filtered);
        }

        #[test]
        fn test_filtered_is_idempotent(
            vessels in prop::collection::vec(vessel_strategy(), 0..30),
            criteria in criteria_strategy(),
        ) {
            let collection = collection(vessels);
            let views = VesselViews::new();
            let a = views.select_filtered(&collection, &criteria);
            let b = views.select_filtered(&collection, &criteria.clone());
            prop_assert!(Arc::ptr_eq(&a, &b));
        }

        #[test]
        fn test_adding_constraint_never_grows_result(
            vessels in prop::collection::vec(vessel_strategy(), 0..30),
            criteria in criteria_strategy(),
            extra in criteria_strategy(),
        ) {
            let collection = collection(vessels);
            let views = VesselViews::new();
            let base = views.select_filtered(&collection, &criteria);

            let mut narrowed = criteria.clone();
            if narrowed.search.is_empty() { narrowed.search = extra.search; }
            if narrowed.port.is_empty() { narrowed.port = extra.port; }
            if narrowed.status.is_empty() { narrowed.status = extra.status; }
            if narrowed.gerant_id.is_empty() { narrowed.gerant_id = extra.gerant_id; }

            let narrower = views.select_filtered(&collection, &narrowed);
            prop_assert!(narrower.len() <= base.len());
            for vessel in narrower.iter() {
                prop_assert!(base.iter().any(|v| v.id == vessel.id));
            }
        }

        #[test]
        fn test_filtered_preserves_collection_order(
            vessels in prop::collection::vec(vessel_strategy(), 0..30),
            criteria in criteria_strategy(),
        ) {
            let collection = collection(vessels);
            let views = VesselViews::new();
            let filtered = views.select_filtered(&collection, &criteria);

            let expected: Vec<&VesselRecord> = collection
                .iter()
                .filter(|v| criteria.predicate().matches(v))
                .collect();
            let actual: Vec<&VesselRecord> = filtered.iter().collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn test_every_listed_port_selects_a_vessel(
            vessels in prop::collection::vec(vessel_strategy(), 0..30),
        ) {
            let collection = collection(vessels);
            let views = VesselViews::new();
            for port in views.select_ports(&collection).iter() {
                let criteria = FilterCriteria::default().with_port(port);
                prop_assert!(!views.select_filtered(&collection, &criteria).is_empty());
            }
        }

        #[test]
        fn test_select_by_id_absent_is_none(
            vessels in prop::collection::vec(vessel_strategy(), 0..20),
        ) {
            let collection = collection(vessels);
            let views = VesselViews::new();
            prop_assert!(views.select_by_id(&collection, "not-an-id").is_none());
        }
    }
}
