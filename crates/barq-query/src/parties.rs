//! Responsible-party lookups.

use barq_core::ResponsibleParty;
use barq_store::FleetStore;

/// The responsible party with this identifier, or `None`.
pub fn select_party(fleet: &FleetStore, party_id: &str) -> Option<ResponsibleParty> {
    fleet.parties().get(party_id).cloned()
}

/// The responsible party of a vessel.
///
/// Returns `None` when the vessel does not exist, has no party, or
/// references a party that is not loaded.
pub fn select_party_for_vessel(fleet: &FleetStore, vessel_id: &str) -> Option<ResponsibleParty> {
    let gerant_id = fleet.vessels().get(vessel_id)?.gerant_id.as_deref()?;
    select_party(fleet, gerant_id)
}
