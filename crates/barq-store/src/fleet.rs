//! The fleet-wide store.

use std::collections::BTreeSet;

use barq_core::{Payment, ResponsibleParty, Result, VesselRecord};

use crate::collection::Collection;
use crate::status::LoadStatus;

/// Every collection the console works with, plus fetch status and
/// loaded metadata.
///
/// External collaborators write through the methods below; views only
/// ever receive shared references.
#[derive(Debug, Default)]
pub struct FleetStore {
    vessels: Collection<VesselRecord>,
    parties: Collection<ResponsibleParty>,
    payments: Collection<Payment>,
    known_ports: BTreeSet<String>,
    status: LoadStatus,
}

impl FleetStore {
    /// Creates an empty store with idle status.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    /// Vessel collection.
    pub fn vessels(&self) -> &Collection<VesselRecord> {
        &self.vessels
    }

    /// Responsible-party collection.
    pub fn parties(&self) -> &Collection<ResponsibleParty> {
        &self.parties
    }

    /// Payment collection.
    pub fn payments(&self) -> &Collection<Payment> {
        &self.payments
    }

    /// Ports supplied by the backend as reference data, sorted.
    ///
    /// This is metadata, independent of the ports actually used by
    /// vessels (see `VesselViews::select_ports` in `barq-query`).
    pub fn known_ports(&self) -> &BTreeSet<String> {
        &self.known_ports
    }

    /// Current fetch status.
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    // ------------------------------------------------------------------
    // Fetch lifecycle
    // ------------------------------------------------------------------

    /// A fetch has started.
    pub fn begin_loading(&mut self) {
        self.status.begin();
    }

    /// The last fetch succeeded.
    pub fn finish_loading(&mut self) {
        self.status.finish();
    }

    /// The last fetch failed.
    pub fn fail_loading(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "Fleet fetch failed");
        self.status.fail(message);
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Replaces all vessels. See [`Collection::load`].
    pub fn load_vessels<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = VesselRecord>,
    {
        self.vessels.load(records)
    }

    /// Inserts or replaces one vessel.
    pub fn upsert_vessel(&mut self, record: VesselRecord) -> Result<()> {
        self.vessels.upsert(record)
    }

    /// Removes a vessel; unknown ids are a no-op.
    pub fn remove_vessel(&mut self, id: &str) -> Option<VesselRecord> {
        self.vessels.remove(id)
    }

    /// Adds the records accepted by an import batch.
    ///
    /// Records whose identifier already exists replace the stored one.
    /// Returns the number of records written.
    pub fn accept_import<I>(&mut self, accepted: I) -> Result<usize>
    where
        I: IntoIterator<Item = VesselRecord>,
    {
        let written = self.vessels.upsert_all(accepted)?;
        tracing::info!(written, total = self.vessels.len(), "Import accepted into store");
        Ok(written)
    }

    /// Replaces all responsible parties.
    pub fn load_parties<I>(&mut self, parties: I) -> Result<()>
    where
        I: IntoIterator<Item = ResponsibleParty>,
    {
        self.parties.load(parties)
    }

    /// Inserts or replaces one responsible party.
    pub fn upsert_party(&mut self, party: ResponsibleParty) -> Result<()> {
        self.parties.upsert(party)
    }

    /// Removes a responsible party; unknown ids are a no-op.
    ///
    /// Vessels referencing the party keep their reference.
    pub fn remove_party(&mut self, id: &str) -> Option<ResponsibleParty> {
        self.parties.remove(id)
    }

    /// Replaces all payments.
    pub fn load_payments<I>(&mut self, payments: I) -> Result<()>
    where
        I: IntoIterator<Item = Payment>,
    {
        self.payments.load(payments)
    }

    /// Inserts or replaces one payment.
    pub fn upsert_payment(&mut self, payment: Payment) -> Result<()> {
        self.payments.upsert(payment)
    }

    /// Removes a payment; unknown ids are a no-op.
    pub fn remove_payment(&mut self, id: &str) -> Option<Payment> {
        self.payments.remove(id)
    }

    /// Replaces the reference list of ports. Blank entries are dropped.
    pub fn set_known_ports<I, S>(&mut self, ports: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_ports = ports
            .into_iter()
            .map(|p| {
                let p: String = p.into();
                p.trim().to_string()
            })
            .filter(|p| !p.is_empty())
            .collect();
    }
}
