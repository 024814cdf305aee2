//! Memoized views over the vessel collection.

use std::collections::BTreeSet;
use std::sync::Arc;

use barq_core::VesselRecord;
use barq_store::{Collection, Revision};

use crate::criteria::FilterCriteria;
use crate::memo::{Memo, MemoStats};

/// Hit/miss counters of every vessel view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VesselViewStats {
    /// `select_all` memo.
    pub all: MemoStats,
    /// `select_filtered` memo.
    pub filtered: MemoStats,
    /// `select_ports` memo.
    pub ports: MemoStats,
}

/// Derived views over a vessel collection.
///
/// A `VesselViews` never mutates the collection it is given. Each view
/// recomputes only when the collection's revision (or, for the filtered
/// view, the criteria value) differs from the previous call.
#[derive(Debug, Default)]
pub struct VesselViews {
    all: Memo<Revision, [VesselRecord]>,
    filtered: Memo<(Revision, FilterCriteria), [VesselRecord]>,
    ports: Memo<Revision, BTreeSet<String>>,
}

impl VesselViews {
    /// Creates views with cold caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every vessel, in insertion order.
    pub fn select_all(&self, vessels: &Collection<VesselRecord>) -> Arc<[VesselRecord]> {
        self.all.get_or_compute(vessels.revision(), || {
            tracing::debug!(revision = %vessels.revision(), "Recomputing vessel list");
            Arc::from(vessels.as_slice())
        })
    }

    /// Like [`VesselViews::select_all`], with an absent store treated as
    /// empty.
    pub fn select_all_opt(&self, vessels: Option<&Collection<VesselRecord>>) -> Arc<[VesselRecord]> {
        match vessels {
            Some(vessels) => self.select_all(vessels),
            None => Arc::from(Vec::new()),
        }
    }

    /// Vessels satisfying every active constraint of `criteria`, in
    /// insertion order.
    pub fn select_filtered(
        &self,
        vessels: &Collection<VesselRecord>,
        criteria: &FilterCriteria,
    ) -> Arc<[VesselRecord]> {
        let key = (vessels.revision(), criteria.clone());
        self.filtered.get_or_compute(key, || {
            let predicate = criteria.predicate();
            let matched: Vec<VesselRecord> = vessels
                .iter()
                .filter(|vessel| predicate.matches(vessel))
                .cloned()
                .collect();
            tracing::debug!(
                revision = %vessels.revision(),
                total = vessels.len(),
                matched = matched.len(),
                "Recomputing filtered vessel view"
            );
            Arc::from(matched)
        })
    }

    /// The vessel with this identifier, or `None`.
    pub fn select_by_id(
        &self,
        vessels: &Collection<VesselRecord>,
        id: &str,
    ) -> Option<VesselRecord> {
        vessels.get(id).cloned()
    }

    /// Distinct home ports used by the collection, sorted. Values are
    /// returned as stored so each one works as a port filter.
    pub fn select_ports(&self, vessels: &Collection<VesselRecord>) -> Arc<BTreeSet<String>> {
        self.ports.get_or_compute(vessels.revision(), || {
            tracing::debug!(revision = %vessels.revision(), "Recomputing port set");
            Arc::new(
                vessels
                    .iter()
                    .map(|vessel| vessel.port.as_str())
                    .filter(|port| !port.is_empty())
                    .map(str::to_string)
                    .collect(),
            )
        })
    }

    /// Cache counters, for diagnostics.
    pub fn stats(&self) -> VesselViewStats {
        VesselViewStats {
            all: self.all.stats(),
            filtered: self.filtered.stats(),
            ports: self.ports.stats(),
        }
    }
}
