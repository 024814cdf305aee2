//! Memoized views over the payment collection.

use std::sync::Arc;

use barq_core::Payment;
use barq_store::{Collection, Revision};

use crate::criteria::PaymentCriteria;
use crate::memo::{Memo, MemoStats};

/// Derived views over a payment collection.
#[derive(Debug, Default)]
pub struct PaymentViews {
    filtered: Memo<(Revision, PaymentCriteria), [Payment]>,
}

impl PaymentViews {
    /// Creates views with a cold cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Payments satisfying `criteria`, in insertion order.
    pub fn select_filtered(
        &self,
        payments: &Collection<Payment>,
        criteria: &PaymentCriteria,
    ) -> Arc<[Payment]> {
        let key = (payments.revision(), criteria.clone());
        self.filtered.get_or_compute(key, || {
            let matched: Vec<Payment> = payments
                .iter()
                .filter(|payment| criteria.matches(payment))
                .cloned()
                .collect();
            tracing::debug!(
                revision = %payments.revision(),
                matched = matched.len(),
                "Recomputing filtered payment view"
            );
            Arc::from(matched)
        })
    }

    /// Sum of the amounts of the payments matching `criteria`, in minor
    /// units. Saturates instead of overflowing.
    pub fn select_total(&self, payments: &Collection<Payment>, criteria: &PaymentCriteria) -> u64 {
        self.select_filtered(payments, criteria)
            .iter()
            .fold(0u64, |total, payment| total.saturating_add(payment.amount))
    }

    /// Cache counters, for diagnostics.
    pub fn stats(&self) -> MemoStats {
        self.filtered.stats()
    }
}
