//! Payments recorded against vessels.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::PaymentStatus;
use crate::{Error, Record, Result};

/// A single payment (registration fee, dues, ...) for a vessel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Unique identifier.
    pub id: String,

    /// Vessel this payment belongs to.
    pub vessel_id: String,

    /// Amount in minor currency units (centimes).
    pub amount: u64,

    /// Date the payment was made.
    pub paid_on: NaiveDate,

    /// Lifecycle state.
    #[serde(default)]
    pub status: PaymentStatus,

    /// Receipt or bank reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Payment {
    /// Creates a pending payment.
    pub fn new(
        id: impl Into<String>,
        vessel_id: impl Into<String>,
        amount: u64,
        paid_on: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            vessel_id: vessel_id.into(),
            amount,
            paid_on,
            status: PaymentStatus::default(),
            reference: None,
        }
    }

    /// Sets the payment status.
    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.status = status;
        self
    }
}

impl Record for Payment {
    fn id(&self) -> &str {
        &self.id
    }

    fn check_invariants(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::invariant(&self.id, "identifier must not be empty"));
        }
        if self.vessel_id.trim().is_empty() {
            return Err(Error::invariant(&self.id, "payment must reference a vessel"));
        }
        Ok(())
    }
}
