//! Status enums for vessels and payments.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Operational status of a registered vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VesselStatus {
    /// Vessel is registered and operating.
    #[default]
    Active,

    /// Vessel is registered but laid up, sold, or otherwise not operating.
    Inactive,
}

impl VesselStatus {
    /// Returns the canonical lowercase name, as used by filter criteria.
    pub fn as_str(&self) -> &'static str {
        match self {
            VesselStatus::Active => "active",
            VesselStatus::Inactive => "inactive",
        }
    }

    /// Returns `true` if the vessel is operating.
    pub fn is_active(&self) -> bool {
        matches!(self, VesselStatus::Active)
    }
}

impl fmt::Display for VesselStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VesselStatus {
    type Err = Error;

    /// Parses a status name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(VesselStatus::Active),
            "inactive" => Ok(VesselStatus::Inactive),
            other => Err(Error::contract(format!("unknown vessel status '{other}'"))),
        }
    }
}

/// Lifecycle state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Payment recorded, funds not yet confirmed.
    #[default]
    Pending,

    /// Funds received.
    Completed,

    /// Payment was rejected or bounced.
    Failed,
}

impl PaymentStatus {
    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
        }
    }

    /// Returns `true` if the payment can no longer change state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PaymentStatus::Completed | PaymentStatus::Failed)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(PaymentStatus::Pending),
            "completed" => Ok(PaymentStatus::Completed),
            "failed" => Ok(PaymentStatus::Failed),
            other => Err(Error::contract(format!("unknown payment status '{other}'"))),
        }
    }
}
